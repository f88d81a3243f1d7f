//! Erdős–Rényi digraph generation.

use rand::{Rng, rngs::SmallRng};

use super::DirectedGraph;

/// Smallest vertex count a generated graph may have.
pub const MIN_VERTEX_COUNT: usize = 2;

/// Raises `vertex_count` to [`MIN_VERTEX_COUNT`].
///
/// # Examples
/// ```
/// use sccbench_core::clamp_vertex_count;
///
/// assert_eq!(clamp_vertex_count(0), 2);
/// assert_eq!(clamp_vertex_count(1), 2);
/// assert_eq!(clamp_vertex_count(9), 9);
/// ```
#[must_use]
pub const fn clamp_vertex_count(vertex_count: usize) -> usize {
    if vertex_count < MIN_VERTEX_COUNT {
        MIN_VERTEX_COUNT
    } else {
        vertex_count
    }
}

/// Generates a `G(n, p)` random digraph.
///
/// The vertex count is clamped with [`clamp_vertex_count`]. Every ordered
/// pair of distinct vertices is visited in row-major order and one uniform
/// draw from `[0, 1)` decides whether it becomes an edge. `density` is not
/// clamped: values at or above `1.0` keep every pair, values at or below
/// `0.0` (and NaN) keep none.
///
/// The caller owns `rng`; reusing it across calls yields a reproducible
/// sequence of graphs for a fixed seed.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use sccbench_core::generate;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let complete = generate(4, 1.0, &mut rng);
/// assert_eq!(complete.edge_count(), 12);
/// let empty = generate(4, 0.0, &mut rng);
/// assert_eq!(empty.edge_count(), 0);
/// ```
#[must_use]
pub fn generate(requested_vertices: usize, density: f32, rng: &mut SmallRng) -> DirectedGraph {
    let vertex_count = clamp_vertex_count(requested_vertices);
    let threshold = f64::from(density);
    let mut successors = Vec::with_capacity(vertex_count);
    let mut edge_count = 0_usize;
    for source in 0..vertex_count {
        let row: Vec<usize> = (0..vertex_count)
            .filter(|&target| target != source)
            .filter(|_| rng.gen_range(0.0_f64..1.0) < threshold)
            .collect();
        edge_count = edge_count.saturating_add(row.len());
        successors.push(row);
    }
    DirectedGraph {
        successors,
        edge_count,
    }
}
