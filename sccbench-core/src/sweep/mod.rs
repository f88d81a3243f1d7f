//! Parameter-space sweeps.
//!
//! [`SweepController`] walks `vertex_count × density` and cross-checks every
//! candidate against the reference. [`MemorySweepController`] profiles one
//! candidate at one point.

mod controller;
mod memory;

use std::{fmt, ops::RangeInclusive};

use crate::graph::clamp_vertex_count;

pub use controller::SweepController;
pub use memory::MemorySweepController;

/// Seed used when a controller is not given one explicitly.
pub const DEFAULT_SEED: u64 = 42;

/// Bounds of a two-dimensional sweep.
///
/// # Examples
/// ```
/// use sccbench_core::SweepBounds;
///
/// let bounds = SweepBounds {
///     min_vertices: 0,
///     max_vertices: 4,
///     min_density: 0.25,
///     max_density: 0.75,
///     density_step: 0.25,
/// };
/// assert_eq!(bounds.vertex_counts(), 2..=4);
/// assert_eq!(bounds.densities().collect::<Vec<_>>(), vec![0.25, 0.5, 0.75]);
/// assert_eq!(bounds.to_string(), "V=2..=4,p=0.25..=0.75 step 0.25");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepBounds {
    /// Smallest vertex count; raised to 2 if lower.
    pub min_vertices: usize,
    /// Largest vertex count, inclusive.
    pub max_vertices: usize,
    /// First density visited.
    pub min_density: f32,
    /// Largest density visited, inclusive.
    pub max_density: f32,
    /// Amount added to the density after each point.
    pub density_step: f32,
}

impl SweepBounds {
    /// Vertex counts visited, in unit steps.
    ///
    /// Empty when `max_vertices` is below the clamped minimum.
    #[must_use]
    pub const fn vertex_counts(&self) -> RangeInclusive<usize> {
        clamp_vertex_count(self.min_vertices)..=self.max_vertices
    }

    /// Densities visited for every vertex count.
    #[must_use]
    pub const fn densities(&self) -> DensitySteps {
        DensitySteps::new(self.min_density, self.max_density, self.density_step)
    }
}

impl fmt::Display for SweepBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V={}..={},p={}..={} step {}",
            clamp_vertex_count(self.min_vertices),
            self.max_vertices,
            self.min_density,
            self.max_density,
            self.density_step,
        )
    }
}

/// Density values visited by a sweep, accumulated in `f32`.
///
/// The first value is always `min`. Each further value is the previous one
/// plus `step`, emitted while it stays `<= max`. Because the step is
/// accumulated rather than multiplied, rounding decides whether a bound
/// that is an exact multiple of the step is reached: `0.1` stepped by
/// `0.1` up to `1.0` visits nine values, the last being `0.9000001`,
/// because the tenth accumulates to `1.0000001`.
///
/// A step that is not positive, or too small to change the accumulated
/// value, ends the sequence after the current value.
///
/// # Examples
/// ```
/// use sccbench_core::DensitySteps;
///
/// assert_eq!(DensitySteps::new(0.5, 0.1, 0.1).count(), 1);
/// assert_eq!(DensitySteps::new(0.5, 1.0, -0.1).count(), 1);
/// assert_eq!(DensitySteps::new(0.0, 1.0, 0.5).count(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensitySteps {
    next: Option<f32>,
    max: f32,
    step: f32,
}

impl DensitySteps {
    /// Starts a sequence at `min`.
    #[must_use]
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self {
            next: Some(min),
            max,
            step,
        }
    }
}

impl Iterator for DensitySteps {
    type Item = f32;

    #[expect(
        clippy::float_arithmetic,
        reason = "density accumulation is floating-point by definition"
    )]
    fn next(&mut self) -> Option<f32> {
        let current = self.next.take()?;
        if self.step > 0.0 {
            let following = current + self.step;
            if following > current && following <= self.max {
                self.next = Some(following);
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn bounds(min_vertices: usize, max_vertices: usize) -> SweepBounds {
        SweepBounds {
            min_vertices,
            max_vertices,
            min_density: 0.1,
            max_density: 0.3,
            density_step: 0.1,
        }
    }

    #[rstest]
    #[case::clamped_min(0, 5, 4)]
    #[case::unit(2, 2, 1)]
    #[case::regular(3, 7, 5)]
    #[case::inverted(6, 3, 0)]
    #[case::below_clamp(0, 1, 0)]
    fn vertex_counts_start_at_two(
        #[case] min_vertices: usize,
        #[case] max_vertices: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(bounds(min_vertices, max_vertices).vertex_counts().count(), expected);
    }

    #[rstest]
    #[case::zero_step(0.2, 0.8, 0.0)]
    #[case::negative_step(0.2, 0.8, -0.5)]
    #[case::nan_step(0.2, 0.8, f32::NAN)]
    #[case::inverted_bounds(0.8, 0.2, 0.1)]
    #[case::absorbed_step(1.0e9, 2.0e9, 1.0e-9)]
    fn degenerate_steps_visit_min_density_once(
        #[case] min: f32,
        #[case] max: f32,
        #[case] step: f32,
    ) {
        let visited: Vec<f32> = DensitySteps::new(min, max, step).collect();
        assert_eq!(visited, vec![min]);
    }

    #[rstest]
    fn float_accumulation_is_preserved() {
        let mut expected = Vec::new();
        let mut density = 0.1_f32;
        while density <= 1.0 {
            expected.push(density);
            density += 0.1;
        }
        let visited: Vec<f32> = DensitySteps::new(0.1, 1.0, 0.1).collect();
        assert_eq!(visited, expected);
    }

    #[rstest]
    fn accumulated_rounding_can_skip_the_upper_bound() {
        let visited: Vec<f32> = DensitySteps::new(0.1, 1.0, 0.1).collect();
        assert_eq!(visited.len(), 9);
    }

    #[rstest]
    fn unit_density_sweep_has_one_point() {
        let visited: Vec<f32> = DensitySteps::new(1.0, 1.0, 1.0).collect();
        assert_eq!(visited, vec![1.0]);
    }
}
