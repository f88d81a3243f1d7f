//! Correctness comparison between a candidate and the reference.

use serde::Serialize;

use crate::algorithms::SccOutcome;

/// How a candidate's assignment is matched against the reference.
///
/// # Examples
/// ```
/// use sccbench_core::{ComparisonMode, SccOutcome, is_correct};
///
/// let reference = SccOutcome::new(2, vec![0, 0, 1]);
/// let renumbered = SccOutcome::new(2, vec![1, 1, 0]);
/// assert!(!is_correct(&reference, &renumbered, ComparisonMode::Strict));
/// assert!(is_correct(&reference, &renumbered, ComparisonMode::Partition));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Same count and the same id at every vertex.
    #[default]
    Strict,
    /// Same count and the same partition, whatever the id numbering.
    Partition,
}

impl ComparisonMode {
    /// Stable lowercase identifier for logs and CLI values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Partition => "partition",
        }
    }
}

/// Returns whether `candidate` matches `reference` under `mode`.
///
/// Both modes first require equal component counts. Strict mode then
/// compares the id sequences element-wise, so an algorithm that finds the
/// right components but numbers them differently is reported as incorrect.
#[must_use]
pub fn is_correct(reference: &SccOutcome, candidate: &SccOutcome, mode: ComparisonMode) -> bool {
    if reference.component_count != candidate.component_count {
        return false;
    }
    match mode {
        ComparisonMode::Strict => reference.assignment == candidate.assignment,
        ComparisonMode::Partition => {
            reference.assignment.canonical() == candidate.assignment.canonical()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::strict(ComparisonMode::Strict)]
    #[case::partition(ComparisonMode::Partition)]
    fn comparison_is_reflexive(#[case] mode: ComparisonMode) {
        let outcome = SccOutcome::new(3, vec![2, 1, 1, 0]);
        assert!(is_correct(&outcome, &outcome, mode));
    }

    #[rstest]
    #[case::strict(ComparisonMode::Strict)]
    #[case::partition(ComparisonMode::Partition)]
    fn count_mismatch_fails_even_with_equal_assignments(#[case] mode: ComparisonMode) {
        let reference = SccOutcome::new(2, vec![0, 1]);
        let candidate = SccOutcome::new(3, vec![0, 1]);
        assert!(!is_correct(&reference, &candidate, mode));
    }

    #[rstest]
    fn partition_mode_rejects_a_different_partition() {
        let reference = SccOutcome::new(2, vec![0, 0, 1]);
        let candidate = SccOutcome::new(2, vec![0, 1, 1]);
        assert!(!is_correct(&reference, &candidate, ComparisonMode::Partition));
    }
}
