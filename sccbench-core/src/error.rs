//! Error types for the sccbench core library.
//!
//! Correctness mismatches and measurement anomalies are data and live in
//! [`crate::SweepRecord`]. Everything here aborts a sweep.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Failure reported by a candidate [`crate::SccAlgorithm`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AlgorithmError {
    /// The algorithm gave up on the supplied graph.
    #[error("{reason}")]
    Failed {
        /// Human-readable explanation supplied by the algorithm.
        reason: Arc<str>,
    },
}

impl AlgorithmError {
    /// Builds an [`AlgorithmError::Failed`] from any displayable reason.
    ///
    /// # Examples
    /// ```
    /// use sccbench_core::AlgorithmError;
    ///
    /// let err = AlgorithmError::failed("stack exhausted");
    /// assert_eq!(err.to_string(), "stack exhausted");
    /// ```
    #[must_use]
    pub fn failed(reason: impl fmt::Display) -> Self {
        Self::Failed {
            reason: Arc::from(reason.to_string()),
        }
    }
}

/// Errors raised while building a [`crate::DirectedGraph`] by hand.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint does not name a vertex of the graph.
    #[error("vertex {vertex} is out of bounds for a graph of {vertex_count} vertices")]
    VertexOutOfBounds {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Errors raised while sampling process memory.
#[derive(Debug, Error)]
pub enum ProfilingError {
    /// Any input/output failure while reading process information.
    #[error("profiling I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The `/proc/self/status` parser could not locate a required key.
    #[error("missing field `{field}` in /proc/self/status")]
    MissingProcField {
        /// The required field name.
        field: &'static str,
    },
    /// A numeric field in `/proc/self/status` could not be parsed.
    #[error("invalid numeric value `{value}` for /proc field `{field}`")]
    InvalidProcField {
        /// The required field name.
        field: &'static str,
        /// The unparseable value.
        value: String,
    },
    /// A process status field had an unexpected unit.
    #[error("unsupported unit `{unit}` for /proc field `{field}`")]
    UnsupportedProcUnit {
        /// The required field name.
        field: &'static str,
        /// The unit found in `/proc`.
        unit: String,
    },
    /// Sampling is unavailable on the current operating system.
    #[error("resident-set sampling is not supported on `{os}`")]
    UnsupportedPlatform {
        /// Name of the unsupported operating system.
        os: &'static str,
    },
    /// A kibibyte count did not fit in a byte count.
    #[error("`{context}` overflowed when converted to bytes")]
    Overflow {
        /// Status field whose value overflowed.
        context: &'static str,
    },
}

/// Fatal error surfaced by the sweep and memory sweep controllers.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BenchError {
    /// A candidate (or the reference) returned an error instead of a result.
    #[error("algorithm `{algorithm}` failed: {error}")]
    AlgorithmFailed {
        /// Name of the failing algorithm.
        algorithm: Arc<str>,
        /// Error reported by the algorithm.
        #[source]
        error: AlgorithmError,
    },
    /// A candidate returned an assignment that does not cover every vertex.
    #[error(
        "algorithm `{algorithm}` returned {actual} component ids for a graph of {expected} vertices"
    )]
    AssignmentLengthMismatch {
        /// Name of the misbehaving algorithm.
        algorithm: Arc<str>,
        /// Number of vertices in the graph.
        expected: usize,
        /// Length of the returned assignment.
        actual: usize,
    },
    /// Resident memory could not be sampled.
    #[error("memory sampling failed: {0}")]
    Profiling(#[from] ProfilingError),
}

define_error_codes! {
    /// Stable codes describing [`BenchError`] variants.
    enum BenchErrorCode for BenchError {
        /// A candidate (or the reference) returned an error instead of a result.
        AlgorithmFailed => AlgorithmFailed { .. } => "SCCBENCH_ALGORITHM_FAILED",
        /// A candidate returned an assignment that does not cover every vertex.
        AssignmentLengthMismatch => AssignmentLengthMismatch { .. } => "SCCBENCH_ASSIGNMENT_LENGTH_MISMATCH",
        /// Resident memory could not be sampled.
        ProfilingFailed => Profiling { .. } => "SCCBENCH_PROFILING_FAILED",
    }
}

/// Convenient alias for results returned by the controllers.
pub type Result<T> = core::result::Result<T, BenchError>;
