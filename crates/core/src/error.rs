//! Errors surfaced by the fallible vector operations

/// Errors that can occur with vector operations that need a nonzero length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The operation needs a vector with nonzero magnitude
    ZeroMagnitude {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::ZeroMagnitude { operation } => {
                write!(f, "{operation}: vector has zero magnitude")
            }
        }
    }
}

impl std::error::Error for VectorError {}
