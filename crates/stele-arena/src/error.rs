//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors from sealing a construction session.
///
/// Both variants abort the build: a blob with an unpopulated column is
/// never produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinalizeError {
    /// A root column was never begun during the session.
    MissingColumn {
        /// Name of the column, from the root schema.
        column: &'static str,
    },
    /// A begun column has slots that were never written.
    IncompleteColumn {
        /// Name of the column, from the root schema.
        column: &'static str,
        /// Number of unwritten slots.
        missing_slots: u32,
    },
}

impl fmt::Display for FinalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column } => {
                write!(f, "column '{column}' was never begun")
            }
            Self::IncompleteColumn {
                column,
                missing_slots,
            } => {
                write!(
                    f,
                    "column '{column}' has {missing_slots} unwritten slot(s)"
                )
            }
        }
    }
}

impl Error for FinalizeError {}
