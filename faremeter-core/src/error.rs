//! Coarse error categories shared by every boundary.

use std::fmt;

/// Machine-readable classification of a failed run.
///
/// Callers use the category to choose between a client-error and a
/// server-error response; the message carries the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorCategory {
    /// The request or its data cannot produce a result.
    InvalidInput,
    /// Configuration, transport, or other infrastructure failure.
    Internal,
}

impl ErrorCategory {
    /// Stable identifier used in serialised error reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
