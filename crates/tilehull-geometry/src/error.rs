//! Error types for the geometry library.

/// Errors that can occur while turning raw input into geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A coordinate token could not be read as two base-10 integers.
    /// The offending token is carried verbatim for diagnostics.
    #[error("invalid point {token:?}: expected \"<integer>, <integer>\"")]
    Parse {
        /// The raw token as it was supplied.
        token: String,
    },
}

impl GeometryError {
    /// Builds a parse error for the given raw token.
    pub fn parse(token: impl Into<String>) -> Self {
        GeometryError::Parse {
            token: token.into(),
        }
    }
}
