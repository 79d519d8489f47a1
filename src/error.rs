//! Error types for the doctext library.

use thiserror::Error;

/// Result type alias for doctext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while classifying or rendering a report.
#[derive(Error, Debug)]
pub enum Error {
    /// No document was supplied by the document source.
    #[error("no document available: unable to run Doctor")]
    AbsentDocument,

    /// The document does not match either of the known report shapes.
    #[error("malformed Doctor document: {0}")]
    MalformedDocument(String),

    /// Error serializing a report (JSON output).
    #[error("rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AbsentDocument;
        assert_eq!(err.to_string(), "no document available: unable to run Doctor");

        let err = Error::MalformedDocument("missing <h1> heading".to_string());
        assert_eq!(
            err.to_string(),
            "malformed Doctor document: missing <h1> heading"
        );
    }
}
