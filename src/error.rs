use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::ErrorCode;

/// Reasons for which [`crate::HtmlParser::parse`] reports failure.
///
/// Malformed markup is never an error: unterminated comments, broken end tags and similar
/// constructs are reinterpreted and reported as regular events instead.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ParseError {
    /// No document was available, either because reading the input failed or because it was not
    /// valid UTF-8. Parsing never started.
    ///
    /// This is the only error that is also reported through [`crate::Emitter::parse_error`].
    #[error("the document is empty or could not be decoded as UTF-8")]
    EmptyDocument,

    /// [`crate::HtmlParser::abort_parsing`] was called while the document was being parsed.
    #[error("parsing was aborted")]
    Aborted,
}

impl ParseError {
    /// The corresponding code of the compatibility catalog.
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            ParseError::EmptyDocument => ErrorCode::EmptyDocument,
            ParseError::Aborted => ErrorCode::DelegateAbortedParse,
        }
    }
}

/// An error produced while turning a [`crate::Readable`] into document text.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Reading the underlying source failed.
    #[error("failed to read document")]
    Io(#[from] io::Error),

    /// The input was not valid UTF-8.
    #[error("document is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::{ParseError, ReadError};
    use crate::ErrorCode;

    #[test]
    fn codes() {
        assert_eq!(ParseError::EmptyDocument.code(), ErrorCode::EmptyDocument);
        assert_eq!(ParseError::Aborted.code(), ErrorCode::DelegateAbortedParse);
    }

    #[test]
    fn read_error_from_utf8() {
        let err: ReadError = String::from_utf8(vec![0xff]).unwrap_err().into();
        assert!(matches!(err, ReadError::Utf8(_)));
        assert_eq!(err.to_string(), "document is not valid UTF-8");
    }
}
