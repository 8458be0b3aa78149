//! Error types and handling for squeeze
//!
//! This module provides the error type shared by all squeeze operations.
//! Every failure is local and synchronous: the wire format is deterministic,
//! so no error is worth retrying and no partial output is ever produced.

/// Main error type for squeeze operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// Encode was called with no symbols present
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// Malformed encoded blob structure
    #[error("format error: {message}")]
    Format {
        /// Description of the structural problem
        message: String,
    },

    /// Malformed bit-path payload
    #[error("payload error: {message}")]
    Payload {
        /// Description of the payload problem
        message: String,
    },

    /// Registry lookup miss
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm {
        /// The name that was requested
        name: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty-input errors
    EmptyInput,
    /// Blob structure errors
    Format,
    /// Bit-path payload errors
    Payload,
    /// Algorithm registry errors
    UnknownAlgorithm,
    /// I/O related errors
    Io,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::Format { .. } => ErrorKind::Format,
            Self::Payload { .. } => ErrorKind::Payload,
            Self::UnknownAlgorithm { .. } => ErrorKind::UnknownAlgorithm,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Create a new format error
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a new payload error
    pub fn payload<S: Into<String>>(message: S) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a new unknown-algorithm error
    pub fn unknown_algorithm<S: Into<String>>(name: S) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::EmptyInput, ErrorKind::EmptyInput)]
    #[case(Error::format("bad header"), ErrorKind::Format)]
    #[case(Error::payload("stray byte"), ErrorKind::Payload)]
    #[case(Error::unknown_algorithm("lzw"), ErrorKind::UnknownAlgorithm)]
    fn test_error_kind(#[case] error: Error, #[case] kind: ErrorKind) {
        assert_eq!(error.kind(), kind);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test file");
        let error = Error::from(io_error);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("test file"));
    }

    #[test]
    fn test_messages_name_the_problem() {
        assert!(Error::format("blob shorter than declared")
            .to_string()
            .contains("shorter than declared"));
        assert!(Error::unknown_algorithm("rle").to_string().contains("rle"));
    }
}
