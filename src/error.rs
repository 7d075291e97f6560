use std::io;
use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedLine,
    MalformedHeader,
    Structure,
    Io,
    Encoding,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("input is empty; expected a first line of the form `key <dictionary> {{`")]
    EmptyInput,

    #[error("first line should be of the form `key <dictionary> {{`, got: {line}")]
    MalformedHeader { line: String },

    #[error("line {line_number}: do not know how to parse: {line}")]
    MalformedLine { line: String, line_number: usize },

    #[error("line {line_number}: block `{key}` is never closed")]
    UnterminatedBlock { key: String, line_number: usize },

    #[error("line {line_number}: unexpected content after the top-level block: {line}")]
    TrailingContent { line: String, line_number: usize },

    #[error("line {line_number}: blocks nested deeper than {limit}")]
    DepthLimitExceeded { limit: usize, line_number: usize },

    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("error encoding json: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedLine { .. } => ErrorKind::MalformedLine,
            Error::EmptyInput | Error::MalformedHeader { .. } => ErrorKind::MalformedHeader,
            Error::UnterminatedBlock { .. }
            | Error::TrailingContent { .. }
            | Error::DepthLimitExceeded { .. } => ErrorKind::Structure,
            Error::Io(_) | Error::InvalidUtf8(_) => ErrorKind::Io,
            Error::Encode(_) => ErrorKind::Encoding,
        }
    }

    /// 1-based input line the error points at, when there is one.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Error::MalformedLine { line_number, .. }
            | Error::UnterminatedBlock { line_number, .. }
            | Error::TrailingContent { line_number, .. }
            | Error::DepthLimitExceeded { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Encode(err)
        }
    }
}
