//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A row or a cell that does not follow the corpus layout.
    Format { line: u64, reason: String },
    /// The header row is not the expected field list.
    Header(String),
    UnknownEncoding(String),
    Custom(String),
}

impl Error {
    pub(crate) fn format<S: Into<String>>(line: u64, reason: S) -> Self {
        Error::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Line of the offending record, if the error is tied to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            Error::Format { line, .. } => Some(*line),
            Error::Csv(e) => e.position().map(|p| p.line()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Format { line, reason } => write!(f, "line {line}: {reason}"),
            Error::Header(s) => write!(f, "unexpected header: {s}"),
            Error::UnknownEncoding(s) => write!(f, "unknown encoding label {s:?}"),
            Error::Custom(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}
