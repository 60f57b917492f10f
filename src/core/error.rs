use std::error::Error;
use std::fmt::{self, Display};

/// Error type for award loading, storage and configuration
#[derive(Debug)]
pub enum AwardError {
    /// Required configuration is missing or unusable
    Configuration(String),
    /// A source row could not be turned into an award record
    MalformedRecord {
        /// 1-based data line in the source file (0 when not from a file)
        line: u64,
        /// What was wrong with the row
        reason: String,
    },
    /// Error raised by the record store
    Storage(String),
    /// Error reading the dataset source
    Io(String),
}

impl AwardError {
    /// Create a malformed record error not tied to a source line
    pub fn malformed(reason: impl Into<String>) -> Self {
        AwardError::MalformedRecord {
            line: 0,
            reason: reason.into(),
        }
    }

    /// Attach a source line to a malformed record error
    pub fn at_line(self, line: u64) -> Self {
        match self {
            AwardError::MalformedRecord { reason, .. } => AwardError::MalformedRecord { line, reason },
            other => other,
        }
    }
}

impl Display for AwardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AwardError::MalformedRecord { line: 0, reason } => write!(f, "Malformed record: {}", reason),
            AwardError::MalformedRecord { line, reason } => {
                write!(f, "Malformed record on line {}: {}", line, reason)
            }
            AwardError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AwardError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for AwardError {}

impl From<rusqlite::Error> for AwardError {
    fn from(err: rusqlite::Error) -> Self {
        AwardError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for AwardError {
    fn from(err: std::io::Error) -> Self {
        AwardError::Io(err.to_string())
    }
}

impl From<csv::Error> for AwardError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        match err.kind() {
            csv::ErrorKind::Io(_) => AwardError::Io(err.to_string()),
            _ => AwardError::MalformedRecord {
                line,
                reason: err.to_string(),
            },
        }
    }
}
