use chrono::{DateTime, Utc};

/// Exhaustive taxonomy of expected operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The targeted document does not exist in the backend.
    NotFound,
    /// The backend reported no inserted identity.
    NotInserted,
}

impl ErrorKind {
    /// Numeric code of this failure kind.
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::NotFound => 1,
            ErrorKind::NotInserted => 2,
        }
    }

    /// Canonical message matching the code.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "No Document Found",
            ErrorKind::NotInserted => "No Document Inserted",
        }
    }
}

/// One recorded expected failure: what went wrong, during which operation,
/// and when.
#[derive(Debug, Clone)]
pub struct ErrorLogEntry {
    kind: ErrorKind,
    context: &'static str,
    timestamp: DateTime<Utc>,
}

impl ErrorLogEntry {
    pub(crate) fn new(kind: ErrorKind, context: &'static str) -> Self {
        Self {
            kind,
            context,
            timestamp: Utc::now(),
        }
    }

    /// Failure kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Numeric failure code.
    pub fn error_code(&self) -> u8 {
        self.kind.code()
    }

    /// Human-readable message matching the code.
    pub fn error_msg(&self) -> &'static str {
        self.kind.message()
    }

    /// Operation during which the failure occurred.
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Wall-clock time of the failure.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
