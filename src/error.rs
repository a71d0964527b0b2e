use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No shape hypothesis matched the wire node. The only failure the
    /// wrappers themselves produce; type mismatches never land here.
    Unrepresentable,
    /// The input could not be read at all (syntax, truncation, io).
    Decode,
    Encode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn unrepresentable(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unrepresentable,
            message: message.into(),
            location: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: message.into(),
            location: None,
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Encode,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub(crate) fn from_read(err: serde_json::Error) -> Self {
        let kind = if err.is_data() {
            ErrorKind::Unrepresentable
        } else {
            ErrorKind::Decode
        };
        let location = (err.line() != 0).then(|| Location {
            line: err.line(),
            column: err.column(),
        });
        Self {
            kind,
            message: err.to_string(),
            location,
        }
    }

    pub(crate) fn from_write(err: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Encode,
            message: err.to_string(),
            location: None,
        }
    }
}
