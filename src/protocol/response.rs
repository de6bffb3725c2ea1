//! Response definitions
//!
//! Represents responses to clients.

use crate::record::Record;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Error,
}

/// A response to send to a client
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Write applied
    Ok,

    /// Health check reply
    Pong,

    /// Key not present
    NotFound,

    /// A single record (GET)
    Record(Record),

    /// Zero or more records (queries); empty means nothing matched
    Records(Vec<Record>),

    /// Range-sum result
    Sum(f64),

    /// Record count
    Count(usize),

    /// Rejected command
    Error(String),
}

impl Response {
    /// Create an ERROR response
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error(message.into())
    }

    /// Get the status of this response
    pub fn status(&self) -> Status {
        match self {
            Response::NotFound => Status::NotFound,
            Response::Error(_) => Status::Error,
            _ => Status::Ok,
        }
    }
}
