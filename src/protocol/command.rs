//! Command definitions
//!
//! Represents commands read from a client.

use crate::record::{Key, Record};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Put,
    Get,
    Delete,
    All,
    Category,
    Range,
    Prefix,
    Sum,
    Len,
    Ping,
}

impl CommandType {
    /// The verb that introduces this command on the wire
    pub fn verb(self) -> &'static str {
        match self {
            CommandType::Put => "PUT",
            CommandType::Get => "GET",
            CommandType::Delete => "DEL",
            CommandType::All => "ALL",
            CommandType::Category => "CATEGORY",
            CommandType::Range => "RANGE",
            CommandType::Prefix => "PREFIX",
            CommandType::Sum => "SUM",
            CommandType::Len => "LEN",
            CommandType::Ping => "PING",
        }
    }

    /// Look up a verb, ignoring case
    pub fn from_verb(verb: &str) -> Option<Self> {
        let command_type = match verb.to_ascii_uppercase().as_str() {
            "PUT" => CommandType::Put,
            "GET" => CommandType::Get,
            "DEL" | "DELETE" => CommandType::Delete,
            "ALL" => CommandType::All,
            "CATEGORY" => CommandType::Category,
            "RANGE" => CommandType::Range,
            "PREFIX" => CommandType::Prefix,
            "SUM" => CommandType::Sum,
            "LEN" => CommandType::Len,
            "PING" => CommandType::Ping,
            _ => return None,
        };
        Some(command_type)
    }

    /// Number of arguments following the verb
    pub fn arity(self) -> usize {
        match self {
            CommandType::Put => 4,
            CommandType::Range | CommandType::Sum => 2,
            CommandType::Get | CommandType::Delete | CommandType::Category | CommandType::Prefix => 1,
            CommandType::All | CommandType::Len | CommandType::Ping => 0,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert or replace a record under its own id
    Put { record: Record },

    /// Point lookup
    Get { key: Key },

    /// Remove a record
    Delete { key: Key },

    /// Every stored record
    All,

    /// Records in a category
    Category { category: String },

    /// Records with value in `[min, max]`
    Range { min: f64, max: f64 },

    /// Records whose name starts with a prefix
    Prefix { prefix: String },

    /// Sum of values over keys in `[start, end]`
    Sum { start: Key, end: Key },

    /// Number of stored records
    Len,

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Put { .. } => CommandType::Put,
            Command::Get { .. } => CommandType::Get,
            Command::Delete { .. } => CommandType::Delete,
            Command::All => CommandType::All,
            Command::Category { .. } => CommandType::Category,
            Command::Range { .. } => CommandType::Range,
            Command::Prefix { .. } => CommandType::Prefix,
            Command::Sum { .. } => CommandType::Sum,
            Command::Len => CommandType::Len,
            Command::Ping => CommandType::Ping,
        }
    }
}
