//! Protocol Module
//!
//! Defines the line-oriented text protocol used by the CLI.
//!
//! ## Request Format
//! One command per line, whitespace-separated tokens, verbs case-insensitive:
//! ```text
//! PUT <id> <name> <category> <value>
//! GET <id>
//! DEL <id>
//! ALL
//! CATEGORY <category>
//! RANGE <min> <max>
//! PREFIX <prefix>
//! SUM <start> <end>
//! LEN
//! PING
//! ```
//! Blank lines and lines starting with `#` are skipped by `read_command`.
//!
//! ## Response Format
//! ```text
//! OK | PONG | NOT_FOUND | ERROR <message>
//! RECORD <id> <name> <category> <value>
//! RECORDS <n>            followed by n RECORD lines
//! SUM <total>
//! COUNT <n>
//! ```

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::{Response, Status};
pub use codec::{format_command, parse_command, format_response, read_command, write_response};
