//! Protocol codec
//!
//! Parsing and formatting functions for the line protocol.
//!
//! Tokens are separated by ASCII whitespace, so names and categories are
//! single words on the wire.

use std::io::{BufRead, Write};

use crate::error::{Result, StoreError};
use crate::record::{Key, Record};
use super::{Command, CommandType, Response};

// =============================================================================
// Command Parsing/Formatting
// =============================================================================

/// Parse one command line
pub fn parse_command(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let verb = tokens
        .next()
        .ok_or_else(|| StoreError::Protocol("Empty command".to_string()))?;
    let command_type = CommandType::from_verb(verb)
        .ok_or_else(|| StoreError::Protocol(format!("Unknown command: {}", verb)))?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != command_type.arity() {
        return Err(StoreError::Protocol(format!(
            "{} command: expected {} arguments, got {}",
            command_type.verb(),
            command_type.arity(),
            args.len()
        )));
    }

    let command = match command_type {
        CommandType::Put => Command::Put {
            record: Record::new(
                parse_key(command_type, args[0])?,
                args[1],
                args[2],
                parse_value(command_type, args[3])?,
            ),
        },
        CommandType::Get => Command::Get {
            key: parse_key(command_type, args[0])?,
        },
        CommandType::Delete => Command::Delete {
            key: parse_key(command_type, args[0])?,
        },
        CommandType::All => Command::All,
        CommandType::Category => Command::Category {
            category: args[0].to_string(),
        },
        CommandType::Range => Command::Range {
            min: parse_value(command_type, args[0])?,
            max: parse_value(command_type, args[1])?,
        },
        CommandType::Prefix => Command::Prefix {
            prefix: args[0].to_string(),
        },
        CommandType::Sum => Command::Sum {
            start: parse_key(command_type, args[0])?,
            end: parse_key(command_type, args[1])?,
        },
        CommandType::Len => Command::Len,
        CommandType::Ping => Command::Ping,
    };
    Ok(command)
}

/// Format a command as a single line (no trailing newline)
pub fn format_command(command: &Command) -> String {
    let verb = command.command_type().verb();
    match command {
        Command::Put { record } => format!(
            "{} {} {} {} {}",
            verb, record.id, record.name, record.category, record.value
        ),
        Command::Get { key } | Command::Delete { key } => format!("{} {}", verb, key),
        Command::Category { category } => format!("{} {}", verb, category),
        Command::Range { min, max } => format!("{} {} {}", verb, min, max),
        Command::Prefix { prefix } => format!("{} {}", verb, prefix),
        Command::Sum { start, end } => format!("{} {} {}", verb, start, end),
        Command::All | Command::Len | Command::Ping => verb.to_string(),
    }
}

fn parse_key(command_type: CommandType, token: &str) -> Result<Key> {
    token.parse().map_err(|_| {
        StoreError::Protocol(format!(
            "{} command: invalid key {:?}",
            command_type.verb(),
            token
        ))
    })
}

fn parse_value(command_type: CommandType, token: &str) -> Result<f64> {
    token.parse().map_err(|_| {
        StoreError::Protocol(format!(
            "{} command: invalid number {:?}",
            command_type.verb(),
            token
        ))
    })
}

// =============================================================================
// Response Formatting
// =============================================================================

/// Format a response. `Records` spans one header line plus one line per record.
pub fn format_response(response: &Response) -> String {
    match response {
        Response::Ok => "OK".to_string(),
        Response::Pong => "PONG".to_string(),
        Response::NotFound => "NOT_FOUND".to_string(),
        Response::Error(message) => format!("ERROR {}", message),
        Response::Record(record) => format_record(record),
        Response::Records(records) => {
            let mut out = format!("RECORDS {}", records.len());
            for record in records {
                out.push('\n');
                out.push_str(&format_record(record));
            }
            out
        }
        Response::Sum(total) => format!("SUM {}", total),
        Response::Count(count) => format!("COUNT {}", count),
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "RECORD {} {} {} {}",
        record.id, record.name, record.category, record.value
    )
}

// =============================================================================
// Stream Helpers
// =============================================================================

/// Read the next command from a stream
///
/// Skips blank lines and `#` comments. Returns `Ok(None)` at end of input.
pub fn read_command<R: BufRead>(reader: &mut R) -> Result<Option<Command>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return parse_command(trimmed).map(Some);
    }
}

/// Write a response to a stream, newline-terminated, and flush
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writeln!(writer, "{}", format_response(response))?;
    writer.flush()?;
    Ok(())
}
