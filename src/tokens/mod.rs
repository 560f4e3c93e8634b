//! Token input
//!
//! Reads token batches from record dumps or plain token lists.
//!
//! A record line carries a quoted token type followed by a quoted value:
//!
//! ```text
//! {"session_nonce": "5f1c0a9e", "issued": 1700000000}
//! ```
//!
//! Splitting the line on `"` yields the type at field 1 and the value at
//! field 3. Anything after the value is ignored.

use crate::constants::input::STDIN_PATH;
use crate::constants::record::{FIELD_SEPARATOR, TYPE_FIELD, VALUE_FIELD};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// A single parsed record line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Token type, e.g. "session_nonce"
    pub token_type: &'a str,
    /// Token value
    pub value: &'a str,
}

/// Parse a record line into its token type and value.
///
/// Returns `None` if the line has fewer than four `"`-separated fields.
pub fn parse_record(line: &str) -> Option<Record<'_>> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    if fields.len() <= VALUE_FIELD {
        return None;
    }

    Some(Record {
        token_type: fields[TYPE_FIELD],
        value: fields[VALUE_FIELD],
    })
}

/// Read all tokens of `token_type` from a record dump, in input order.
///
/// Blank lines are skipped. Any other line that is not a record fails with
/// `MalformedRecord`.
pub fn read_tokens<R: BufRead>(reader: R, token_type: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line).ok_or_else(|| Error::MalformedRecord {
            line: index + 1,
            content: line.clone(),
        })?;

        if record.token_type == token_type {
            tokens.push(record.value.to_string());
        } else {
            skipped += 1;
        }
    }

    debug!(
        token_type,
        matched = tokens.len(),
        skipped,
        "read record dump"
    );

    Ok(tokens)
}

/// Read one token per non-blank line, trimming surrounding whitespace.
pub fn read_raw_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let token = line.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }

    Ok(tokens)
}

/// Read tokens from a file, or from stdin when `path` is `-`.
///
/// With `raw` set the input is a plain token list, otherwise a record dump
/// filtered by `token_type`.
pub fn read_tokens_from_path(path: &str, token_type: &str, raw: bool) -> Result<Vec<String>> {
    let tokens = if path == STDIN_PATH {
        let stdin = io::stdin();
        read_from(stdin.lock(), token_type, raw)?
    } else {
        let file = File::open(Path::new(path))?;
        read_from(BufReader::new(file), token_type, raw)?
    };

    info!(path, count = tokens.len(), raw, "loaded tokens");

    Ok(tokens)
}

fn read_from<R: BufRead>(reader: R, token_type: &str, raw: bool) -> Result<Vec<String>> {
    if raw {
        read_raw_tokens(reader)
    } else {
        read_tokens(reader, token_type)
    }
}
