//! Fixed-shape recognizer for the `COPY ... FROM stdin;` header line.
//!
//! pg_dump emits this line verbatim, so matching is a structured check
//! against the one shape it produces rather than a SQL grammar:
//!
//! ```text
//! COPY <table> (<col1>, <col2>, ...) FROM stdin;
//! ```
//!
//! The table name is a bare word-character identifier. Each column
//! token is word characters, optionally double-quoted (pg_dump quotes
//! column names that collide with keywords). Anything that fails the
//! shape check is treated as ordinary preamble and skipped.

use super::types::TableSchema;

const PREFIX: &str = "COPY ";
const LIST_OPEN: &str = " (";
const SUFFIX: &str = ") FROM stdin;";
const SEPARATOR: &str = ", ";

/// Attempts to match `line` against the COPY header shape.
///
/// Returns the table schema on a match, or `None` for any other line
/// (blank lines, `SET` statements, comments, malformed headers). A
/// non-match is never an error at this layer.
pub fn parse_copy_header(line: &str) -> Option<TableSchema> {
    let rest = line.strip_prefix(PREFIX)?;
    let (name, rest) = scan_identifier(rest)?;
    let list = rest.strip_prefix(LIST_OPEN)?.strip_suffix(SUFFIX)?;
    let keys = scan_column_list(list)?;

    Some(TableSchema {
        name: name.to_string(),
        keys,
    })
}

/// Scans a run of one or more word characters from the front of
/// `input`, returning the identifier and the remainder.
fn scan_identifier(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !is_word(c))
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    Some((&input[..end], &input[end..]))
}

/// Scans the comma-and-space-separated column list, decoding each
/// token independently and preserving order. An empty list or a token
/// containing anything other than word characters and double quotes
/// fails the match.
fn scan_column_list(list: &str) -> Option<Vec<String>> {
    let mut keys = Vec::new();

    for token in list.split(SEPARATOR) {
        if token.is_empty() || !token.chars().all(|c| is_word(c) || c == '"') {
            return None;
        }
        keys.push(unquote(token).to_string());
    }

    Some(keys)
}

/// Strips exactly one leading and one trailing double quote when the
/// token carries both; otherwise the token is used unchanged.
fn unquote(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
