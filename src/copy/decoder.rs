//! Decoding of COPY text-format data rows and the end-of-data sentinel.

use super::types::RowEntry;

/// The literal two-character end-of-data terminator, `\.` on its own line.
pub const END_OF_DATA: &str = "\\.";

/// The literal two-character SQL-NULL marker, `\N`.
///
/// Not decoded: a NULL field reaches the output as this literal
/// two-character string in its position in `entry`.
pub const NULL_MARKER: &str = "\\N";

/// Returns true when `line` is exactly the end-of-data sentinel.
pub fn is_end_of_data(line: &str) -> bool {
    line == END_OF_DATA
}

/// Splits one data line on tabs into an ordered row record.
///
/// COPY text format escapes any tab occurring inside a field value, so
/// a plain split is sufficient. This cannot fail: every non-sentinel
/// line yields exactly one record, however many fields it splits into.
pub fn decode_row(line: &str) -> RowEntry {
    RowEntry {
        entry: line.split('\t').map(str::to_string).collect(),
    }
}
