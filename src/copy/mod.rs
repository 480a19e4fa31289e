pub mod decoder;
pub mod header;
pub mod types;

#[cfg(test)]
mod tests;

pub use decoder::{decode_row, is_end_of_data, END_OF_DATA, NULL_MARKER};
pub use header::parse_copy_header;
pub use types::{Record, RowEntry, TableSchema};
