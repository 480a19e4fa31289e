use serde::{Deserialize, Serialize};

/// Schema record for the table being copied.
///
/// `keys` is order-significant: it defines the positional mapping for
/// every subsequent row. Emitted at most once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub keys: Vec<String>,
}

/// One decoded data row.
///
/// Fields correspond positionally to [`TableSchema::keys`], but the
/// correspondence is never validated: a row with a different field
/// count still produces exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEntry {
    pub entry: Vec<String>,
}

/// A value emitted to the output stream, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Schema(TableSchema),
    Row(RowEntry),
}
