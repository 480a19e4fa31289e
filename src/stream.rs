//! Line-at-a-time state machine over one COPY block.

use tracing::{debug, info, trace};

use crate::copy::{decoder, header, Record};

/// The three phases of a run. Transitions are strictly forward and
/// each happens at most once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    /// No header matched yet; every line is tried against the COPY
    /// header shape and otherwise discarded.
    AwaitingHeader,
    /// Header matched and emitted; lines are data rows until the
    /// end-of-data sentinel.
    StreamingRows,
    /// Sentinel seen; all further input is ignored.
    Drained,
}

/// Classifies incoming lines and produces output records.
///
/// Fed one line at a time in input order. At most one record is
/// produced per line, and no record is ever produced before the schema
/// record or after the sentinel.
#[derive(Debug)]
pub struct CopyStream {
    state: CopyState,
}

impl CopyStream {
    pub fn new() -> Self {
        Self {
            state: CopyState::AwaitingHeader,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Processes one input line, returning the record it produces, if any.
    pub fn feed(&mut self, line: &str) -> Option<Record> {
        match self.state {
            CopyState::AwaitingHeader => match header::parse_copy_header(line) {
                Some(schema) => {
                    info!(
                        table = %schema.name,
                        columns = schema.keys.len(),
                        "COPY header matched"
                    );
                    self.state = CopyState::StreamingRows;
                    Some(Record::Schema(schema))
                }
                None => {
                    trace!("skipping non-header line");
                    None
                }
            },
            CopyState::StreamingRows => {
                if decoder::is_end_of_data(line) {
                    debug!("end-of-data sentinel seen");
                    self.state = CopyState::Drained;
                    None
                } else {
                    let row = decoder::decode_row(line);
                    trace!(fields = row.entry.len(), "decoded row");
                    Some(Record::Row(row))
                }
            }
            CopyState::Drained => None,
        }
    }
}

impl Default for CopyStream {
    fn default() -> Self {
        Self::new()
    }
}
