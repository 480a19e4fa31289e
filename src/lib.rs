pub mod convert;
pub mod error;
pub mod stream;

pub mod copy;

pub use convert::Converter;
pub use copy::{Record, RowEntry, TableSchema};
pub use error::{Error, Result};
pub use stream::{CopyState, CopyStream};
