//! Dataset loading and the in-memory record table.

pub mod error;
pub mod record;
pub mod source;

pub use error::LoadError;
pub use record::{Dataset, Record};
pub use source::{DatasetSource, SpreadsheetSource};

#[cfg(test)]
pub use source::MockDatasetSource;
