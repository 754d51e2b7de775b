//! Error conversion helpers for data source reads

use std::io;

use crate::application::{ApplicationError, ApplicationResult, DataSource};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attach the data source identifier to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(source.path())
    ///     .with_source_context(&source)?;
    /// ```
    fn with_source_context(self, source: &DataSource) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_source_context(self, source: &DataSource) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::DataSource {
            source_id: source.to_string(),
            source: e,
        })
    }
}
