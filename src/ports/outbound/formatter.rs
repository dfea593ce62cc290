use crate::conversion::domain::DependencyRecord;
use crate::shared::Result;

/// TableFormatter port for serializing the dependency table
pub trait TableFormatter {
    /// Serializes all records, in the order given, including a header row
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[DependencyRecord]) -> Result<String>;
}
