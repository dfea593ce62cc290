use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the serialized
/// table is written.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn present(&self, content: &str) -> Result<()>;
}
