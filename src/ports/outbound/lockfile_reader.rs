use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// a package-lock.json file.
pub trait LockfileReader {
    /// Reads the lockfile at `lockfile_path`
    ///
    /// # Returns
    /// The raw content of the lockfile as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`DepsterError::LockfileNotFound`)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String>;
}
