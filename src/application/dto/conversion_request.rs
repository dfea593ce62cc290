use std::path::PathBuf;

/// ConversionRequest - input of the lockfile conversion use case
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Path to the package-lock.json file
    pub lockfile_path: PathBuf,
}

impl ConversionRequest {
    pub fn new(lockfile_path: PathBuf) -> Self {
        Self { lockfile_path }
    }
}
