use crate::ports::outbound::LockfileReader;
use crate::shared::error::DepsterError;
use crate::shared::security::{validate_regular_file, MAX_LOCKFILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading lockfiles from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after rejecting symlinks, non-regular files and
    /// files above the size limit
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type, MAX_LOCKFILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        if !lockfile_path.exists() {
            return Err(DepsterError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Please pass the path to a package-lock.json file, e.g. `depster ./package-lock.json`.",
                    lockfile_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(lockfile_path, "lockfile").map_err(|e| {
            DepsterError::FileReadError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("package-lock.json");
        fs::write(&lockfile_path, r#"{"dependencies": {}}"#).unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_lockfile(&lockfile_path).unwrap();

        assert_eq!(content, r#"{"dependencies": {}}"#);
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let lockfile_path = temp_dir.path().join("package-lock.json");

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(&lockfile_path);

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepsterError>(),
            Some(DepsterError::LockfileNotFound { .. })
        ));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_lockfile_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read file"));
        assert!(err_string.contains("not a regular file"));
    }
}
