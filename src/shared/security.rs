use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest lockfile depster will load (100 MB)
pub const MAX_LOCKFILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects `path` if it is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist is accepted; callers that require the file to
/// exist check that separately.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. {} through symbolic links is not allowed.",
            path.display(),
            operation
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {}: {}",
            path.display(),
            e
        ),
    }
}

/// Checks that `path` is a regular file no larger than `max_size`.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link or a directory
/// - The file exceeds `max_size` bytes
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Fails when `file_size` exceeds `max_size`.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
