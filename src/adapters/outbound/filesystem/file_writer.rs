use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DepsterError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// FileSystemWriter adapter for writing output to files
///
/// Content is written to a temporary file next to the destination and then
/// renamed over it, so the destination either keeps its previous content or
/// holds the complete new output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: String) -> anyhow::Error {
        DepsterError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
        .into()
    }

    /// Directory the temporary file is created in
    fn target_directory(&self) -> Result<&Path> {
        match self.output_path.parent() {
            Some(parent) if parent == Path::new("") => Ok(Path::new(".")),
            Some(parent) if !parent.is_dir() => Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            ))),
            Some(parent) => Ok(parent),
            None => Err(self.write_error("Output path has no parent directory".to_string())),
        }
    }

    /// Creates the temporary file with the mode a plain create would give
    ///
    /// A new file gets 0o666 filtered by the umask; when the destination
    /// already exists its permissions carry over to the replacement.
    fn staging_file(&self, directory: &Path) -> std::io::Result<NamedTempFile> {
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let staged = builder.tempfile_in(directory)?;
        if let Ok(existing) = fs::metadata(&self.output_path) {
            staged.as_file().set_permissions(existing.permissions())?;
        }
        Ok(staged)
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let directory = self.target_directory()?;
        reject_symlink(&self.output_path, "Writing").map_err(|e| self.write_error(e.to_string()))?;

        let mut staged = self
            .staging_file(directory)
            .map_err(|e| self.write_error(e.to_string()))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e.to_string()))?;
        staged.flush().map_err(|e| self.write_error(e.to_string()))?;
        staged
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        Ok(())
    }
}
