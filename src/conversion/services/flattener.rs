use crate::conversion::domain::{DependencyRecord, Lockfile, LockfileEntry};
use crate::shared::Result;

/// Flattener service deriving table rows from lockfile entries
///
/// Pure business logic with no I/O. The raw nested objects are consumed
/// here and never reach the output table.
pub struct Flattener;

impl Flattener {
    /// Flattens every entry of the lockfile, preserving lockfile order
    pub fn flatten_all(lockfile: &Lockfile) -> Result<Vec<DependencyRecord>> {
        lockfile
            .entries()
            .iter()
            .map(|(name, entry)| Self::flatten(name, entry))
            .collect()
    }

    /// Flattens one lockfile entry into a record without registry columns
    ///
    /// # Errors
    /// Returns an error if a nested dependency has no version.
    pub fn flatten(name: &str, entry: &LockfileEntry) -> Result<DependencyRecord> {
        let requires = entry
            .requires
            .iter()
            .map(|(requirement, range)| format!("{}: {}", requirement, range))
            .collect();

        let dependencies = entry
            .dependencies
            .iter()
            .map(|(child, nested)| match nested.version.as_deref() {
                Some(version) if !version.is_empty() => Ok(format!("{}: {}", child, version)),
                _ => anyhow::bail!(
                    "Nested dependency '{}' of package '{}' has no version",
                    child,
                    name
                ),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DependencyRecord::new(name)
            .with_current_version(entry.version.clone())
            .with_integrity(entry.integrity.clone())
            .with_requires(requires)
            .with_dependencies(dependencies))
    }
}
