use indexmap::IndexMap;
use serde::Deserialize;

/// Lockfile - the ordered top-level package map of a package-lock.json
///
/// Key order is the order in which packages appear in the source document.
#[derive(Debug, Clone, Default)]
pub struct Lockfile {
    lockfile_version: Option<u64>,
    entries: IndexMap<String, LockfileEntry>,
}

impl Lockfile {
    pub fn new(lockfile_version: Option<u64>, entries: IndexMap<String, LockfileEntry>) -> Self {
        Self {
            lockfile_version,
            entries,
        }
    }

    pub fn lockfile_version(&self) -> Option<u64> {
        self.lockfile_version
    }

    pub fn entries(&self) -> &IndexMap<String, LockfileEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One package entry of the lockfile's `dependencies` map
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LockfileEntry {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub integrity: Option<String>,
    /// Direct requirements: name -> version range
    #[serde(default)]
    pub requires: IndexMap<String, String>,
    /// Packages nested under this one: name -> entry
    #[serde(default)]
    pub dependencies: IndexMap<String, NestedEntry>,
}

/// A package nested under a top-level entry. Only its version is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NestedEntry {
    #[serde(default)]
    pub version: Option<String>,
}

impl NestedEntry {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }
}
