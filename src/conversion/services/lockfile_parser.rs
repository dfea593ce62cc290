use crate::conversion::domain::{Lockfile, LockfileEntry, NestedEntry};
use crate::shared::Result;
use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;

const NODE_MODULES_PREFIX: &str = "node_modules/";
const NESTED_SEPARATOR: &str = "/node_modules/";

#[derive(Debug, Deserialize)]
struct PackageLock {
    #[serde(rename = "lockfileVersion", default)]
    lockfile_version: Option<u64>,
    #[serde(default)]
    dependencies: Option<IndexMap<String, LockfileEntry>>,
    #[serde(default)]
    packages: Option<IndexMap<String, PackagesEntry>>,
}

/// Entry of the lockfile v2/v3 `packages` map, keyed by install path
#[derive(Debug, Deserialize)]
struct PackagesEntry {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    integrity: Option<String>,
    #[serde(default)]
    dependencies: IndexMap<String, String>,
}

/// LockfileParser service turning package-lock.json content into a `Lockfile`
///
/// The `dependencies` map (lockfile versions 1 and 2) is preferred. A lockfile
/// that only carries the `packages` map (version 3) is mapped onto the same
/// shape: `node_modules/<name>` entries become top-level packages, their
/// `dependencies` become requirements, and `node_modules/<name>/node_modules/<child>`
/// entries become nested dependencies of `<name>`.
pub struct LockfileParser;

impl LockfileParser {
    /// Parses lockfile JSON content
    ///
    /// # Errors
    /// Returns an error if the content is not valid JSON, is not an object,
    /// or has neither a `dependencies` nor a `packages` map.
    pub fn parse(content: &str) -> Result<Lockfile> {
        let lock: PackageLock =
            serde_json::from_str(content).context("Invalid package-lock.json content")?;

        match (lock.dependencies, lock.packages) {
            (Some(dependencies), _) => Ok(Lockfile::new(lock.lockfile_version, dependencies)),
            (None, Some(packages)) => Ok(Lockfile::new(
                lock.lockfile_version,
                Self::entries_from_packages(packages),
            )),
            (None, None) => anyhow::bail!(
                "Lockfile has neither a 'dependencies' nor a 'packages' map"
            ),
        }
    }

    fn entries_from_packages(
        packages: IndexMap<String, PackagesEntry>,
    ) -> IndexMap<String, LockfileEntry> {
        let mut entries: IndexMap<String, LockfileEntry> = IndexMap::new();
        let mut nested: Vec<(String, String, Option<String>)> = Vec::new();

        for (path, package) in packages {
            // Root project ("") and workspace members are not installed packages
            let Some(install_path) = path.strip_prefix(NODE_MODULES_PREFIX) else {
                continue;
            };

            match install_path.split_once(NESTED_SEPARATOR) {
                None => {
                    entries.insert(
                        install_path.to_string(),
                        LockfileEntry {
                            version: package.version,
                            integrity: package.integrity,
                            requires: package.dependencies,
                            dependencies: IndexMap::new(),
                        },
                    );
                }
                // Only packages nested directly under a top-level package count
                Some((parent, child)) if !child.contains(NESTED_SEPARATOR) => {
                    nested.push((parent.to_string(), child.to_string(), package.version));
                }
                Some(_) => {}
            }
        }

        for (parent, child, version) in nested {
            if let Some(entry) = entries.get_mut(&parent) {
                entry.dependencies.insert(child, NestedEntry { version });
            }
        }

        entries
    }
}
