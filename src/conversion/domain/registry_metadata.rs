/// Description used when the registry document has none
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// License used when the registry document has none
pub const DEFAULT_LICENSE: &str = "Unknown";

/// RegistryMetadata value object holding the result of one successful lookup
///
/// Defaults for description and license are applied on construction, so a
/// value of this type always carries all three enrichment columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMetadata {
    latest_version: String,
    description: String,
    license: String,
}

impl RegistryMetadata {
    pub fn new(latest_version: String, description: Option<String>, license: Option<String>) -> Self {
        Self {
            latest_version,
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            license: license.unwrap_or_else(|| DEFAULT_LICENSE.to_string()),
        }
    }

    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}
