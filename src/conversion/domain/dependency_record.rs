use super::RegistryMetadata;

/// DependencyRecord - one row of the output table
///
/// Created by the `Flattener` from a lockfile entry and filled in at most
/// once by the enrichment step. The package name is the row identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    name: String,
    current_version: Option<String>,
    latest_version: Option<String>,
    integrity: Option<String>,
    requires: Option<Vec<String>>,
    dependencies: Option<Vec<String>>,
    has_dependencies: bool,
    description: Option<String>,
    license: Option<String>,
}

impl DependencyRecord {
    /// Creates an empty record for `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_version: None,
            latest_version: None,
            integrity: None,
            requires: None,
            dependencies: None,
            has_dependencies: false,
            description: None,
            license: None,
        }
    }

    pub fn with_current_version(mut self, version: Option<String>) -> Self {
        self.current_version = version;
        self
    }

    pub fn with_integrity(mut self, integrity: Option<String>) -> Self {
        self.integrity = integrity.filter(|value| !value.is_empty());
        self
    }

    /// Sets the rendered requirements. An empty list leaves the field absent
    /// and does not touch `has_dependencies`.
    pub fn with_requires(mut self, requires: Vec<String>) -> Self {
        if !requires.is_empty() {
            self.requires = Some(requires);
            self.has_dependencies = true;
        }
        self
    }

    /// Sets the rendered nested dependencies. An empty list leaves the field
    /// absent and does not touch `has_dependencies`.
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        if !dependencies.is_empty() {
            self.dependencies = Some(dependencies);
            self.has_dependencies = true;
        }
        self
    }

    /// Copies the registry columns into this record
    pub fn apply_metadata(&mut self, metadata: RegistryMetadata) {
        self.latest_version = Some(metadata.latest_version().to_string());
        self.description = Some(metadata.description().to_string());
        self.license = Some(metadata.license().to_string());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_version(&self) -> Option<&str> {
        self.current_version.as_deref()
    }

    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    pub fn integrity(&self) -> Option<&str> {
        self.integrity.as_deref()
    }

    pub fn requires(&self) -> Option<&[String]> {
        self.requires.as_deref()
    }

    pub fn dependencies(&self) -> Option<&[String]> {
        self.dependencies.as_deref()
    }

    pub fn has_dependencies(&self) -> bool {
        self.has_dependencies
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// True once registry metadata has been applied
    pub fn is_enriched(&self) -> bool {
        self.latest_version.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = DependencyRecord::new("lodash");
        assert_eq!(record.name(), "lodash");
        assert_eq!(record.current_version(), None);
        assert_eq!(record.integrity(), None);
        assert_eq!(record.requires(), None);
        assert_eq!(record.dependencies(), None);
        assert!(!record.has_dependencies());
        assert!(!record.is_enriched());
    }

    #[test]
    fn test_empty_integrity_is_absent() {
        let record = DependencyRecord::new("a").with_integrity(Some(String::new()));
        assert_eq!(record.integrity(), None);
    }

    #[test]
    fn test_empty_lists_leave_flag_unset() {
        let record = DependencyRecord::new("a")
            .with_requires(vec![])
            .with_dependencies(vec![]);
        assert_eq!(record.requires(), None);
        assert_eq!(record.dependencies(), None);
        assert!(!record.has_dependencies());
    }

    #[test]
    fn test_flag_not_reset_by_later_empty_list() {
        let record = DependencyRecord::new("a")
            .with_requires(vec!["b: ^1.0.0".to_string()])
            .with_dependencies(vec![]);
        assert!(record.has_dependencies());
        assert_eq!(record.dependencies(), None);
    }

    #[test]
    fn test_apply_metadata() {
        let mut record = DependencyRecord::new("lodash");
        record.apply_metadata(RegistryMetadata::new(
            "4.17.21".to_string(),
            None,
            Some("MIT".to_string()),
        ));
        assert!(record.is_enriched());
        assert_eq!(record.latest_version(), Some("4.17.21"));
        assert_eq!(record.description(), Some("No description available."));
        assert_eq!(record.license(), Some("MIT"));
    }
}
