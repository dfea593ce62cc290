use depster::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock RegistryRepository for testing
///
/// Packages without a configured response fail with a mock network error.
#[derive(Default, Clone)]
pub struct MockRegistryRepository {
    pub responses: HashMap<String, RegistryMetadata>,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl MockRegistryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(
        mut self,
        package: &str,
        latest: &str,
        license: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        self.responses.insert(
            package.to_string(),
            RegistryMetadata::new(
                latest.to_string(),
                description.map(String::from),
                license.map(String::from),
            ),
        );
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl RegistryRepository for MockRegistryRepository {
    fn fetch_metadata(&self, package_name: &str) -> Result<RegistryMetadata> {
        self.lookups.lock().unwrap().push(package_name.to_string());
        match self.responses.get(package_name) {
            Some(metadata) => Ok(metadata.clone()),
            None => anyhow::bail!("Mock registry failure: operation timed out"),
        }
    }
}
