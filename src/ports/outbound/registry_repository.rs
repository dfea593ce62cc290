use crate::conversion::domain::RegistryMetadata;
use crate::shared::Result;

/// RegistryRepository port for package metadata lookups
///
/// This port abstracts the package registry (e.g., registry.npmjs.org)
/// used to retrieve the latest version, license and description of a package.
pub trait RegistryRepository {
    /// Fetches metadata for `package_name`
    ///
    /// Implementations apply the description and license defaults, so a
    /// successful lookup always yields all three values.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package name cannot be used in a registry URL
    /// - The network request fails or times out
    /// - The registry returns a non-success status code
    /// - The response cannot be parsed or lacks the latest version tag
    fn fetch_metadata(&self, package_name: &str) -> Result<RegistryMetadata>;
}
