use crate::conversion::domain::RegistryMetadata;
use crate::ports::outbound::RegistryRepository;
use crate::shared::error::DepsterError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;

/// Public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type of npm's abbreviated package document
const ABBREVIATED_METADATA: &str = "application/vnd.npm.install-v1+json";

#[derive(Debug, Deserialize)]
struct NpmPackageDocument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: Option<DistTags>,
    /// Kept only when it is a string; other shapes fall back to the default
    #[serde(default)]
    description: Option<serde_json::Value>,
    #[serde(default)]
    license: Option<LicenseField>,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    #[serde(default)]
    latest: Option<String>,
}

/// `license` is an SPDX string today; old packages carry `{ "type": "MIT", "url": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    Expression(String),
    Legacy {
        #[serde(rename = "type")]
        kind: Option<String>,
    },
    Other(serde_json::Value),
}

impl LicenseField {
    fn into_license(self) -> Option<String> {
        match self {
            LicenseField::Expression(expression) => Some(expression),
            LicenseField::Legacy { kind } => kind,
            LicenseField::Other(_) => None,
        }
    }
}

/// NpmRegistryRepository adapter fetching package metadata from an npm registry
///
/// Issues one blocking GET per lookup, asking for the abbreviated document.
/// There is no retry: a failed lookup is reported to the caller as-is.
pub struct NpmRegistryRepository {
    client: Client,
    registry_url: String,
}

impl NpmRegistryRepository {
    /// Creates a repository for the public npm registry with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_registry(DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a repository for `registry_url` with the given request timeout
    pub fn with_registry(registry_url: &str, timeout: Duration) -> Result<Self> {
        let user_agent = format!("depster/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            registry_url: registry_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    /// Builds the document URL for `package_name`
    ///
    /// Scoped names keep their leading `@` and have the scope separator
    /// encoded (`@types/node` -> `@types%2Fnode`).
    pub fn package_url(&self, package_name: &str) -> Result<String> {
        Self::validate_package_name(package_name)?;

        let path = match package_name.strip_prefix('@') {
            Some(scoped) => format!("@{}", urlencoding::encode(scoped)),
            None => urlencoding::encode(package_name).into_owned(),
        };

        Ok(format!("{}/{}", self.registry_url, path))
    }

    /// Rejects names that could alter the request URL
    fn validate_package_name(package_name: &str) -> Result<()> {
        let reason = if package_name.is_empty() {
            Some("name is empty")
        } else if package_name.contains("..") {
            Some("contains '..'")
        } else if package_name.contains('\\') {
            Some("contains a backslash")
        } else if package_name.contains(['?', '#']) {
            Some("contains URL-unsafe characters")
        } else if package_name.chars().any(char::is_whitespace) {
            Some("contains whitespace")
        } else if !package_name.starts_with('@') && package_name.contains('/') {
            Some("contains '/' but is not a scoped name")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DepsterError::InvalidPackageName {
                name: package_name.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn fetch_document(&self, package_name: &str) -> Result<NpmPackageDocument> {
        let url = self.package_url(package_name)?;

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, ABBREVIATED_METADATA)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    anyhow::anyhow!("request to {} timed out", url)
                } else {
                    anyhow::anyhow!("request to {} failed: {}", url, e)
                }
            })?;

        if !response.status().is_success() {
            anyhow::bail!("registry returned status code {}", response.status());
        }

        response
            .json::<NpmPackageDocument>()
            .map_err(|e| anyhow::anyhow!("invalid registry response: {}", e))
    }
}

impl RegistryRepository for NpmRegistryRepository {
    fn fetch_metadata(&self, package_name: &str) -> Result<RegistryMetadata> {
        let document = self.fetch_document(package_name)?;

        let latest_version = document
            .dist_tags
            .and_then(|tags| tags.latest)
            .ok_or_else(|| DepsterError::MissingField {
                package: package_name.to_string(),
                field: "dist-tags.latest".to_string(),
            })?;

        Ok(RegistryMetadata::new(
            latest_version,
            document
                .description
                .and_then(|description| description.as_str().map(str::to_string)),
            document.license.and_then(LicenseField::into_license),
        ))
    }
}
