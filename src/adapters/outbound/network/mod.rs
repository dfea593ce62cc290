/// Network adapters for registry lookups
mod npm_registry_client;

pub use npm_registry_client::{NpmRegistryRepository, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT};
