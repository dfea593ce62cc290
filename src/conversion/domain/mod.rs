pub mod dependency_record;
pub mod lockfile;
pub mod registry_metadata;

pub use dependency_record::DependencyRecord;
pub use lockfile::{Lockfile, LockfileEntry, NestedEntry};
pub use registry_metadata::{RegistryMetadata, DEFAULT_DESCRIPTION, DEFAULT_LICENSE};
