//! depster - convert package-lock.json files into a dependency CSV
//!
//! The top-level packages of a lockfile are flattened into one row each,
//! enriched with the latest version, license and description from the npm
//! registry, and written as CSV.
//!
//! # Architecture
//!
//! - **Domain Layer** (`conversion`): lockfile model, records, flattening
//! - **Application Layer** (`application`): the conversion use case
//! - **Ports** (`ports`): interfaces to files, registry and console
//! - **Adapters** (`adapters`): concrete implementations of the ports
//! - **Shared** (`shared`): error types and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use depster::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertLockfileUseCase::new(
//!     FileSystemReader::new(),
//!     NpmRegistryRepository::new()?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ConversionRequest::new(PathBuf::from("package-lock.json")))?;
//! let csv = CsvFormatter::new().format(&response.records)?;
//! FileSystemWriter::new(PathBuf::from("dependencies.csv")).present(&csv)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod conversion;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::CsvFormatter;
    pub use crate::adapters::outbound::network::NpmRegistryRepository;
    pub use crate::application::dto::{ConversionRequest, ConversionResponse};
    pub use crate::application::use_cases::ConvertLockfileUseCase;
    pub use crate::conversion::domain::{DependencyRecord, RegistryMetadata};
    pub use crate::conversion::services::{Flattener, LockfileParser};
    pub use crate::ports::outbound::{
        LockfileReader, OutputPresenter, ProgressReporter, RegistryRepository, TableFormatter,
    };
    pub use crate::shared::error::DepsterError;
    pub use crate::shared::Result;
}
