use crate::application::dto::{ConversionRequest, ConversionResponse};
use crate::conversion::domain::DependencyRecord;
use crate::conversion::services::{Flattener, LockfileParser};
use crate::ports::outbound::{LockfileReader, ProgressReporter, RegistryRepository};
use crate::shared::error::DepsterError;
use crate::shared::Result;
use std::path::Path;

/// ConvertLockfileUseCase - loads, flattens and enriches a lockfile
///
/// Infrastructure is injected through generics so tests can substitute
/// every port.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `REPO` - RegistryRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertLockfileUseCase<LR, REPO, PR> {
    lockfile_reader: LR,
    registry_repository: REPO,
    progress_reporter: PR,
}

impl<LR, REPO, PR> ConvertLockfileUseCase<LR, REPO, PR>
where
    LR: LockfileReader,
    REPO: RegistryRepository,
    PR: ProgressReporter,
{
    /// Creates a new ConvertLockfileUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, registry_repository: REPO, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            registry_repository,
            progress_reporter,
        }
    }

    /// Executes the conversion up to (not including) serialization
    ///
    /// # Errors
    /// Returns an error if the lockfile cannot be read or is malformed.
    /// Registry failures never make this fail.
    pub fn execute(&self, request: ConversionRequest) -> Result<ConversionResponse> {
        let mut records = self.load_records(&request.lockfile_path)?;

        self.progress_reporter
            .report("🔍 Fetching registry metadata...");
        let (succeeded, failed) = self.enrich_records(&mut records);

        Ok(ConversionResponse::new(records, succeeded, failed))
    }

    /// Loader and Flattener stages
    fn load_records(&self, lockfile_path: &Path) -> Result<Vec<DependencyRecord>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package-lock.json from: {}",
            lockfile_path.display()
        ));

        let content = self.lockfile_reader.read_lockfile(lockfile_path)?;

        let malformed = |e: anyhow::Error| -> anyhow::Error {
            DepsterError::LockfileParseError {
                path: lockfile_path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        };

        let lockfile = LockfileParser::parse(&content).map_err(malformed)?;
        let records = Flattener::flatten_all(&lockfile).map_err(malformed)?;

        let detected = match lockfile.lockfile_version() {
            Some(version) => format!(
                "✅ Detected {} package(s) (lockfileVersion {})",
                records.len(),
                version
            ),
            None => format!("✅ Detected {} package(s)", records.len()),
        };
        self.progress_reporter.report(&detected);

        Ok(records)
    }

    /// Enricher stage: one lookup per record, in table order
    ///
    /// A failed lookup is reported and leaves the record's registry columns
    /// empty; it never affects other records.
    fn enrich_records(&self, records: &mut [DependencyRecord]) -> (usize, usize) {
        let total = records.len();
        let mut successful = 0;
        let mut failed = 0;

        for (idx, record) in records.iter_mut().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(record.name()));

            match self.registry_repository.fetch_metadata(record.name()) {
                Ok(metadata) => {
                    record.apply_metadata(metadata);
                    successful += 1;
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Could not fetch metadata for package '{}': {:#}",
                        record.name(),
                        e
                    ));
                    failed += 1;
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Registry lookup complete: {} succeeded out of {}, {} failed",
            successful, total, failed
        ));

        (successful, failed)
    }
}
