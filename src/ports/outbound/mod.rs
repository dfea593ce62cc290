/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod formatter;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_repository;

pub use formatter::TableFormatter;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_repository::RegistryRepository;
