/// Use cases module containing application business logic orchestration
mod convert_lockfile;

pub use convert_lockfile::ConvertLockfileUseCase;
