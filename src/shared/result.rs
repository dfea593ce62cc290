/// Result alias used throughout depster.
/// Typed failures are `DepsterError`s wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
