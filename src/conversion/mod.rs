/// Conversion domain - lockfile model, dependency records and the pure
/// services that turn one into the other. Nothing in here performs I/O.
pub mod domain;
pub mod services;
