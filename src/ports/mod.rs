/// Ports module defining the interfaces between the conversion core and
/// the infrastructure (file system, registry, console).
pub mod outbound;
