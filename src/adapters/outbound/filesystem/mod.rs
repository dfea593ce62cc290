/// Filesystem adapters for reading lockfiles and writing output files
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::FileSystemWriter;
