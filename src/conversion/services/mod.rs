mod flattener;
mod lockfile_parser;

pub use flattener::Flattener;
pub use lockfile_parser::LockfileParser;
