/// Filesystem adapters for file I/O operations
mod file_writer;
mod manifest_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use manifest_reader::FileSystemManifestReader;
