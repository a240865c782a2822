mod format;
mod info;
mod memory;

pub use format::{normalize_path, CompressionAlgorithm, FileEntry, FileMeta, Signature};
pub use info::ArchiveInfo;
pub use memory::{MemoryArchive, MemoryArchiveBuilder, DEFAULT_API_VERSION};
