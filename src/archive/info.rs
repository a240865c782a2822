use crate::archive::format::{CompressionAlgorithm, FileEntry, FileMeta, Signature};
use crate::error::Result;
use indexmap::IndexMap;

/// Read-only view of an opened PHAR archive
///
/// Opening and decoding the container is done by whoever implements this trait.
/// The report renderers only read from it.
pub trait ArchiveInfo {
    /// API version of the archive format
    fn version(&self) -> &str;

    /// Whole-archive compression
    fn compression(&self) -> CompressionAlgorithm;

    /// Archive signature, `None` when it could not be read
    fn signature(&self) -> Option<&Signature>;

    /// Metadata normalized to a printable representation
    fn normalized_metadata(&self) -> Option<&str>;

    /// Creation timestamp in seconds since the Unix epoch
    fn timestamp(&self) -> i64;

    /// Files in archive order (depth-first, pre-order)
    fn files(&self) -> &[FileEntry];

    /// Compression and compressed size of a file
    fn file_meta(&self, relative_path: &str) -> Option<FileMeta>;

    /// Size of the archive container in bytes
    fn archive_size(&self) -> u64;

    /// Evaluate an embedded file into a dynamic value
    fn evaluate(&self, relative_path: &str) -> Result<serde_json::Value>;

    /// Check if a file exists in the archive
    fn contains(&self, relative_path: &str) -> bool {
        self.files()
            .iter()
            .any(|file| file.relative_path() == relative_path)
    }

    /// Number of files per compression algorithm
    ///
    /// Every algorithm is present, in declaration order, even with a zero count.
    fn files_compression_count(&self) -> IndexMap<CompressionAlgorithm, u64> {
        let mut count: IndexMap<CompressionAlgorithm, u64> = CompressionAlgorithm::ALL
            .iter()
            .map(|algorithm| (*algorithm, 0))
            .collect();

        for file in self.files() {
            if let Some(meta) = self.file_meta(file.relative_path()) {
                *count.entry(meta.compression).or_insert(0) += 1;
            }
        }

        count
    }
}
