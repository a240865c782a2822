use crate::archive::format::{normalize_path, CompressionAlgorithm, FileEntry, FileMeta, Signature};
use crate::archive::info::ArchiveInfo;
use crate::error::{ReportError, Result};
use std::collections::HashMap;

/// Default API version reported by in-memory archives
pub const DEFAULT_API_VERSION: &str = "1.1.0";

/// Fully materialized archive model held in memory
///
/// Embedders that already decoded a PHAR (or tests) populate one through
/// [`MemoryArchiveBuilder`] and hand it to the renderers.
#[derive(Debug, Clone)]
pub struct MemoryArchive {
    version: String,
    compression: CompressionAlgorithm,
    signature: Option<Signature>,
    metadata: Option<String>,
    timestamp: i64,
    files: Vec<FileEntry>,
    metas: HashMap<String, FileMeta>,
    contents: HashMap<String, Vec<u8>>,
    archive_size: u64,
}

impl MemoryArchive {
    pub fn builder() -> MemoryArchiveBuilder {
        MemoryArchiveBuilder::new()
    }

    /// Raw bytes of an embedded file, if contents were recorded for it
    pub fn contents(&self, relative_path: &str) -> Option<&[u8]> {
        self.contents
            .get(&normalize_path(relative_path))
            .map(Vec::as_slice)
    }
}

impl ArchiveInfo for MemoryArchive {
    fn version(&self) -> &str {
        &self.version
    }

    fn compression(&self) -> CompressionAlgorithm {
        self.compression
    }

    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    fn normalized_metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn files(&self) -> &[FileEntry] {
        &self.files
    }

    fn file_meta(&self, relative_path: &str) -> Option<FileMeta> {
        self.metas.get(&normalize_path(relative_path)).copied()
    }

    fn archive_size(&self) -> u64 {
        self.archive_size
    }

    fn contains(&self, relative_path: &str) -> bool {
        self.metas.contains_key(&normalize_path(relative_path))
    }

    fn evaluate(&self, relative_path: &str) -> Result<serde_json::Value> {
        let data = self
            .contents(relative_path)
            .ok_or_else(|| ReportError::FileNotFound(relative_path.to_string()))?;

        serde_json::from_slice(data).map_err(|e| ReportError::EvaluationFailed {
            path: relative_path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Builder for [`MemoryArchive`]
#[derive(Debug, Clone)]
pub struct MemoryArchiveBuilder {
    archive: MemoryArchive,
    explicit_size: bool,
}

impl MemoryArchiveBuilder {
    pub fn new() -> Self {
        Self {
            archive: MemoryArchive {
                version: DEFAULT_API_VERSION.to_string(),
                compression: CompressionAlgorithm::None,
                signature: None,
                metadata: None,
                timestamp: 0,
                files: Vec::new(),
                metas: HashMap::new(),
                contents: HashMap::new(),
                archive_size: 0,
            },
            explicit_size: false,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.archive.version = version.into();
        self
    }

    pub fn compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.archive.compression = compression;
        self
    }

    pub fn signature(mut self, signature: Signature) -> Self {
        self.archive.signature = Some(signature);
        self
    }

    /// Set already-normalized metadata text
    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.archive.metadata = Some(metadata.into());
        self
    }

    /// Set metadata from a structured value, normalized to pretty JSON
    pub fn metadata_value(mut self, value: &serde_json::Value) -> Result<Self> {
        self.archive.metadata = Some(serde_json::to_string_pretty(value)?);
        Ok(self)
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.archive.timestamp = timestamp;
        self
    }

    /// Override the container size; defaults to the sum of compressed sizes
    pub fn archive_size(mut self, size: u64) -> Self {
        self.archive.archive_size = size;
        self.explicit_size = true;
        self
    }

    /// Add a file entry with its compression and compressed size
    ///
    /// Adding the same path twice replaces its metadata but keeps its position.
    pub fn add_file(
        mut self,
        path: &str,
        compression: CompressionAlgorithm,
        compressed_size: u64,
    ) -> Self {
        let entry = FileEntry::new(path);
        let key = entry.relative_path().to_string();

        let meta = FileMeta {
            compression,
            compressed_size,
        };

        if self.archive.metas.insert(key, meta).is_none() {
            self.archive.files.push(entry);
        }

        self
    }

    /// Add a file together with its contents
    ///
    /// The compressed size is taken as the stored length of `data`.
    pub fn add_file_with_contents(
        self,
        path: &str,
        compression: CompressionAlgorithm,
        data: &[u8],
    ) -> Self {
        let mut builder = self.add_file(path, compression, data.len() as u64);
        builder
            .archive
            .contents
            .insert(normalize_path(path), data.to_vec());
        builder
    }

    pub fn build(mut self) -> MemoryArchive {
        if !self.explicit_size {
            self.archive.archive_size = self
                .archive
                .metas
                .values()
                .map(|meta| meta.compressed_size)
                .sum();
        }

        self.archive
    }
}

impl Default for MemoryArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_file_order() {
        let archive = MemoryArchive::builder()
            .add_file("b.php", CompressionAlgorithm::None, 10)
            .add_file("a/c.php", CompressionAlgorithm::Gz, 20)
            .add_file("a.php", CompressionAlgorithm::Bz2, 30)
            .build();

        let paths: Vec<&str> = archive.files().iter().map(|f| f.relative_path()).collect();
        assert_eq!(paths, vec!["b.php", "a/c.php", "a.php"]);
        assert_eq!(archive.archive_size(), 60);
    }

    #[test]
    fn test_duplicate_path_replaces_meta() {
        let archive = MemoryArchive::builder()
            .add_file("index.php", CompressionAlgorithm::None, 10)
            .add_file("index.php", CompressionAlgorithm::Gz, 4)
            .build();

        assert_eq!(archive.files().len(), 1);
        let meta = archive.file_meta("index.php").unwrap();
        assert_eq!(meta.compression, CompressionAlgorithm::Gz);
        assert_eq!(meta.compressed_size, 4);
    }

    #[test]
    fn test_files_compression_count_includes_zero_buckets() {
        let archive = MemoryArchive::builder()
            .add_file("a.php", CompressionAlgorithm::Gz, 1)
            .add_file("b.php", CompressionAlgorithm::Gz, 1)
            .add_file("c.php", CompressionAlgorithm::None, 1)
            .build();

        let count = archive.files_compression_count();
        let entries: Vec<_> = count.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            entries,
            vec![
                (CompressionAlgorithm::Gz, 2),
                (CompressionAlgorithm::Bz2, 0),
                (CompressionAlgorithm::None, 1),
            ]
        );
    }

    #[test]
    fn test_evaluate_embedded_json() {
        let archive = MemoryArchive::builder()
            .add_file_with_contents("data.json", CompressionAlgorithm::None, br#"[1, 2]"#)
            .add_file_with_contents("broken.json", CompressionAlgorithm::None, b"<?php return")
            .build();

        assert!(archive.contains("data.json"));
        assert_eq!(archive.evaluate("data.json").unwrap(), serde_json::json!([1, 2]));
        assert!(matches!(
            archive.evaluate("broken.json"),
            Err(ReportError::EvaluationFailed { .. })
        ));
        assert!(matches!(
            archive.evaluate("missing.json"),
            Err(ReportError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_explicit_archive_size_wins() {
        let archive = MemoryArchive::builder()
            .add_file("a.php", CompressionAlgorithm::None, 100)
            .archive_size(4096)
            .build();

        assert_eq!(archive.archive_size(), 4096);
    }

    #[test]
    fn test_metadata_value_is_pretty_printed() {
        let archive = MemoryArchive::builder()
            .metadata_value(&serde_json::json!({"name": "box"}))
            .unwrap()
            .build();

        assert_eq!(archive.normalized_metadata(), Some("{\n  \"name\": \"box\"\n}"));
    }
}
