use sha2::{Digest, Sha256};
use std::fmt;

/// Compression algorithms a PHAR archive or entry may use
///
/// Declaration order is the order in which per-algorithm counts are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionAlgorithm {
    Gz,
    Bz2,
    None,
}

impl CompressionAlgorithm {
    /// All algorithms in declaration order
    pub const ALL: [CompressionAlgorithm; 3] = [Self::Gz, Self::Bz2, Self::None];

    /// Canonical upper-case name (`GZ`, `BZ2`, `NONE`)
    pub fn name(self) -> &'static str {
        match self {
            Self::Gz => "GZ",
            Self::Bz2 => "BZ2",
            Self::None => "NONE",
        }
    }

    /// Human label: `None` for uncompressed, the canonical name otherwise
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            other => other.name(),
        }
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize path to forward slashes, dropping empty and `.` segments
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// A file stored in the archive, identified by its relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    relative_path: String,
}

impl FileEntry {
    pub fn new(relative_path: impl AsRef<str>) -> Self {
        Self {
            relative_path: normalize_path(relative_path.as_ref()),
        }
    }

    /// Path relative to the archive root, slash-separated
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Last path segment
    pub fn filename(&self) -> &str {
        match self.relative_path.rfind('/') {
            Some(idx) => &self.relative_path[idx + 1..],
            None => &self.relative_path,
        }
    }

    /// Directory part of the relative path, empty for root files
    pub fn relative_dir(&self) -> &str {
        match self.relative_path.rfind('/') {
            Some(idx) => &self.relative_path[..idx],
            None => "",
        }
    }

    /// Ancestor directory segments, outermost first
    pub fn parent_segments(&self) -> impl Iterator<Item = &str> {
        self.relative_dir().split('/').filter(|s| !s.is_empty())
    }

    /// Number of ancestor directory segments
    pub fn depth(&self) -> usize {
        self.parent_segments().count()
    }

    /// Whether the file sits directly at the archive root
    pub fn is_root(&self) -> bool {
        self.relative_dir().is_empty()
    }
}

/// Per-file metadata needed by the content listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub compression: CompressionAlgorithm,
    pub compressed_size: u64,
}

/// Archive signature as reported by the container reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Hash algorithm name (e.g. `SHA-256`, `OpenSSL`)
    pub hash_type: String,

    /// Upper-case hex digest
    pub hash: String,
}

impl Signature {
    pub fn new(hash_type: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            hash_type: hash_type.into(),
            hash: hash.into(),
        }
    }

    /// Compute a `SHA-256` signature over the given bytes
    pub fn sha256(data: &[u8]) -> Self {
        Self {
            hash_type: "SHA-256".to_string(),
            hash: hex::encode_upper(Sha256::digest(data)),
        }
    }
}
