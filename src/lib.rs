//! pharinfo-rs: console reports for PHAR archives
//!
//! Renders what an already-opened PHAR contains:
//! - Archive and per-file compression, with an exact percentage breakdown
//! - Signature, metadata and build timestamp
//! - Requirement checker descriptor (required and conflicting environment)
//! - File listing, flat or as an indented directory tree
//!
//! Opening the archive is left to the caller, who provides an [`ArchiveInfo`]
//! implementation. [`MemoryArchive`] is an in-memory one.
//!
//! # Example
//!
//! ```
//! use pharinfo_rs::{render_report, CompressionAlgorithm, MemoryArchive, ReportConfig};
//!
//! let archive = MemoryArchive::builder()
//!     .timestamp(1_700_000_000)
//!     .add_file("index.php", CompressionAlgorithm::None, 120)
//!     .add_file("src/App.php", CompressionAlgorithm::Gz, 2048)
//!     .build();
//!
//! let output = render_report(&archive, &ReportConfig::default(), Vec::new())?;
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.contains("Contents: 2 files"));
//! assert!(output.contains("  App.php [GZ] - 2.00KB"));
//! # Ok::<(), pharinfo_rs::ReportError>(())
//! ```

// Core modules
pub mod archive;
pub mod config;
pub mod error;
pub mod render;
pub mod requirement;
pub mod size;

// Re-export commonly used types
pub use archive::{
    ArchiveInfo, CompressionAlgorithm, FileEntry, FileMeta, MemoryArchive, MemoryArchiveBuilder,
    Signature,
};
pub use config::{ContentOptions, ReportConfig};
pub use error::{ReportError, Result};
pub use render::{
    render_content, render_report, render_short_summary, LinePrinter, Markup, Percentage,
};
pub use requirement::{
    partition, PartitionedRequirements, Requirement, RequirementKey, RequirementKind,
    REQUIREMENTS_DESCRIPTOR,
};
pub use size::format_size;
