//! Requirement checker records embedded in an archive
//!
//! A built archive may carry a requirements descriptor (`.box/.requirements.php`)
//! listing the environment it needs: a PHP version range, required extensions and
//! conflicting extensions. Once evaluated, the descriptor is a list of raw records:
//!
//! ```text
//! [
//!   {"type": "php", "condition": "^8.1", "source": null, ...},
//!   {"type": "extension", "condition": "mbstring", "source": "acme/lib", ...},
//!   {"type": "extension-conflict", "condition": "xdebug", "source": null, ...}
//! ]
//! ```
//!
//! [`partition`] turns those records into two deduplicated lists for display.

use crate::error::{ReportError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Path of the requirements descriptor inside the archive
pub const REQUIREMENTS_DESCRIPTOR: &str = ".box/.requirements.php";

/// Source shown when a requirement has no originating package
pub const ROOT_SOURCE: &str = "root";

/// Kind of environment requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementKind {
    /// PHP version constraint
    Php,
    /// Extension that must be loaded
    Extension,
    /// Extension that must not be loaded
    ExtensionConflict,
}

impl RequirementKind {
    /// Wire name used in descriptor records
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Php => "php",
            Self::Extension => "extension",
            Self::ExtensionConflict => "extension-conflict",
        }
    }

    pub fn is_conflict(self) -> bool {
        matches!(self, Self::ExtensionConflict)
    }
}

impl FromStr for RequirementKind {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "php" => Ok(Self::Php),
            "extension" => Ok(Self::Extension),
            "extension-conflict" => Ok(Self::ExtensionConflict),
            other => Err(ReportError::UnknownRequirementType(other.to_string())),
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw descriptor record before the type is validated
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequirement {
    #[serde(rename = "type")]
    kind: String,
    condition: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    help_message: String,
}

/// A single environment requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub kind: RequirementKind,

    /// Version range for PHP, extension name otherwise
    pub condition: String,

    /// Package that declared the requirement, `None` for the root package
    pub source: Option<String>,

    pub message: String,

    pub help_message: String,
}

impl Requirement {
    pub fn new(kind: RequirementKind, condition: impl Into<String>, source: Option<String>) -> Self {
        Self {
            kind,
            condition: condition.into(),
            source,
            message: String::new(),
            help_message: String::new(),
        }
    }

    /// Build a requirement from an untyped descriptor record
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let raw = RawRequirement::deserialize(value)
            .map_err(|e| ReportError::MalformedRequirement(e.to_string()))?;

        Ok(Self {
            kind: raw.kind.parse()?,
            condition: raw.condition,
            source: raw.source,
            message: raw.message,
            help_message: raw.help_message,
        })
    }

    /// Originating package, or `root`
    pub fn source_or_root(&self) -> &str {
        self.source.as_deref().unwrap_or(ROOT_SOURCE)
    }

    pub fn key(&self) -> RequirementKey {
        RequirementKey::of(self)
    }
}

/// Deduplication identity of a requirement: `type:condition:source`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequirementKey(String);

impl RequirementKey {
    pub fn of(requirement: &Requirement) -> Self {
        Self(format!(
            "{}:{}:{}",
            requirement.kind,
            requirement.condition,
            requirement.source.as_deref().unwrap_or_default()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Requirements split by whether they must or must not be satisfied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedRequirements {
    /// PHP constraints and required extensions
    pub required: Vec<Requirement>,

    /// Conflicting extensions
    pub conflicting: Vec<Requirement>,
}

impl PartitionedRequirements {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.conflicting.is_empty()
    }
}

/// Build, deduplicate and partition raw descriptor records
///
/// A record whose key was seen before keeps the first position and takes the
/// later value. Any malformed record fails the whole partition.
pub fn partition(records: &[serde_json::Value]) -> Result<PartitionedRequirements> {
    let requirements = records
        .iter()
        .map(Requirement::from_value)
        .collect::<Result<Vec<_>>>()?;

    Ok(partition_requirements(requirements))
}

/// Deduplicate and partition already-built requirements
pub fn partition_requirements(
    requirements: impl IntoIterator<Item = Requirement>,
) -> PartitionedRequirements {
    let mut required: IndexMap<RequirementKey, Requirement> = IndexMap::new();
    let mut conflicting: IndexMap<RequirementKey, Requirement> = IndexMap::new();

    for requirement in requirements {
        let key = requirement.key();

        if requirement.kind.is_conflict() {
            conflicting.insert(key, requirement);
        } else {
            required.insert(key, requirement);
        }
    }

    debug!(
        required = required.len(),
        conflicting = conflicting.len(),
        "partitioned requirements"
    );

    PartitionedRequirements {
        required: required.into_values().collect(),
        conflicting: conflicting.into_values().collect(),
    }
}
