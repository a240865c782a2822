//! Report configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! markup = "plain"        # "plain" | "tags"
//! separator = true        # blank line between summary sections
//!
//! [content]
//! max_depth = 2           # omit for an unbounded listing
//! indent = true
//! ```

use crate::error::{ReportError, Result};
use crate::render::Markup;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for the content tree listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentOptions {
    /// Deepest directory level listed, `None` for no limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Render a directory tree instead of flat relative paths
    pub indent: bool,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            indent: true,
        }
    }
}

impl ContentOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn flat(mut self) -> Self {
        self.indent = false;
        self
    }
}

/// Top-level report configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub markup: Markup,

    /// Print an empty line between summary sections
    pub separator: bool,

    pub content: ContentOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            markup: Markup::Plain,
            separator: true,
            content: ContentOptions::default(),
        }
    }
}

impl ReportConfig {
    /// Parse from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ReportError::TomlError(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ReportError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&source)
    }
}
