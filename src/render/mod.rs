//! Console rendering of archive information
//!
//! Every `render_*` function writes one section to a [`LinePrinter`] and is
//! usable on its own. [`render_short_summary`] chains the summary sections and
//! [`render_content`] lists the files.

mod compression;
mod printer;
mod requirements;
mod summary;
mod tree;

pub use compression::{
    render_compression, summarize, CompressionBucket, CompressionSummary, Percentage,
};
pub use printer::{Line, LinePrinter, Markup, Span, Style, INDENT_SIZE};
pub use requirements::{
    check_requirements, describe_required, render_conflicting_section,
    render_required_section, render_requirement_checker, RequirementCheckerStatus,
};
pub use summary::{
    format_timestamp, render_contents_summary, render_metadata, render_report,
    render_short_summary, render_signature, render_timestamp, render_version, Separator,
};
pub use tree::render_content;
