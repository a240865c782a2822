use crate::archive::ArchiveInfo;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::render::compression::render_compression;
use crate::render::printer::{Line, LinePrinter};
use crate::render::requirements::render_requirement_checker;
use crate::render::tree::render_content;
use crate::size::format_size;
use chrono::{DateTime, SecondsFormat};
use std::io::Write;
use tracing::debug;

/// Callback run between two summary sections
pub type Separator<'s, W> = &'s mut dyn FnMut(&mut LinePrinter<W>) -> Result<()>;

/// Render compression, signature, metadata, timestamp, requirement checker and
/// contents, in that order
///
/// `separator` runs between consecutive sections, not after the last one.
pub fn render_short_summary<A, W>(
    info: &A,
    out: &mut LinePrinter<W>,
    mut separator: Option<Separator<'_, W>>,
) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    let sections: [fn(&A, &mut LinePrinter<W>) -> Result<()>; 6] = [
        render_compression,
        render_signature,
        render_metadata,
        render_timestamp,
        render_requirement_checker,
        render_contents_summary,
    ];

    let last = sections.len() - 1;

    for (index, section) in sections.iter().enumerate() {
        section(info, out)?;

        if index != last {
            if let Some(separator) = separator.as_mut() {
                separator(out)?;
            }
        }
    }

    Ok(())
}

pub fn render_version<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    out.writeln(&Line::label("API Version:").text(format!(" {}", info.version())))
}

pub fn render_signature<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    let Some(signature) = info.signature() else {
        return out.writeln(&Line::label("Signature unreadable"));
    };

    out.writeln(&Line::label("Signature:").text(format!(" {}", signature.hash_type)))?;
    out.writeln(&Line::label("Signature Hash:").text(format!(" {}", signature.hash)))
}

pub fn render_metadata<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    match info.normalized_metadata() {
        None => out.writeln(&Line::label("Metadata:").text(" None")),
        Some(metadata) => {
            out.writeln(&Line::label("Metadata:"))?;
            out.writeln(&Line::from(metadata))
        }
    }
}

/// `1700000000 (2023-11-14T22:13:20+00:00)`
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date_time) => format!(
            "{} ({})",
            timestamp,
            date_time.to_rfc3339_opts(SecondsFormat::Secs, false)
        ),
        None => timestamp.to_string(),
    }
}

pub fn render_timestamp<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    out.writeln(&Line::label("Timestamp:").text(format!(" {}", format_timestamp(info.timestamp()))))
}

pub fn render_contents_summary<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    let total: u64 = info.files_compression_count().values().sum();

    let files = if total == 1 {
        " 1 file".to_string()
    } else {
        format!(" {} files", total)
    };

    out.writeln(&Line::label("Contents:").text(format!(
        "{} ({})",
        files,
        format_size(info.archive_size())
    )))
}

/// Short summary followed by the content listing, as configured
pub fn render_report<A, W>(info: &A, config: &ReportConfig, sink: W) -> Result<W>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    debug!(?config, files = info.files().len(), "rendering report");

    let mut out = LinePrinter::new(sink, config.markup);

    if config.separator {
        let mut blank_line = |out: &mut LinePrinter<W>| out.newline();
        let separator: Separator<'_, W> = &mut blank_line;
        render_short_summary(info, &mut out, Some(separator))?;
        out.newline()?;
    } else {
        render_short_summary(info, &mut out, None)?;
    }

    render_content(info, &mut out, config.content)?;
    out.flush()?;

    Ok(out.into_inner())
}
