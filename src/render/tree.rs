use crate::archive::{ArchiveInfo, CompressionAlgorithm, FileEntry, FileMeta};
use crate::config::ContentOptions;
use crate::error::Result;
use crate::render::printer::{Line, LinePrinter, Style};
use crate::size::format_size;
use std::collections::HashSet;
use std::io::Write;
use tracing::{debug, warn};

/// List the archive's files, optionally as an indented directory tree
///
/// Files deeper than `options.max_depth` are skipped. In tree mode each
/// directory header is printed once, the first time a file below it shows up.
///
/// Printed headers are remembered by bare directory name, so after `a/b/` has
/// been shown, a later `c/b/` does not print `b/` again.
pub fn render_content<A, W>(info: &A, out: &mut LinePrinter<W>, options: ContentOptions) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    let mut depth = 0;
    let mut rendered_directories: HashSet<&str> = HashSet::new();
    let mut skipped = 0usize;

    for file in info.files() {
        if options.max_depth.is_some_and(|max| file.depth() > max) {
            skipped += 1;
            continue;
        }

        let Some(meta) = info.file_meta(file.relative_path()) else {
            warn!(path = file.relative_path(), "no metadata for file, skipping");
            continue;
        };

        if options.indent {
            depth = render_parent_directories(file, out, &mut rendered_directories)?;
        }

        let name = if options.indent {
            file.filename()
        } else {
            file.relative_path()
        };

        out.print(&file_line(name, meta), depth, options.indent)?;
    }

    debug!(
        files = info.files().len(),
        skipped,
        directories = rendered_directories.len(),
        "rendered content"
    );

    Ok(())
}

/// Print headers for the file's ancestor directories not shown yet
///
/// Returns the depth at which the file itself goes.
fn render_parent_directories<'a, W: Write>(
    file: &'a FileEntry,
    out: &mut LinePrinter<W>,
    rendered_directories: &mut HashSet<&'a str>,
) -> Result<usize> {
    let mut depth = 0;

    for (index, directory) in file.parent_segments().enumerate() {
        if rendered_directories.insert(directory) {
            out.print(
                &Line::new().styled(Style::Info, format!("{}/", directory)),
                index,
                true,
            )?;
        }
        depth += 1;
    }

    Ok(depth)
}

/// `name [GZ] - 1.20KB`
fn file_line(name: &str, meta: FileMeta) -> Line {
    let line = Line::new().text(name).text(" ");

    let line = match meta.compression {
        CompressionAlgorithm::None => line.styled(Style::Red, "[NONE]"),
        algorithm => line.styled(Style::Cyan, format!("[{}]", algorithm.name())),
    };

    line.text(format!(" - {}", format_size(meta.compressed_size)))
}
