use crate::archive::{ArchiveInfo, CompressionAlgorithm};
use crate::error::Result;
use crate::render::printer::{Line, LinePrinter};
use indexmap::IndexMap;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Percentage with two decimals, stored as hundredths of a percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(i64);

impl Percentage {
    pub const HUNDRED: Percentage = Percentage(10_000);

    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// `count * 100 / total` rounded half away from zero to two decimals
    pub fn of(count: u64, total: u64) -> Self {
        if total == 0 {
            return Self(0);
        }
        let scaled = (2 * count as u128 * 10_000 + total as u128) / (2 * total as u128);
        Self(scaled as i64)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }
}

impl std::ops::Sub for Percentage {
    type Output = Percentage;

    fn sub(self, rhs: Percentage) -> Percentage {
        Percentage(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Percentage {
    fn sum<I: Iterator<Item = Percentage>>(iter: I) -> Self {
        Percentage(iter.map(|p| p.0).sum())
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// One algorithm's share of the archive's files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionBucket {
    pub label: &'static str,
    pub count: u64,
    pub percentage: Percentage,
}

/// How files are spread over compression algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionSummary {
    /// Every file uses the same algorithm
    Single(&'static str),
    /// Several algorithms; percentages add up to exactly 100.00
    Breakdown(Vec<CompressionBucket>),
}

/// Turn per-algorithm file counts into a display summary
///
/// The uncompressed bucket is relabelled `None` and moved last, and empty
/// buckets are dropped. With two or more buckets, every bucket but the last
/// gets its rounded ratio and the last takes what remains of 100.
pub fn summarize(count: &IndexMap<CompressionAlgorithm, u64>) -> CompressionSummary {
    let uncompressed = count.get(&CompressionAlgorithm::None).copied();

    let buckets: Vec<(&'static str, u64)> = count
        .iter()
        .filter(|(algorithm, _)| **algorithm != CompressionAlgorithm::None)
        .map(|(algorithm, n)| (algorithm.label(), *n))
        .chain(uncompressed.map(|n| (CompressionAlgorithm::None.label(), n)))
        .filter(|(_, n)| *n > 0)
        .collect();

    if let [(label, _)] = buckets.as_slice() {
        return CompressionSummary::Single(*label);
    }

    let total: u64 = buckets.iter().map(|(_, n)| n).sum();
    let last = buckets.len().saturating_sub(1);
    let mut remaining = Percentage::HUNDRED;

    let breakdown = buckets
        .into_iter()
        .enumerate()
        .map(|(index, (label, n))| {
            let percentage = if index == last {
                remaining
            } else {
                let percentage = Percentage::of(n, total);
                remaining = remaining - percentage;
                percentage
            };

            CompressionBucket {
                label,
                count: n,
                percentage,
            }
        })
        .collect();

    CompressionSummary::Breakdown(breakdown)
}

/// Archive compression followed by the per-file compression breakdown
pub fn render_compression<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    out.writeln(&Line::label("Archive Compression:").text(format!(
        " {}",
        info.compression().label()
    )))?;

    let summary = summarize(&info.files_compression_count());
    debug!(?summary, "compression summary");

    match summary {
        CompressionSummary::Single(label) => {
            out.writeln(&Line::label("Files Compression:").text(format!(" {}", label)))?;
        }
        CompressionSummary::Breakdown(buckets) => {
            out.writeln(&Line::label("Files Compression:"))?;
            for bucket in buckets {
                out.writeln(&Line::from(format!(
                    "  - {} ({}%)",
                    bucket.label, bucket.percentage
                )))?;
            }
        }
    }

    Ok(())
}
