use crate::archive::ArchiveInfo;
use crate::error::{ReportError, Result};
use crate::render::printer::{Line, LinePrinter, Style};
use crate::requirement::{
    partition, PartitionedRequirements, Requirement, RequirementKind, REQUIREMENTS_DESCRIPTOR,
};
use std::io::Write;
use tracing::{debug, warn};

/// Outcome of looking up the requirements descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementCheckerStatus {
    /// No descriptor in the archive
    NotFound,
    /// Descriptor present but unusable
    Unreadable,
    /// Descriptor lists no requirement
    Empty,
    Found(PartitionedRequirements),
}

/// Locate, evaluate and partition the requirements descriptor
pub fn check_requirements<A: ArchiveInfo + ?Sized>(info: &A) -> RequirementCheckerStatus {
    if !info.contains(REQUIREMENTS_DESCRIPTOR) {
        return RequirementCheckerStatus::NotFound;
    }

    match load_requirements(info) {
        Ok(partitioned) if partitioned.is_empty() => RequirementCheckerStatus::Empty,
        Ok(partitioned) => RequirementCheckerStatus::Found(partitioned),
        Err(e) => {
            warn!(path = REQUIREMENTS_DESCRIPTOR, error = %e, "requirements could not be checked");
            RequirementCheckerStatus::Unreadable
        }
    }
}

fn load_requirements<A: ArchiveInfo + ?Sized>(info: &A) -> Result<PartitionedRequirements> {
    let evaluated = info.evaluate(REQUIREMENTS_DESCRIPTOR)?;
    let records = evaluated.as_array().ok_or(ReportError::DescriptorNotList)?;

    debug!(records = records.len(), "evaluated requirements descriptor");

    partition(records)
}

pub fn render_requirement_checker<A, W>(info: &A, out: &mut LinePrinter<W>) -> Result<()>
where
    A: ArchiveInfo + ?Sized,
    W: Write,
{
    let label = Line::label("RequirementChecker:");

    match check_requirements(info) {
        RequirementCheckerStatus::NotFound => out.writeln(&label.text(" Not found.")),
        RequirementCheckerStatus::Unreadable => out.writeln(&label.text(" Could not be checked.")),
        RequirementCheckerStatus::Empty => out.writeln(&label.text(" No requirement found.")),
        RequirementCheckerStatus::Found(partitioned) => {
            out.writeln(&label)?;
            render_required_section(&partitioned.required, out)?;
            render_conflicting_section(&partitioned.conflicting, out)
        }
    }
}

/// `PHP ^8.1 (root)` / `ext-json (acme/lib)`
pub fn describe_required(requirement: &Requirement) -> String {
    match requirement.kind {
        RequirementKind::Php => format!(
            "PHP {} ({})",
            requirement.condition,
            requirement.source_or_root()
        ),
        RequirementKind::Extension | RequirementKind::ExtensionConflict => format!(
            "ext-{} ({})",
            requirement.condition,
            requirement.source_or_root()
        ),
    }
}

pub fn render_required_section<W: Write>(
    required: &[Requirement],
    out: &mut LinePrinter<W>,
) -> Result<()> {
    render_section("Required:", required, out)
}

pub fn render_conflicting_section<W: Write>(
    conflicting: &[Requirement],
    out: &mut LinePrinter<W>,
) -> Result<()> {
    render_section("Conflict:", conflicting, out)
}

fn render_section<W: Write>(
    title: &str,
    requirements: &[Requirement],
    out: &mut LinePrinter<W>,
) -> Result<()> {
    if requirements.is_empty() {
        return Ok(());
    }

    out.writeln(&Line::new().text("  ").styled(Style::Comment, title))?;
    for requirement in requirements {
        out.writeln(&Line::from(format!("  - {}", describe_required(requirement))))?;
    }

    Ok(())
}
