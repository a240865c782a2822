//! End-to-end tests for the summary report

use pharinfo_rs::render::{
    check_requirements, render_requirement_checker, render_short_summary, LinePrinter,
    RequirementCheckerStatus, Separator,
};
use pharinfo_rs::{
    render_report, CompressionAlgorithm, MemoryArchive, MemoryArchiveBuilder, ReportConfig,
    Signature, REQUIREMENTS_DESCRIPTOR,
};

const REQUIREMENTS: &str = r#"[
    {"type": "php", "condition": "^8.1", "source": null, "message": "PHP ^8.1", "helpMessage": ""},
    {"type": "extension", "condition": "json", "source": null, "message": "", "helpMessage": ""},
    {"type": "extension", "condition": "json", "source": null, "message": "", "helpMessage": ""},
    {"type": "extension-conflict", "condition": "xdebug", "source": "acme/debug", "message": "", "helpMessage": ""}
]"#;

fn project_archive() -> MemoryArchiveBuilder {
    MemoryArchive::builder()
        .timestamp(1_700_000_000)
        .signature(Signature::new("SHA-256", "ABC"))
        .add_file("index.php", CompressionAlgorithm::None, 100)
        .add_file("src/App.php", CompressionAlgorithm::Gz, 50)
        .add_file("src/Cli.php", CompressionAlgorithm::Gz, 50)
        .add_file("src/Util/Str.php", CompressionAlgorithm::Gz, 30)
        .add_file_with_contents(
            REQUIREMENTS_DESCRIPTOR,
            CompressionAlgorithm::None,
            REQUIREMENTS.as_bytes(),
        )
        .archive_size(4096)
}

fn requirement_checker_output(archive: &MemoryArchive) -> String {
    let mut out = LinePrinter::plain(Vec::new());
    render_requirement_checker(archive, &mut out).unwrap();
    String::from_utf8(out.into_inner()).unwrap()
}

#[test]
fn test_full_short_summary() {
    let archive = project_archive().build();

    let mut out = LinePrinter::plain(Vec::new());
    let mut blank_line = |out: &mut LinePrinter<Vec<u8>>| out.newline();
    let separator: Separator<'_, Vec<u8>> = &mut blank_line;
    render_short_summary(&archive, &mut out, Some(separator)).unwrap();

    let expected = "\
Archive Compression: None
Files Compression:
  - GZ (60.00%)
  - None (40.00%)

Signature: SHA-256
Signature Hash: ABC

Metadata: None

Timestamp: 1700000000 (2023-11-14T22:13:20+00:00)

RequirementChecker:
  Required:
  - PHP ^8.1 (root)
  - ext-json (root)
  Conflict:
  - ext-xdebug (acme/debug)

Contents: 5 files (4.00KB)
";

    assert_eq!(String::from_utf8(out.into_inner()).unwrap(), expected);
}

#[test]
fn test_summary_without_separator() {
    let archive = MemoryArchive::builder()
        .add_file("index.php", CompressionAlgorithm::Gz, 10)
        .build();

    let mut out = LinePrinter::plain(Vec::new());
    render_short_summary(&archive, &mut out, None).unwrap();
    let output = String::from_utf8(out.into_inner()).unwrap();

    assert!(!output.contains("\n\n"));
    assert!(output.contains("Files Compression: GZ\n"));
    assert!(output.contains("Signature unreadable\n"));
    assert!(output.contains("RequirementChecker: Not found.\n"));
    assert!(output.ends_with("Contents: 1 file (10.00B)\n"));
}

#[test]
fn test_full_report_includes_tree() {
    let archive = project_archive().build();
    let descriptor_size = REQUIREMENTS.len();

    let output = render_report(&archive, &ReportConfig::default(), Vec::new()).unwrap();
    let output = String::from_utf8(output).unwrap();

    let expected_tree = format!(
        "\
Contents: 5 files (4.00KB)

index.php [NONE] - 100.00B
src/
  App.php [GZ] - 50.00B
  Cli.php [GZ] - 50.00B
  Util/
    Str.php [GZ] - 30.00B
.box/
  .requirements.php [NONE] - {}.00B
",
        descriptor_size
    );

    assert!(output.ends_with(&expected_tree), "unexpected report:\n{}", output);
}

#[test]
fn test_report_with_tags_markup() {
    let archive = MemoryArchive::builder()
        .add_file("index.php", CompressionAlgorithm::None, 10)
        .build();

    let config = ReportConfig::from_toml("markup = \"tags\"\nseparator = false").unwrap();
    let output = String::from_utf8(render_report(&archive, &config, Vec::new()).unwrap()).unwrap();

    assert!(output.starts_with("<comment>Archive Compression:</comment> None\n"));
    assert!(output.contains("<comment>Signature unreadable</comment>\n"));
    assert!(output.ends_with("index.php <fg=red>[NONE]</fg=red> - 10.00B\n"));
}

#[test]
fn test_requirement_checker_not_found() {
    let archive = MemoryArchive::builder()
        .add_file("index.php", CompressionAlgorithm::None, 10)
        .build();

    assert_eq!(check_requirements(&archive), RequirementCheckerStatus::NotFound);
    assert_eq!(
        requirement_checker_output(&archive),
        "RequirementChecker: Not found.\n"
    );
}

#[test]
fn test_requirement_checker_empty_list() {
    let archive = MemoryArchive::builder()
        .add_file_with_contents(REQUIREMENTS_DESCRIPTOR, CompressionAlgorithm::None, b"[]")
        .build();

    assert_eq!(check_requirements(&archive), RequirementCheckerStatus::Empty);
    assert_eq!(
        requirement_checker_output(&archive),
        "RequirementChecker: No requirement found.\n"
    );
}

#[test]
fn test_requirement_checker_not_a_list() {
    let archive = MemoryArchive::builder()
        .add_file_with_contents(
            REQUIREMENTS_DESCRIPTOR,
            CompressionAlgorithm::None,
            br#"{"type": "php"}"#,
        )
        .build();

    assert_eq!(
        requirement_checker_output(&archive),
        "RequirementChecker: Could not be checked.\n"
    );
}

#[test]
fn test_requirement_checker_unevaluable_descriptor() {
    let archive = MemoryArchive::builder()
        .add_file_with_contents(
            REQUIREMENTS_DESCRIPTOR,
            CompressionAlgorithm::Gz,
            b"<?php return [];",
        )
        .build();

    assert_eq!(check_requirements(&archive), RequirementCheckerStatus::Unreadable);
}

#[test]
fn test_requirement_checker_listed_without_contents() {
    let archive = MemoryArchive::builder()
        .add_file(REQUIREMENTS_DESCRIPTOR, CompressionAlgorithm::None, 42)
        .build();

    assert_eq!(check_requirements(&archive), RequirementCheckerStatus::Unreadable);
}

#[test]
fn test_requirement_checker_malformed_record() {
    let archive = MemoryArchive::builder()
        .add_file_with_contents(
            REQUIREMENTS_DESCRIPTOR,
            CompressionAlgorithm::None,
            br#"[{"type": "php", "condition": "^8.1"}, {"type": "ini", "condition": "phar.readonly"}]"#,
        )
        .build();

    assert_eq!(
        requirement_checker_output(&archive),
        "RequirementChecker: Could not be checked.\n"
    );
}

#[test]
fn test_requirement_checker_conflicts_only() {
    let archive = MemoryArchive::builder()
        .add_file_with_contents(
            REQUIREMENTS_DESCRIPTOR,
            CompressionAlgorithm::None,
            br#"[{"type": "extension-conflict", "condition": "phar", "source": null}]"#,
        )
        .build();

    assert_eq!(
        requirement_checker_output(&archive),
        "RequirementChecker:\n  Conflict:\n  - ext-phar (root)\n"
    );
}

#[test]
fn test_absent_signature_prints_single_line() {
    let archive = MemoryArchive::builder().build();

    let mut out = LinePrinter::plain(Vec::new());
    render_short_summary(&archive, &mut out, None).unwrap();
    let output = String::from_utf8(out.into_inner()).unwrap();

    assert_eq!(output.matches("Signature").count(), 1);
    assert!(output.contains("Signature unreadable\n"));
}
