/// Render a report for a small in-memory PHAR
///
/// Run with: cargo run --example summary [config.toml]
use anyhow::Context;
use pharinfo_rs::{
    render_report, CompressionAlgorithm, MemoryArchive, ReportConfig, Signature,
    REQUIREMENTS_DESCRIPTOR,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ReportConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => ReportConfig::default(),
    };

    let requirements = serde_json::json!([
        {"type": "php", "condition": "^8.1", "source": null},
        {"type": "extension", "condition": "phar", "source": null},
        {"type": "extension", "condition": "mbstring", "source": "symfony/polyfill-mbstring"},
        {"type": "extension-conflict", "condition": "xdebug", "source": null}
    ]);
    let requirements = serde_json::to_vec(&requirements)?;

    let stub = b"<?php Phar::mapPhar('app.phar'); require 'phar://app.phar/index.php'; __HALT_COMPILER();";

    let archive = MemoryArchive::builder()
        .timestamp(1_700_000_000)
        .signature(Signature::sha256(stub))
        .metadata_value(&serde_json::json!({"name": "acme/app", "version": "1.4.2"}))?
        .add_file("index.php", CompressionAlgorithm::None, 812)
        .add_file("src/Kernel.php", CompressionAlgorithm::Gz, 3_214)
        .add_file("src/Command/BuildCommand.php", CompressionAlgorithm::Gz, 5_876)
        .add_file("src/Command/InfoCommand.php", CompressionAlgorithm::Gz, 4_102)
        .add_file("vendor/autoload.php", CompressionAlgorithm::None, 771)
        .add_file("vendor/composer/ClassLoader.php", CompressionAlgorithm::Bz2, 4_950)
        .add_file_with_contents(REQUIREMENTS_DESCRIPTOR, CompressionAlgorithm::None, &requirements)
        .archive_size(48_213)
        .build();

    let mut stdout = render_report(&archive, &config, io::stdout().lock()).context("writing report")?;
    stdout.flush()?;

    Ok(())
}
