// src/export/json.rs
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde_json::json;

#[cfg(feature = "logging")]
use tracing::info;

use crate::batch::BatchReport;
use crate::consts::MANIFEST_FORMAT;
use crate::core::Result;

/// Write a batch report to `path` as a pretty-printed JSON manifest.
pub fn export_manifest<P: AsRef<Path>>(path: P, report: &BatchReport) -> Result<()> {
    let path = path.as_ref();
    let files = serde_json::to_value(&report.files)?;

    let manifest = json!({
        "export_format": MANIFEST_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_files": report.files.len(),
        "failed": report.failed,
        "skipped": report.skipped,
        "files": files,
    });

    std::fs::write(path, serde_json::to_string_pretty(&manifest)?)?;

    #[cfg(feature = "logging")]
    info!(
        "Exported manifest for {} file(s) → {}",
        report.files.len(),
        path.display()
    );

    Ok(())
}
