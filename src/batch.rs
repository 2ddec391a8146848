// src/batch.rs
//! Directory batch processing
//!
//! Walks a tree, transforms every file with the chosen extension and writes
//! the output next to it. One bad file never aborts the run: it is counted
//! in `failed` and the walk moves on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

#[cfg(feature = "logging")]
use tracing::{debug, info, warn};

use crate::consts::{DEFAULT_INPUT_EXTENSION, DEFAULT_OUTPUT_EXTENSION};
use crate::core::{Result, Shift};
use crate::enums::Mode;
use crate::file_ops::transform_file;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub input_extension: String,
    pub output_extension: String,
    pub shift: Shift,
    pub mode: Mode,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_extension: DEFAULT_INPUT_EXTENSION.into(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.into(),
            shift: Shift::DEFAULT,
            mode: Mode::Encrypt,
        }
    }
}

/// One processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformRecord {
    pub source: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
    pub shift: Shift,
    pub chars: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub files: Vec<TransformRecord>,
    /// Matching files that could not be read or written
    pub failed: usize,
    /// Walk entries below the root that could not be visited (symlink loops,
    /// unreadable directories)
    pub skipped: usize,
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Transform every matching file under `root`.
///
/// Entries are visited in file-name order so reports are reproducible.
/// When both extensions are equal the files are rewritten in place.
pub fn transform_dir<P: AsRef<Path>>(root: P, options: &BatchOptions) -> Result<BatchReport> {
    let root = root.as_ref();

    #[cfg(feature = "logging")]
    info!(
        "Batch {} of {} (*.{} → *.{}, shift {})",
        options.mode,
        root.display(),
        options.input_extension,
        options.output_extension,
        options.shift
    );

    let mut report = BatchReport::default();

    // Collect first so freshly written outputs are never picked up mid-walk
    let mut sources = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // Only an unreadable root is fatal
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(_err) => {
                #[cfg(feature = "logging")]
                warn!("SKIPPED {_err}");

                report.skipped += 1;
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), &options.input_extension) {
            sources.push(entry.into_path());
        }
    }

    for source in sources {
        let output = source.with_extension(&options.output_extension);
        match transform_file(&source, &output, options.shift, options.mode) {
            Ok(chars) => {
                #[cfg(feature = "logging")]
                debug!("{} → {} ({chars} chars)", source.display(), output.display());

                report.files.push(TransformRecord {
                    source,
                    output,
                    mode: options.mode,
                    shift: options.shift,
                    chars,
                });
            }
            Err(_err) => {
                #[cfg(feature = "logging")]
                warn!("FAILED {}: {_err}", source.display());

                report.failed += 1;
            }
        }
    }

    #[cfg(feature = "logging")]
    info!(
        "Batch complete: {} processed, {} failed, {} skipped",
        report.files.len(),
        report.failed,
        report.skipped
    );

    Ok(report)
}
