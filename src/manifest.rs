//! Manifest Builder
//!
//! Scans a directory of static images and writes `images.json`, a
//! pretty-printed JSON array of their filenames. The write is atomic: the
//! manifest is either fully replaced or left untouched.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::log_debug;
use crate::logic::catalog::has_image_extension;

/// File name of the manifest inside the public directory
pub const MANIFEST_FILE_NAME: &str = "images.json";

/// List image files in `dir`, in directory listing order
///
/// Entries are matched by name only: anything with a recognized image
/// extension is returned, subdirectories included.
/// Names that are not valid UTF-8 cannot appear in a JSON manifest and are
/// skipped.
pub fn scan_image_files(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read image directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to list image directory {}", dir.display()))?;

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log_debug(&format!("Skipping non-UTF-8 file name in {}", dir.display()));
            continue;
        };

        if has_image_extension(&name) {
            files.push(name);
        }
    }

    Ok(files)
}

/// Serialize filenames the way the manifest stores them (2-space indent)
pub fn render_manifest(files: &[String]) -> Result<String> {
    serde_json::to_string_pretty(files).context("Failed to serialize manifest")
}

/// Scan `dir` and atomically write its manifest to `output`
///
/// # Returns
/// The number of images listed.
pub fn write_manifest(dir: &Path, output: &Path) -> Result<usize> {
    let files = scan_image_files(dir)?;
    let json = render_manifest(&files)?;
    write_atomically(output, json.as_bytes())?;

    log_debug(&format!(
        "Wrote manifest {} with {} images",
        output.display(),
        files.len()
    ));
    Ok(files.len())
}

/// Temp file next to `output`, so the final rename stays on one filesystem
fn temp_path_for(output: &Path) -> PathBuf {
    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| MANIFEST_FILE_NAME.to_string());
    output.with_file_name(format!(".{}.tmp-{}", file_name, std::process::id()))
}

fn write_atomically(output: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(output);

    let result = (|| -> Result<()> {
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;
        file.write_all(contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        file.sync_all()
            .with_context(|| format!("Failed to flush {}", temp_path.display()))?;
        fs::rename(&temp_path, output)
            .with_context(|| format!("Failed to replace manifest {}", output.display()))?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
