use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use huffpack::keyfile::KEY_EXT;

const ARTIFACT_EXT: &str = "bin";

/// Read a whole text file, trimming trailing whitespace unless asked not to.
pub fn read_text(path: &Path, keep_whitespace: bool) -> anyhow::Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if keep_whitespace {
        Ok(text)
    } else {
        Ok(text.trim_end().to_string())
    }
}

pub fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// `dir/name.txt` -> `dir/name.bin`
pub fn compressed_path(input: &Path) -> PathBuf {
    input.with_extension(ARTIFACT_EXT)
}

/// `dir/name.bin` -> `dir/name_decompressed.txt`
pub fn decompressed_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    artifact.with_file_name(format!("{stem}_decompressed.txt"))
}

/// `dir/name.bin` -> `dir/name.hkey`
pub fn key_path(artifact: &Path) -> PathBuf {
    artifact.with_extension(KEY_EXT)
}

/// Refuse to write any of `outputs` over `input`.
pub fn ensure_distinct(input: &Path, outputs: &[&Path]) -> anyhow::Result<()> {
    for output in outputs {
        if *output == input {
            bail!("{} would overwrite the input", output.display());
        }
    }
    Ok(())
}

pub fn file_size(path: &Path) -> anyhow::Result<u64> {
    let meta = fs::metadata(path).with_context(|| format!("failed to stat {}", path.display()))?;
    Ok(meta.len())
}

/// Format bytes into human-readable string (e.g. 1024 -> "1.00 KB")
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
