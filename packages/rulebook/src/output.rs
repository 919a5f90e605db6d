//! JSON writer for the finished node set.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::Node;

/// Generate a pretty JSON array of nodes.
pub fn to_json(nodes: &[Node]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

/// Write nodes as a pretty JSON array followed by a newline.
pub fn write_json<W: Write>(nodes: &[Node], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, nodes)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Save nodes to a JSON file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// A failed run never leaves a partially written output file behind.
pub fn save_json(nodes: &[Node], path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rules.json".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let file = File::create(&temp_file)?;
        write_json(nodes, &file)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), nodes = nodes.len(), "Saved JSON");
    Ok(())
}
