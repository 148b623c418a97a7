//! File system utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Derives the default output path for a translated file.
///
/// `<dir>/<name>.<ext>` becomes `<dir>/<name>_translated.<ext>`; a file
/// without an extension just gets the `_translated` suffix.
pub fn translated_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_translated.{}", ext.to_string_lossy()),
        None => format!("{stem}_translated"),
    };
    input.with_file_name(file_name)
}

/// Writes content to a file atomically using a temp file and rename.
///
/// This prevents a half-written output file if the process is interrupted.
/// The temp file is created in the same directory as the target file so the
/// rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
