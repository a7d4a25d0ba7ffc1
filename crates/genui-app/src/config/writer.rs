//! Atomic file writes for configuration files
//!
//! Content goes to a temp file next to the target and is renamed over it,
//! while an exclusive lock on a sibling `.lock` file keeps two GenUI
//! processes from interleaving writes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use genui_core::prelude::*;

/// Write `content` to `dir/file_name` atomically
pub fn write_atomic(dir: &Path, file_name: &str, content: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;

    let target = dir.join(file_name);
    let temp_path = dir.join(format!(".{}.tmp", file_name));
    let lock_path = dir.join(format!(".{}.lock", file_name));

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::config(format!("Failed to open {}: {}", lock_path.display(), e)))?;

    // Blocks if another process holds the lock
    lock_file
        .lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {}: {}", file_name, e)))?;

    let mut temp = std::fs::File::create(&temp_path)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    temp.flush()
        .map_err(|e| Error::config(format!("Failed to flush temp file: {}", e)))?;
    drop(temp);

    std::fs::rename(&temp_path, &target)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    // Lock is released when lock_file is dropped
    debug!("Wrote {:?}", target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("genui-studio");

        write_atomic(&dir, "preferences.toml", "theme = \"dark\"\n").unwrap();

        let content = std::fs::read_to_string(dir.join("preferences.toml")).unwrap();
        assert_eq!(content, "theme = \"dark\"\n");
        assert!(!dir.join(".preferences.toml.tmp").exists());
    }

    #[test]
    fn test_write_atomic_replaces_existing_content() {
        let temp = TempDir::new().unwrap();

        write_atomic(temp.path(), "config.toml", "a = 1\nb = 2\n").unwrap();
        write_atomic(temp.path(), "config.toml", "a = 3\n").unwrap();

        let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
        assert_eq!(content, "a = 3\n");
    }
}
