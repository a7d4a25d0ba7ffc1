//! Saving generated code to disk

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;

use genui_core::prelude::*;

use crate::message::Message;

/// Write `code` to `path`, creating the parent directory
///
/// The file is written next to the target and renamed over it so a failed
/// write never leaves a truncated document behind.
pub fn save_code(path: &Path, code: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::download(path, "path has no file name"))?;

    std::fs::create_dir_all(&dir).map_err(|e| Error::download(path, e.to_string()))?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, code).map_err(|e| Error::download(path, e.to_string()))?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::download(path, e.to_string()));
    }

    debug!("Saved {} bytes to {}", code.len(), path.display());
    Ok(())
}

/// Save in a background task and report `DownloadCompleted`
pub fn spawn_save(code: String, path: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let write_path = path.clone();
        let error = match tokio::task::spawn_blocking(move || save_code(&write_path, &code)).await
        {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(e) => Some(format!("save task failed: {}", e)),
        };

        if msg_tx
            .send(Message::DownloadCompleted { path, error })
            .await
            .is_err()
        {
            warn!("Failed to report download result: event loop closed");
        }
    });
}
