//! Opening the saved document in a web browser

use std::path::{Path, PathBuf};
use std::process::Command;

use tokio::sync::mpsc;
use url::Url;

use genui_core::prelude::*;

use crate::message::Message;

use super::download::save_code;

/// Launch `url` in `browser`, or the platform default when `browser` is empty
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        // Custom browser specified in settings.
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

/// `file://` URL for a saved document
pub fn file_url(path: &Path) -> Result<Url> {
    let absolute = path
        .canonicalize()
        .map_err(|e| Error::browser(format!("{}: {}", path.display(), e)))?;
    Url::from_file_path(&absolute)
        .map_err(|_| Error::browser(format!("not a valid file path: {}", absolute.display())))
}

/// Save the document, then open it
pub fn save_and_open(code: &str, path: &Path, browser: &str) -> Result<()> {
    save_code(path, code)?;
    let url = file_url(path)?;
    debug!("Opening {} with {}", url, if browser.is_empty() { "system default" } else { browser });
    open_url_in_browser(url.as_str(), browser).map_err(|e| Error::browser(e.to_string()))
}

pub fn spawn_open_in_browser(
    code: String,
    path: PathBuf,
    browser: String,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let task_path = path.clone();
        let error = match tokio::task::spawn_blocking(move || {
            save_and_open(&code, &task_path, &browser)
        })
        .await
        {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(e) => Some(format!("browser task failed: {}", e)),
        };

        if msg_tx
            .send(Message::BrowserOpened { path, error })
            .await
            .is_err()
        {
            warn!("Failed to report browser result: event loop closed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_url_for_saved_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("GenUI-Code.html");
        std::fs::write(&path, "<p/>").unwrap();

        let url = file_url(&path).unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/GenUI-Code.html"));
    }

    #[test]
    fn test_file_url_for_missing_file_is_browser_error() {
        let err = file_url(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, Error::Browser { .. }));
    }

    #[test]
    fn test_custom_browser_that_does_not_exist_fails() {
        let result = open_url_in_browser(
            "file:///tmp/GenUI-Code.html",
            "genui-browser-that-does-not-exist",
        );
        assert!(result.is_err());
    }
}
