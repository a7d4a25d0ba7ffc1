//! Theme preference: persisted light/dark flag with change notification
//!
//! [`ThemeController`] is the single source of truth for "is a dark theme
//! active". It reads the persisted value once at startup, writes on every
//! change and publishes the current mode on a `watch` channel so renderers
//! and other observers never go back to storage.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use genui_core::prelude::*;
use genui_core::ThemeMode;

use crate::config::{load_user_preferences, save_user_preferences};

/// Receiving end of the theme change channel
pub type ThemeReceiver = watch::Receiver<ThemeMode>;

/// Process-external storage for the theme slot
#[cfg_attr(test, mockall::automock)]
pub trait ThemeStore: Send {
    /// Read the persisted value; `Ok(None)` when nothing was stored yet
    fn load(&self) -> Result<Option<ThemeMode>>;

    /// Persist a value
    fn save(&self, mode: ThemeMode) -> Result<()>;
}

/// Theme slot kept in `preferences.toml`
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    config_dir: PathBuf,
}

impl FileThemeStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        Ok(load_user_preferences(&self.config_dir)
            .and_then(|prefs| prefs.theme)
            .map(|value| ThemeMode::from_persisted(&value)))
    }

    fn save(&self, mode: ThemeMode) -> Result<()> {
        let mut prefs = load_user_preferences(&self.config_dir).unwrap_or_default();
        prefs.theme = Some(mode.as_str().to_string());
        save_user_preferences(&self.config_dir, &prefs)
    }
}

/// Non-persistent store (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Arc<Mutex<Option<ThemeMode>>>,
}

impl MemoryThemeStore {
    pub fn new(initial: Option<ThemeMode>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(initial)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        self.slot
            .lock()
            .map(|slot| *slot)
            .map_err(|_| Error::config("theme store poisoned"))
    }

    fn save(&self, mode: ThemeMode) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::config("theme store poisoned"))?;
        *slot = Some(mode);
        Ok(())
    }
}

/// Owner of the shared theme flag
pub struct ThemeController {
    store: Box<dyn ThemeStore>,
    tx: watch::Sender<ThemeMode>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Create the controller, initialising the flag from the store
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        let initial = ThemeMode::from_is_dark(read_initial(store.as_ref()));
        let (tx, _rx) = watch::channel(initial);
        info!("Theme initialised: {}", initial);
        Self { store, tx }
    }

    /// Controller backed by [`MemoryThemeStore`]
    pub fn in_memory(initial: ThemeMode) -> Self {
        Self::new(Box::new(MemoryThemeStore::new(Some(initial))))
    }

    /// Read the persisted preference; light when absent or unreadable
    pub fn initial_theme(&self) -> bool {
        read_initial(self.store.as_ref())
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn mode(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    /// Persist the preference and update the shared flag
    ///
    /// A failed write is logged; the in-memory flag is still updated.
    pub fn set_theme(&mut self, is_dark: bool) {
        let mode = ThemeMode::from_is_dark(is_dark);
        if let Err(e) = self.store.save(mode) {
            warn!("Failed to persist theme preference: {}", e);
        }
        let previous = self.tx.send_replace(mode);
        if previous != mode {
            debug!("Theme changed: {} -> {}", previous, mode);
        }
    }

    /// Flip the current theme; returns the new mode
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set_theme(next.is_dark());
        next
    }

    /// Observe theme changes
    pub fn subscribe(&self) -> ThemeReceiver {
        self.tx.subscribe()
    }
}

fn read_initial(store: &dyn ThemeStore) -> bool {
    match store.load() {
        Ok(Some(mode)) => mode.is_dark(),
        Ok(None) => false,
        Err(e) => {
            warn!("Failed to read theme preference, using light: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use tempfile::TempDir;

    #[test]
    fn test_initial_theme_defaults_to_light_when_absent() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(None));

        let controller = ThemeController::new(Box::new(store));
        assert!(!controller.is_dark());
        assert!(!controller.initial_theme());
    }

    #[test]
    fn test_initial_theme_defaults_to_light_when_unreadable() {
        let mut store = MockThemeStore::new();
        store
            .expect_load()
            .returning(|| Err(Error::config("corrupt")));

        let controller = ThemeController::new(Box::new(store));
        assert!(!controller.is_dark());
    }

    #[test]
    fn test_initial_theme_reads_dark() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(Some(ThemeMode::Dark)));

        let controller = ThemeController::new(Box::new(store));
        assert!(controller.is_dark());
    }

    #[test]
    fn test_set_theme_persists_value() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .with(eq(ThemeMode::Dark))
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = ThemeController::new(Box::new(store));
        controller.set_theme(true);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_failed_persist_still_updates_flag() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(Error::config("read-only")));

        let mut controller = ThemeController::new(Box::new(store));
        controller.set_theme(true);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_toggle_flips_and_notifies_subscribers() {
        let mut controller = ThemeController::in_memory(ThemeMode::Light);
        let mut rx = controller.subscribe();

        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Dark);

        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Light);
    }

    #[test]
    fn test_file_store_fresh_read_returns_last_value() {
        let temp = TempDir::new().unwrap();

        let mut controller = ThemeController::new(Box::new(FileThemeStore::new(temp.path())));
        assert!(!controller.is_dark());

        controller.set_theme(true);
        controller.set_theme(false);
        controller.set_theme(true);

        let fresh = FileThemeStore::new(temp.path());
        assert_eq!(fresh.load().unwrap(), Some(ThemeMode::Dark));

        let restarted = ThemeController::new(Box::new(fresh));
        assert!(restarted.is_dark());
    }

    #[test]
    fn test_file_store_unknown_value_reads_light() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("preferences.toml"), "theme = \"sepia\"\n").unwrap();

        let store = FileThemeStore::new(temp.path());
        assert_eq!(store.load().unwrap(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryThemeStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save(ThemeMode::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemeMode::Dark));
    }
}
