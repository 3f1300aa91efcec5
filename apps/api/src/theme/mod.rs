//! Theme preference: a single dark-mode flag stored under the `darkMode` key.
//!
//! Read once at startup, persisted on every change. A missing or unreadable file
//! means the light theme.

pub mod handlers;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub dark_mode: bool,
}

/// Process-wide theme flag with file-backed persistence.
#[derive(Clone)]
pub struct ThemeStore {
    path: Arc<PathBuf>,
    current: Arc<Mutex<ThemePreference>>,
}

impl ThemeStore {
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let preference = match read_preference(&path).await {
            Ok(Some(pref)) => {
                info!("Theme preference loaded (dark_mode={})", pref.dark_mode);
                pref
            }
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                warn!(
                    "Ignoring unreadable theme preference at {}: {e}",
                    path.display()
                );
                ThemePreference::default()
            }
        };

        Self {
            path: Arc::new(path),
            current: Arc::new(Mutex::new(preference)),
        }
    }

    pub async fn get(&self) -> ThemePreference {
        *self.current.lock().await
    }

    /// Persists first; the in-memory value only changes if the write succeeds.
    pub async fn set(&self, dark_mode: bool) -> Result<ThemePreference, ThemeError> {
        let mut current = self.current.lock().await;
        let next = ThemePreference { dark_mode };
        write_preference(&self.path, next).await?;
        *current = next;
        Ok(next)
    }

    pub async fn toggle(&self) -> Result<ThemePreference, ThemeError> {
        let mut current = self.current.lock().await;
        let next = ThemePreference {
            dark_mode: !current.dark_mode,
        };
        write_preference(&self.path, next).await?;
        *current = next;
        Ok(next)
    }
}

async fn read_preference(path: &Path) -> Result<Option<ThemePreference>, ThemeError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_preference(path: &Path, preference: ThemePreference) -> Result<(), ThemeError> {
    let bytes = serde_json::to_vec(&preference)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::load(dir.path().join("theme.json")).await;
        assert!(!store.get().await.dark_mode);
    }

    #[tokio::test]
    async fn test_corrupt_file_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = ThemeStore::load(&path).await;
        assert!(!store.get().await.dark_mode);
    }

    #[tokio::test]
    async fn test_toggle_persists_under_dark_mode_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        let store = ThemeStore::load(&path).await;

        assert!(store.toggle().await.unwrap().dark_mode);

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["darkMode"], true);

        let reloaded = ThemeStore::load(&path).await;
        assert!(reloaded.get().await.dark_mode);
    }

    #[tokio::test]
    async fn test_set_and_toggle_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::load(dir.path().join("theme.json")).await;

        assert!(store.set(true).await.unwrap().dark_mode);
        assert!(!store.toggle().await.unwrap().dark_mode);
        assert!(!store.get().await.dark_mode);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::load(dir.path().join("missing-dir").join("theme.json")).await;

        assert!(store.set(true).await.is_err());
        assert!(!store.get().await.dark_mode);
    }
}
