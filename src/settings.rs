use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct ClientSettings {
    #[serde(default)]
    user_id: Option<String>,
}

/// Small JSON key-value file that survives restarts.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<ClientSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            // A corrupt file is treated as empty rather than blocking startup.
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            ClientSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn in_dir(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create settings dir {}", dir.display()))?;
        Self::new(dir.join(SETTINGS_FILE_NAME))
    }

    pub fn user_id(&self) -> Option<String> {
        self.read().user_id.clone()
    }

    pub fn set_user_id(&self, user_id: &str) -> Result<()> {
        let mut guard = self.write();
        let previous = guard.user_id.replace(user_id.to_string());
        if let Err(err) = self.persist(&guard) {
            guard.user_id = previous;
            return Err(err);
        }
        Ok(())
    }

    fn persist(&self, data: &ClientSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, ClientSettings> {
        match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClientSettings> {
        match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn user_id_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::in_dir(dir.path()).unwrap();
        assert_eq!(store.user_id(), None);

        store.set_user_id("k3x9q").unwrap();

        let reopened = SettingsStore::in_dir(dir.path()).unwrap();
        assert_eq!(reopened.user_id().as_deref(), Some("k3x9q"));
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.user_id(), None);
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        // Parent directory does not exist, so the write fails.
        let store = SettingsStore::new(dir.path().join("missing").join(SETTINGS_FILE_NAME)).unwrap();

        assert!(store.set_user_id("abc12").is_err());
        assert_eq!(store.user_id(), None);
    }
}
