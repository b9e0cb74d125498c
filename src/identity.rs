use std::{fmt, sync::OnceLock};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::SettingsStore;
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;
const LOG_TARGET: &str = "lovematch::identity";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque per-installation user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh random base-36 token of 5 or 6 characters.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(5..=6);
        let token = (0..len)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves the identity once per session, backed by the settings file when available.
pub struct IdentityProvider {
    store: Option<SettingsStore>,
    resolved: OnceLock<UserIdentity>,
}

impl IdentityProvider {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store: Some(store),
            resolved: OnceLock::new(),
        }
    }

    /// Provider with no backing storage; the identity lives only for this session.
    pub fn in_memory() -> Self {
        Self {
            store: None,
            resolved: OnceLock::new(),
        }
    }

    pub fn get_or_create(&self) -> UserIdentity {
        self.resolved.get_or_init(|| self.resolve()).clone()
    }

    fn resolve(&self) -> UserIdentity {
        let Some(store) = &self.store else {
            return UserIdentity::generate();
        };

        if let Some(saved) = store.user_id().filter(|id| !id.trim().is_empty()) {
            return UserIdentity::new(saved);
        }

        let identity = UserIdentity::generate();
        match store.set_user_id(identity.as_str()) {
            Ok(()) => log_info!("Created user identity {}", identity),
            Err(err) => log_warn!(
                "Could not persist user identity, using it for this session only: {err:#}"
            ),
        }
        identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SETTINGS_FILE_NAME;
    use tempfile::tempdir;

    #[test]
    fn generated_token_is_short_base36() {
        for _ in 0..200 {
            let id = UserIdentity::generate();
            let len = id.as_str().len();
            assert!((5..=6).contains(&len), "unexpected length {len}");
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn identity_is_stable_across_restarts() {
        let dir = tempdir().unwrap();

        let first = IdentityProvider::new(SettingsStore::in_dir(dir.path()).unwrap()).get_or_create();
        let second = IdentityProvider::new(SettingsStore::in_dir(dir.path()).unwrap()).get_or_create();

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_calls_return_same_identity() {
        let provider = IdentityProvider::in_memory();
        assert_eq!(provider.get_or_create(), provider.get_or_create());
    }

    #[test]
    fn saved_identity_is_never_regenerated() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::in_dir(dir.path()).unwrap();
        store.set_user_id("saved1").unwrap();

        let provider = IdentityProvider::new(SettingsStore::in_dir(dir.path()).unwrap());
        assert_eq!(provider.get_or_create().as_str(), "saved1");
    }

    #[test]
    fn clearing_storage_allows_a_new_identity() {
        let dir = tempdir().unwrap();
        let first = IdentityProvider::new(SettingsStore::in_dir(dir.path()).unwrap()).get_or_create();

        std::fs::remove_file(dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        let second = IdentityProvider::new(SettingsStore::in_dir(dir.path()).unwrap()).get_or_create();

        // Both are valid tokens; equality is possible but not required.
        assert!(!first.as_str().is_empty());
        assert!(!second.as_str().is_empty());
    }

    #[test]
    fn unwritable_storage_degrades_to_session_identity() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nope").join(SETTINGS_FILE_NAME)).unwrap();
        let provider = IdentityProvider::new(store);

        let id = provider.get_or_create();
        assert_eq!(provider.get_or_create(), id);
    }
}
