//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shopfront_cache::KvStore;
use shopfront_cart::cart::PersistOutcome;
use tracing::{debug, warn};

use crate::SessionError;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "themeMode";

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(SessionError::UnknownThemeMode(s.to_string())),
        }
    }
}

/// Persisted theme preference.
///
/// Stored as the bare string `light` or `dark`, not JSON.
pub struct ThemeStore<S> {
    store: S,
    mode: ThemeMode,
    last_persist: PersistOutcome,
}

impl<S: KvStore> ThemeStore<S> {
    /// Read the stored preference, falling back to `default_mode`.
    pub fn open(store: S, default_mode: ThemeMode) -> Self {
        let mode = match store.get_raw(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored theme mode");
                default_mode
            }),
            Ok(None) => default_mode,
            Err(e) => {
                warn!(error = %e, "theme preference unavailable");
                default_mode
            }
        };

        Self {
            store,
            mode,
            last_persist: PersistOutcome::NotAttempted,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Set and persist the mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.last_persist = match self.store.set_raw(THEME_KEY, mode.as_str()) {
            Ok(()) => PersistOutcome::Saved,
            Err(e) => {
                warn!(error = %e, "failed to persist theme mode");
                PersistOutcome::Failed(e.to_string())
            }
        };
        debug!(mode = %mode, "theme mode set");
    }

    /// Flip between light and dark; returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.set_mode(next);
        next
    }

    /// How the last change was persisted.
    pub fn last_persist(&self) -> &PersistOutcome {
        &self.last_persist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_cache::MemoryStore;

    #[test]
    fn test_parse_theme_mode() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_defaults_when_unset() {
        let theme = ThemeStore::open(MemoryStore::new(), ThemeMode::Dark);
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists_plain_string() {
        let store = MemoryStore::new();
        let mut theme = ThemeStore::open(store.clone(), ThemeMode::Light);

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(store.get_raw(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(theme.last_persist(), &PersistOutcome::Saved);

        let reopened = ThemeStore::open(store, ThemeMode::Light);
        assert_eq!(reopened.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let store = MemoryStore::new();
        store.set_raw(THEME_KEY, "\"dark\"").unwrap();

        let theme = ThemeStore::open(store, ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_failed_write_still_switches() {
        let store = MemoryStore::new();
        let mut theme = ThemeStore::open(store.clone(), ThemeMode::Light);
        store.reject_writes(true);

        theme.toggle();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert!(theme.last_persist().is_failure());
    }
}
