//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_cart::cart::DEFAULT_CART_KEY;

use crate::theme::ThemeMode;
use crate::SessionError;

/// Integration policy for the client-state stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Cart persistence.
    #[serde(default)]
    pub cart: CartConfig,

    /// How the cart reacts to authentication state.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Theme defaults.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file, in the format implied by its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check values that parse but cannot work.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.cart.storage_key.trim().is_empty() {
            return Err(SessionError::InvalidConfig(
                "cart.storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Cart persistence configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Storage key of the cart snapshot (default: `cart`).
    #[serde(default = "default_cart_key")]
    pub storage_key: String,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_cart_key(),
        }
    }
}

/// Authentication policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Refuse add-to-cart for signed-out visitors (default: true).
    #[serde(default = "default_true")]
    pub require_login_for_cart: bool,

    /// Empty the cart when the user logs out (default: true).
    #[serde(default = "default_true")]
    pub clear_cart_on_logout: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            require_login_for_cart: true,
            clear_cart_on_logout: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Mode used when no preference is stored (default: light).
    #[serde(default)]
    pub default_mode: ThemeMode,
}
