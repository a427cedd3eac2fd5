//! Backend Configuration
//!
//! Connection settings for the hosted table, merged from (later overrides earlier):
//! 1. Defaults
//! 2. `grocery.toml` in the app config directory (if it exists)
//! 3. Environment variables prefixed `GROCERY_` (e.g. `GROCERY_SUPABASE_URL`)

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

pub const CONFIG_FILENAME: &str = "grocery.toml";
pub const ENV_PREFIX: &str = "GROCERY_";
pub const DEFAULT_TABLE: &str = "Groceries";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub supabase_url: String,
    /// Anon/public API key
    pub supabase_key: String,
    pub table: String,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_key: String::new(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl GroceryConfig {
    /// Load from defaults, the optional file under `config_dir`, and the environment
    pub fn load(config_dir: Option<&Path>) -> DomainResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(GroceryConfig::default()));

        if let Some(dir) = config_dir {
            let path = dir.join(CONFIG_FILENAME);
            if path.exists() {
                log::info!("Loading config from {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: GroceryConfig = figment
            .extract()
            .map_err(|e| DomainError::Config(e.to_string()))?;
        config.validated()
    }

    fn validated(mut self) -> DomainResult<Self> {
        self.supabase_url = self.supabase_url.trim().trim_end_matches('/').to_string();
        if self.supabase_url.is_empty() {
            return Err(DomainError::NotConfigured(format!(
                "set {}SUPABASE_URL or supabase_url in {}",
                ENV_PREFIX, CONFIG_FILENAME
            )));
        }
        if self.supabase_key.trim().is_empty() {
            return Err(DomainError::NotConfigured(format!(
                "set {}SUPABASE_KEY or supabase_key in {}",
                ENV_PREFIX, CONFIG_FILENAME
            )));
        }
        if self.table.trim().is_empty() {
            return Err(DomainError::Config("table name is empty".to_string()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_env_only() {
        Jail::expect_with(|jail| {
            jail.set_env("GROCERY_SUPABASE_URL", "https://demo.supabase.co/");
            jail.set_env("GROCERY_SUPABASE_KEY", "anon-key");

            let config = GroceryConfig::load(None).expect("config should load");
            assert_eq!(config.supabase_url, "https://demo.supabase.co");
            assert_eq!(config.supabase_key, "anon-key");
            assert_eq!(config.table, DEFAULT_TABLE);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILENAME,
                r#"
                    supabase_url = "https://file.supabase.co"
                    supabase_key = "file-key"
                    table = "Pantry"
                "#,
            )?;
            jail.set_env("GROCERY_SUPABASE_KEY", "env-key");

            let config = GroceryConfig::load(Some(jail.directory())).expect("config should load");
            assert_eq!(config.supabase_url, "https://file.supabase.co");
            assert_eq!(config.supabase_key, "env-key");
            assert_eq!(config.table, "Pantry");
            Ok(())
        });
    }

    #[test]
    fn test_missing_url_is_not_configured() {
        Jail::expect_with(|jail| {
            jail.set_env("GROCERY_SUPABASE_KEY", "anon-key");

            let err = GroceryConfig::load(None).unwrap_err();
            assert!(matches!(err, DomainError::NotConfigured(_)));
            Ok(())
        });
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        Jail::expect_with(|jail| {
            jail.set_env("GROCERY_SUPABASE_URL", "https://demo.supabase.co");

            let err = GroceryConfig::load(None).unwrap_err();
            assert!(err.to_string().contains("SUPABASE_KEY"));
            Ok(())
        });
    }
}
