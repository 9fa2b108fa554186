use crate::core::product::Product;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_currency() -> String {
    "R$".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Prefix used when displaying monetary values.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Products registered when the store is created.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency: default_currency(),
            products: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Loads `path` when given. Without a path the default location is used
    /// if a file exists there, otherwise built-in defaults apply.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let default_path = Self::default_config_path()?;
                if default_path.exists() {
                    Self::load()
                } else {
                    debug!(
                        "No config at {}, using defaults",
                        default_path.display()
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "stockr", "stockr")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let mut config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config.products = config.validate_products()?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Runs seed products through the same checks as products typed into the
    /// form and returns them in their validated (trimmed) form.
    fn validate_products(&self) -> Result<Vec<Product>> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, product)| {
                product
                    .to_draft()
                    .validate()
                    .with_context(|| format!("Invalid seed product #{} ({:?})", i + 1, product.name))
            })
            .collect()
    }
}
