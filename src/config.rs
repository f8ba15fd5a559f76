use crate::error::{Result, StoreError};
use crate::models::CategoryList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_ENV: &str = "SHOPLIST_DATA";
pub const CONFIG_ENV: &str = "SHOPLIST_CONFIG";

fn default_currency() -> String {
    String::from("EUR")
}

/// User configuration, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label printed after every amount
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Where the article list is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Selectable categories, in display order
    #[serde(default)]
    pub categories: CategoryList,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            data_file: None,
            categories: CategoryList::default(),
        }
    }
}

impl Config {
    /// Load config from `SHOPLIST_CONFIG` or the default location
    pub fn load() -> Result<Self> {
        let path = match std::env::var(CONFIG_ENV) {
            Ok(path) => expand_tilde(&path),
            Err(_) => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.categories = CategoryList::new(config.categories.iter().map(String::from).collect());

        if config.categories.is_empty() {
            return Err(StoreError::Config(format!(
                "{} defines an empty category list",
                path.display()
            )));
        }

        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shoplist").join("config.toml"))
            .ok_or_else(|| StoreError::Config("Could not determine config directory".to_string()))
    }

    /// Resolve the data file path based on priority:
    /// 1. `SHOPLIST_DATA` environment variable
    /// 2. `data_file` from the config file
    /// 3. XDG data directory
    pub fn data_path(&self) -> Result<PathBuf> {
        self.data_path_with(std::env::var(DATA_ENV).ok().as_deref())
    }

    fn data_path_with(&self, env_override: Option<&str>) -> Result<PathBuf> {
        if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
            return Ok(expand_tilde(path));
        }

        if let Some(path) = &self.data_file {
            return Ok(expand_tilde(&path.to_string_lossy()));
        }

        dirs::data_dir()
            .map(|dir| dir.join("shoplist").join("articles.csv"))
            .ok_or_else(|| StoreError::Config("Could not determine data directory".to_string()))
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let config = Config::load_from(&dir.path().join("config.toml"))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.categories.len(), 19);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "categories = [\"Produce\", \"Bakery\", \"Produce\", \"Other\"]\n",
        )?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.currency, "EUR");
        assert_eq!(
            config.categories.iter().collect::<Vec<_>>(),
            vec!["Produce", "Bakery", "Other"]
        );
        Ok(())
    }

    #[test]
    fn test_empty_category_list_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "categories = []\n")?;
        assert!(matches!(Config::load_from(&path), Err(StoreError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_reported() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "currency = \n")?;
        assert!(matches!(Config::load_from(&path), Err(StoreError::Toml(_))));
        Ok(())
    }

    #[test]
    fn test_data_path_priority() -> Result<()> {
        let mut config = Config {
            currency: "CHF".to_string(),
            data_file: Some(PathBuf::from("/tmp/list/articles.csv")),
            categories: CategoryList::default(),
        };

        assert_eq!(
            config.data_path_with(Some("/var/shop.csv"))?,
            PathBuf::from("/var/shop.csv")
        );
        assert_eq!(
            config.data_path_with(None)?,
            PathBuf::from("/tmp/list/articles.csv")
        );

        config.data_file = None;
        let fallback = config.data_path_with(Some("  "))?;
        assert!(fallback.ends_with("shoplist/articles.csv"));
        Ok(())
    }
}
