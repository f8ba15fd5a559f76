use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Article, ArticleStore};

/// JSON snapshot of the list, written by `shoplist export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub currency: String,
    pub total: f64,
    pub remaining_total: f64,
    pub articles: Vec<Article>,
}

impl ExportData {
    pub fn from_store(store: &ArticleStore, currency: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            currency: currency.to_string(),
            total: store.total(),
            remaining_total: store.remaining_total(),
            articles: store.articles().to_vec(),
        }
    }
}

/// Writes the export file and returns the number of articles written.
pub fn export_to_file(store: &ArticleStore, currency: &str, path: &Path) -> Result<usize> {
    let data = ExportData::from_store(store, currency);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&data)?;
    fs::write(path, json)?;
    Ok(data.articles.len())
}
