use crate::error::{Result, StoreError};
use crate::models::{Article, ArticleId};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const HEADER: [&str; 5] = ["id", "name", "category", "price", "is_bought"];

/// Column name written by older versions of the list.
const LEGACY_BOUGHT_COLUMN: &str = "is_bougth";

/// CSV snapshot of the whole article collection.
///
/// Every save rewrites the file from scratch through a sibling temp file so a
/// crash mid-write never leaves a truncated list behind.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or empty files load as an empty collection.
    pub fn load(&self) -> Result<Vec<Article>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let name_col = column("name")
            .ok_or_else(|| StoreError::Format("missing 'name' column".to_string()))?;
        let category_col = column("category")
            .ok_or_else(|| StoreError::Format("missing 'category' column".to_string()))?;
        let id_col = column("id");
        let price_col = column("price");
        let bought_col = column("is_bought").or_else(|| column(LEGACY_BOUGHT_COLUMN));

        let mut seen = HashSet::new();
        let mut articles = Vec::new();

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

            let mut id = parse_id(field(id_col)).unwrap_or_default();
            if !seen.insert(id) {
                id = ArticleId::new();
                seen.insert(id);
            }

            let price = parse_stored_price(field(price_col)).ok_or_else(|| {
                StoreError::Format(format!(
                    "row {}: invalid price '{}'",
                    row + 1,
                    field(price_col)
                ))
            })?;

            let is_bought = parse_bool(field(bought_col)).ok_or_else(|| {
                StoreError::Format(format!(
                    "row {}: invalid bought flag '{}'",
                    row + 1,
                    field(bought_col)
                ))
            })?;

            articles.push(Article {
                id,
                name: field(Some(name_col)).to_string(),
                category: field(Some(category_col)).to_string(),
                price,
                is_bought,
            });
        }

        Ok(articles)
    }

    pub fn save(&self, articles: &[Article]) -> Result<()> {
        self.write_atomically(articles)
    }

    /// Resets the file to the header row only.
    pub fn clear(&self) -> Result<()> {
        self.write_atomically(&[])
    }

    fn write_atomically(&self, articles: &[Article]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        {
            let mut writer = csv::Writer::from_path(&tmp_path)?;
            writer.write_record(HEADER)?;
            for article in articles {
                writer.write_record([
                    article.id.to_string(),
                    article.name.clone(),
                    article.category.clone(),
                    article.price.to_string(),
                    article.is_bought.to_string(),
                ])?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "articles.csv".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn parse_id(value: &str) -> Option<ArticleId> {
    Uuid::parse_str(value).ok().map(ArticleId)
}

fn parse_stored_price(value: &str) -> Option<f64> {
    if value.is_empty() {
        return Some(0.0);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "false" | "0" => Some(false),
        "true" | "1" => Some(true),
        _ => None,
    }
}
