use crate::error::ValidationError;
use crate::models::category::CategoryList;
use crate::models::price::parse_price;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of an article, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to address an article from the CLI.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub is_bought: bool,
}

impl Article {
    pub fn new(name: String, category: String, price: f64) -> Self {
        Self {
            id: ArticleId::new(),
            name,
            category,
            price,
            is_bought: false,
        }
    }

    pub fn toggle_bought(&mut self) -> bool {
        self.is_bought = !self.is_bought;
        self.is_bought
    }
}

/// Raw form input for creating or editing an article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDraft {
    pub name: String,
    pub category: String,
    pub price: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl ArticleDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
        }
    }

    /// Prefills a draft from an existing article, price in comma form.
    pub fn from_article(article: &Article) -> Self {
        Self {
            name: article.name.clone(),
            category: article.category.clone(),
            price: crate::models::price::format_price_input(article.price),
        }
    }

    pub fn validate(&self, categories: &CategoryList) -> Result<ValidDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if categories.rank(&self.category).is_none() {
            return Err(ValidationError::UnknownCategory(self.category.clone()));
        }

        let price = parse_price(&self.price)?;

        Ok(ValidDraft {
            name: name.to_string(),
            category: self.category.clone(),
            price,
        })
    }
}
