//! The in-memory article collection and its mutations.
//!
//! Each mutation works on a copy: validate, change, re-sort, save the whole
//! copy, and only then replace the live collection. A failed save leaves the
//! collection exactly as it was.

use crate::error::{Result, StoreError};
use crate::models::category::{CategoryGroup, CategoryList, group_by_category, sort_articles};
use crate::models::{Article, ArticleDraft, ArticleId, CsvStorage};

#[derive(Debug)]
pub struct ArticleStore {
    articles: Vec<Article>,
    categories: CategoryList,
    storage: CsvStorage,
}

impl ArticleStore {
    /// Loads the persisted collection and puts it in category order.
    pub fn open(storage: CsvStorage, categories: CategoryList) -> Result<Self> {
        let mut articles = storage.load()?;
        sort_articles(&mut articles, &categories);
        Ok(Self {
            articles,
            categories,
            storage,
        })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn storage(&self) -> &CsvStorage {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(&self.articles, &self.categories)
    }

    pub fn total(&self) -> f64 {
        self.articles.iter().map(|a| a.price).sum()
    }

    /// Sum over the articles that still have to be bought.
    pub fn remaining_total(&self) -> f64 {
        self.articles
            .iter()
            .filter(|a| !a.is_bought)
            .map(|a| a.price)
            .sum()
    }

    pub fn add(&mut self, draft: &ArticleDraft) -> Result<ArticleId> {
        let valid = draft.validate(&self.categories)?;
        let article = Article::new(valid.name, valid.category, valid.price);
        let id = article.id;

        let mut next = self.articles.clone();
        next.push(article);
        self.commit(next)?;
        Ok(id)
    }

    pub fn update(&mut self, id: ArticleId, draft: &ArticleDraft) -> Result<()> {
        let valid = draft.validate(&self.categories)?;

        let mut next = self.articles.clone();
        let article = find_mut(&mut next, id)?;
        article.name = valid.name;
        article.category = valid.category;
        article.price = valid.price;
        self.commit(next)
    }

    /// Flips the bought flag and returns its new value.
    pub fn toggle_bought(&mut self, id: ArticleId) -> Result<bool> {
        let mut next = self.articles.clone();
        let is_bought = find_mut(&mut next, id)?.toggle_bought();
        self.commit(next)?;
        Ok(is_bought)
    }

    pub fn delete(&mut self, id: ArticleId) -> Result<Article> {
        let index = self
            .articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut next = self.articles.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.articles.clear();
        Ok(())
    }

    /// Resolves a full id or a unique prefix of one (as printed by `list`).
    pub fn resolve_id(&self, input: &str) -> Result<ArticleId> {
        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(StoreError::NotFound(input.to_string()));
        }

        let mut matches = self
            .articles
            .iter()
            .filter(|a| a.id.to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(article), None) => Ok(article.id),
            (Some(_), Some(_)) => Err(StoreError::AmbiguousId(input.to_string())),
            (None, _) => Err(StoreError::NotFound(input.to_string())),
        }
    }

    fn commit(&mut self, mut next: Vec<Article>) -> Result<()> {
        sort_articles(&mut next, &self.categories);
        self.storage.save(&next)?;
        self.articles = next;
        Ok(())
    }
}

fn find_mut(articles: &mut [Article], id: ArticleId) -> Result<&mut Article> {
    articles
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}
