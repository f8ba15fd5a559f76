use crate::cli::listing::format_listing;
use crate::models::price::format_with_currency;
use crate::models::{ArticleDraft, ArticleStore, export_to_file};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

fn bar() -> colored::ColoredString {
    "┃".bright_magenta()
}

/// Maps user input onto the configured spelling of a category, ignoring case.
/// Unlisted names pass through unchanged so validation can reject them.
pub fn canonical_category(store: &ArticleStore, input: &str) -> String {
    let input = input.trim();
    store
        .categories()
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input))
        .unwrap_or(input)
        .to_string()
}

pub fn list_articles(store: &ArticleStore, currency: &str) {
    for line in format_listing(store, currency) {
        println!("{}", line);
    }
}

pub fn add_article(
    store: &mut ArticleStore,
    currency: &str,
    name: &str,
    category: &str,
    price: &str,
) -> Result<()> {
    let draft = ArticleDraft::new(name, canonical_category(store, category), price);
    let id = store.add(&draft)?;

    if let Some(article) = store.get(id) {
        println!(
            "{}  Added article {} with price {} in category {} [{}]",
            bar(),
            article.name.bright_white().bold(),
            format_with_currency(article.price, currency).bright_yellow(),
            article.category.bold(),
            id.short().yellow()
        );
    }
    Ok(())
}

pub fn edit_article(
    store: &mut ArticleStore,
    id_input: &str,
    name: &str,
    category: &str,
    price: &str,
) -> Result<()> {
    let id = store.resolve_id(id_input)?;
    let draft = ArticleDraft::new(name, canonical_category(store, category), price);
    store.update(id, &draft)?;
    println!("{}  Updated article {}", bar(), id.short().yellow());
    Ok(())
}

pub fn toggle_bought(store: &mut ArticleStore, id_input: &str) -> Result<()> {
    let id = store.resolve_id(id_input)?;
    let is_bought = store.toggle_bought(id)?;
    let name = store.get(id).map(|a| a.name.clone()).unwrap_or_default();
    let state = if is_bought {
        "bought".green()
    } else {
        "not bought".yellow()
    };
    println!("{}  {} marked as {}", bar(), name.bright_white(), state);
    Ok(())
}

pub fn remove_article(store: &mut ArticleStore, id_input: &str) -> Result<()> {
    let id = store.resolve_id(id_input)?;
    let removed = store.delete(id)?;
    println!("{}  Removed {}", bar(), removed.name.bright_white());
    Ok(())
}

pub fn clear_articles(store: &mut ArticleStore) -> Result<()> {
    let count = store.len();
    store.clear_all()?;
    println!(
        "{}  {} ({} removed)",
        bar(),
        "All articles have been cleared!".green(),
        count
    );
    Ok(())
}

pub fn show_total(store: &ArticleStore, currency: &str) {
    println!(
        "{}  {} {}",
        bar(),
        "Total:".bold(),
        format_with_currency(store.total(), currency).bright_yellow().bold()
    );
}

pub fn list_categories(store: &ArticleStore) {
    for (idx, category) in store.categories().iter().enumerate() {
        println!(
            "{}  {:>2}. {}",
            bar(),
            (idx + 1).to_string().yellow(),
            category.bright_white()
        );
    }
}

pub fn export_articles(store: &ArticleStore, currency: &str, path: &Path) -> Result<()> {
    let count = export_to_file(store, currency, path)?;
    println!(
        "{}  Exported {} articles to {}",
        bar(),
        count,
        path.display().to_string().bright_white()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryList, CsvStorage};
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> ArticleStore {
        let storage = CsvStorage::new(dir.path().join("articles.csv"));
        ArticleStore::open(storage, CategoryList::default()).unwrap()
    }

    #[test]
    fn test_category_matching_ignores_case() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert_eq!(canonical_category(&store, "milk PRODUCTS"), "Milk products");
        assert_eq!(canonical_category(&store, " Toys "), "Toys");
    }

    #[test]
    fn test_commands_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        add_article(&mut store, "EUR", "Coffee", "hot drinks", "5,99").unwrap();
        let short = store.articles()[0].id.short();

        toggle_bought(&mut store, &short).unwrap();
        edit_article(&mut store, &short, "Decaf", "Hot Drinks", "6").unwrap();

        let reopened = open_store(&dir);
        let article = &reopened.articles()[0];
        assert_eq!(article.name, "Decaf");
        assert_eq!(article.price, 6.0);
        assert!(article.is_bought);

        remove_article(&mut store, &short).unwrap();
        assert!(open_store(&dir).is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let err = add_article(&mut store, "EUR", "Lego", "Toys", "10").unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        add_article(&mut store, "EUR", "Rice", "Grains & Pasta", "").unwrap();
        clear_articles(&mut store).unwrap();
        assert!(open_store(&dir).is_empty());
    }
}
