//! Category ordering and grouping.
//!
//! The configured category list decides both which categories can be picked
//! and the order in which articles are listed. Articles whose category is not
//! in the list (e.g. after the list was edited) are kept and sorted after all
//! known categories.

use crate::models::Article;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORIES: [&str; 19] = [
    "Recipes",
    "Produce",
    "Hot Drinks",
    "Nuts",
    "Snacks",
    "Beverages",
    "Bakery",
    "Grains & Pasta",
    "Sauces and condiments",
    "Milk products",
    "Spices & Herbs",
    "Meat",
    "Ready-made sauces",
    "Canned Goods",
    "Frozen Foods",
    "Fish",
    "Personal Care",
    "Household & Cleaning Supplies",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryList(Vec<String>);

impl Default for CategoryList {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl CategoryList {
    /// Builds a list, dropping blanks and repeated names.
    pub fn new(categories: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(categories.len());
        for category in categories {
            let category = category.trim().to_string();
            if !category.is_empty() && !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self(unique)
    }

    pub fn rank(&self, category: &str) -> Option<usize> {
        self.0.iter().position(|c| c == category)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn sort_key(&self, category: &str) -> usize {
        self.rank(category).unwrap_or(self.0.len())
    }
}

/// Stable sort by category rank. Unknown categories go last.
pub fn sort_articles(articles: &mut [Article], categories: &CategoryList) {
    articles.sort_by_key(|article| categories.sort_key(&article.category));
}

/// A display section: one category and its articles in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub articles: Vec<&'a Article>,
    pub known: bool,
}

impl CategoryGroup<'_> {
    pub fn subtotal(&self) -> f64 {
        self.articles.iter().map(|a| a.price).sum()
    }
}

/// Partitions articles into non-empty groups: listed categories first, in
/// list order, then unlisted ones in order of first appearance.
pub fn group_by_category<'a>(
    articles: &'a [Article],
    categories: &'a CategoryList,
) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = categories
        .iter()
        .map(|category| CategoryGroup {
            category,
            articles: Vec::new(),
            known: true,
        })
        .collect();

    for article in articles {
        match categories.rank(&article.category) {
            Some(rank) => groups[rank].articles.push(article),
            None => match groups
                .iter()
                .position(|g| !g.known && g.category == article.category)
            {
                Some(index) => groups[index].articles.push(article),
                None => groups.push(CategoryGroup {
                    category: &article.category,
                    articles: vec![article],
                    known: false,
                }),
            },
        }
    }

    groups.retain(|g| !g.articles.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(name: &str, category: &str) -> Article {
        Article::new(name.to_string(), category.to_string(), 1.0)
    }

    fn names(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_default_list_order() {
        let categories = CategoryList::default();
        assert_eq!(categories.len(), 19);
        assert_eq!(categories.rank("Recipes"), Some(0));
        assert_eq!(categories.rank("Other"), Some(18));
        assert!(categories.rank("Bakery") < categories.rank("Milk products"));
    }

    #[test]
    fn test_new_drops_blanks_and_duplicates() {
        let categories = CategoryList::new(vec![
            "Fruit".into(),
            " ".into(),
            "Veg ".into(),
            "Fruit".into(),
        ]);
        assert_eq!(categories.iter().collect::<Vec<_>>(), vec!["Fruit", "Veg"]);
    }

    #[test]
    fn test_sort_is_stable_within_category() {
        let categories = CategoryList::default();
        let mut articles = vec![
            article("Cheese", "Milk products"),
            article("Rolls", "Bakery"),
            article("Yoghurt", "Milk products"),
            article("Bread", "Bakery"),
        ];
        sort_articles(&mut articles, &categories);
        assert_eq!(names(&articles), vec!["Rolls", "Bread", "Cheese", "Yoghurt"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let categories = CategoryList::default();
        let mut articles = vec![
            article("Salmon", "Fish"),
            article("Apples", "Produce"),
            article("Crisps", "Snacks"),
            article("Pears", "Produce"),
        ];
        sort_articles(&mut articles, &categories);
        let once = articles.clone();
        sort_articles(&mut articles, &categories);
        assert_eq!(articles, once);
    }

    #[test]
    fn test_unknown_categories_sort_last() {
        let categories = CategoryList::default();
        let mut articles = vec![
            article("Lego", "Toys"),
            article("Soap", "Other"),
            article("Kite", "Garden"),
            article("Tea", "Hot Drinks"),
        ];
        sort_articles(&mut articles, &categories);
        assert_eq!(names(&articles), vec!["Tea", "Soap", "Lego", "Kite"]);
    }

    #[test]
    fn test_groups_follow_list_order_and_skip_empty() {
        let categories = CategoryList::default();
        let articles = vec![
            article("Milk", "Milk products"),
            article("Toy", "Toys"),
            article("Bread", "Bakery"),
            article("Butter", "Milk products"),
        ];
        let groups = group_by_category(&articles, &categories);
        let summary: Vec<(&str, usize, bool)> = groups
            .iter()
            .map(|g| (g.category, g.articles.len(), g.known))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Bakery", 1, true),
                ("Milk products", 2, true),
                ("Toys", 1, false),
            ]
        );
        assert_eq!(groups[1].subtotal(), 2.0);
    }
}
