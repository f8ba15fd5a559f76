pub mod article;
pub mod category;
pub mod export;
pub mod price;
pub mod storage;
pub mod store;

pub use article::{Article, ArticleDraft, ArticleId};
pub use category::CategoryList;
pub use export::export_to_file;
pub use storage::CsvStorage;
pub use store::ArticleStore;
