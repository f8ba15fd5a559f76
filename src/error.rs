use thiserror::Error;

/// Rejected user input. The collection and the data file are left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please input a valid article name")]
    EmptyName,

    #[error("Please input a valid price using a comma as the decimal separator: '{0}'")]
    InvalidPrice(String),

    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Article id '{0}' is ambiguous, use more characters")]
    AmbiguousId(String),

    #[error("Malformed data file: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_into_store_error() {
        let err: StoreError = ValidationError::EmptyName.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please input a valid article name");
    }

    #[test]
    fn test_io_error_is_not_validation() {
        let err: StoreError = std::io::Error::other("disk full").into();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("disk full"));
    }
}
