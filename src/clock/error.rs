use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YearError {
    #[error("Missing key '{key}' in world clock response")]
    MissingKey { key: String },
    #[error("Value of '{key}' is not a string")]
    UnexpectedType { key: String },
    #[error("Invalid format: '{0}' is neither YYYY-MM-DD nor DD.MM.YYYY")]
    InvalidFormat(String),
    #[error("Could not parse year from '{year}': {source}")]
    NumericParse {
        year: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Request to world clock API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Could not decode world clock response as a JSON object: {0}")]
    Decode(#[source] reqwest::Error),
}
