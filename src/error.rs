use config::ConfigError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
