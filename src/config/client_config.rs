use crate::constants::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Settings for [`crate::WorldClockClient`].
///
/// Every field is optional in a config file; absent fields fall back to the
/// public world clock endpoint and the reqwest defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClientConfig {
    #[validate(url)]
    pub api_url: String,
    #[validate(length(min = 1))]
    pub user_agent: String,
    #[validate(range(min = 1))]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}
