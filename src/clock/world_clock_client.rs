use crate::clock::date_layout::extract_year;
use crate::clock::date_time_record::DateTimeRecord;
use crate::clock::error::YearError;
use crate::config::ClientConfig;
use crate::constants::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use crate::error::ConstructionError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

/// A client for a world clock API that reports the current UTC date time as
/// JSON.
///
/// Each call performs exactly one GET request. Nothing is cached and failed
/// requests are not retried.
pub struct WorldClockClient {
    client: Client,
    api_url: String,
    user_agent: String,
}

impl WorldClockClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        WorldClockClient {
            client: Client::new(),
            api_url: api_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConstructionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(WorldClockClient {
            client: builder.build()?,
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches and decodes the world clock response.
    ///
    /// # Errors
    ///
    /// * [`YearError::Request`] if the request fails or the server answers
    ///   with a non-success status.
    /// * [`YearError::Decode`] if the body is not a JSON object.
    pub fn fetch_date_time_record(&self) -> Result<DateTimeRecord, YearError> {
        debug!("Requesting current date time from {}", self.api_url);

        let response = self
            .client
            .get(self.api_url.as_str())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .send()?
            .error_for_status()?;

        response.json::<DateTimeRecord>().map_err(body_error)
    }

    /// Returns the current year as reported by the `currentDateTime` field.
    ///
    /// The field may be formatted as `YYYY-MM-DD` or `DD.MM.YYYY`; see
    /// [`crate::DateLayout`] for how the two are told apart.
    pub fn what_is_year_now(&self) -> Result<i32, YearError> {
        let record = self.fetch_date_time_record()?;
        let date_str = record.current_date_time()?;
        let year = extract_year(date_str)?;
        debug!("World clock reports year {year}");
        Ok(year)
    }
}

impl Default for WorldClockClient {
    fn default() -> Self {
        WorldClockClient::new(DEFAULT_API_URL)
    }
}

/// Only a body that was read but failed to deserialize counts as a decode
/// error; a connection dropped while reading stays a request error.
fn body_error(err: reqwest::Error) -> YearError {
    if err.is_decode() {
        YearError::Decode(err)
    } else {
        YearError::Request(err)
    }
}

/// Asks the public world clock API for the current year.
pub fn what_is_year_now() -> Result<i32, YearError> {
    WorldClockClient::default().what_is_year_now()
}
