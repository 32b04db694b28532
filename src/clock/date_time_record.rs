use crate::clock::error::YearError;
use crate::constants::CURRENT_DATE_TIME_KEY;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A decoded world clock response. Only `currentDateTime` is interpreted,
/// every other field is kept as an opaque JSON value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DateTimeRecord {
    fields: Map<String, Value>,
}

impl DateTimeRecord {
    /// Raw access to the other response fields, e.g. `utcOffset` or
    /// `timeZoneName`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn current_date_time(&self) -> Result<&str, YearError> {
        match self.fields.get(CURRENT_DATE_TIME_KEY) {
            Some(Value::String(date_str)) => Ok(date_str.as_str()),
            Some(_) => Err(YearError::UnexpectedType {
                key: CURRENT_DATE_TIME_KEY.to_string(),
            }),
            None => Err(YearError::MissingKey {
                key: CURRENT_DATE_TIME_KEY.to_string(),
            }),
        }
    }
}
