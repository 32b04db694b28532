pub mod clock;
pub use clock::{DateLayout, DateTimeRecord, WorldClockClient, extract_year, what_is_year_now};
pub use clock::error::YearError;
pub mod config;
mod constants;
pub use constants::DEFAULT_API_URL;
pub mod error;
#[cfg(test)]
mod test_utils;
