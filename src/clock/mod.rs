pub mod date_layout;
pub use date_layout::{DateLayout, extract_year};
pub mod date_time_record;
pub use date_time_record::DateTimeRecord;
pub mod error;
mod world_clock_client;
pub use world_clock_client::{WorldClockClient, what_is_year_now};
