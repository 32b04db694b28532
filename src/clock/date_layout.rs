use crate::clock::error::YearError;
use log::debug;
use std::ops::Range;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The two layouts the world clock API is known to use for `currentDateTime`.
///
/// Detection looks at a single separator character at a fixed offset, trying
/// the variants in declaration order. Offsets count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DateLayout {
    #[strum(serialize = "YYYY-MM-DD")]
    Ymd,
    #[strum(serialize = "DD.MM.YYYY")]
    Dmy,
}

impl DateLayout {
    pub fn separator(&self) -> char {
        match self {
            DateLayout::Ymd => '-',
            DateLayout::Dmy => '.',
        }
    }

    pub fn separator_index(&self) -> usize {
        match self {
            DateLayout::Ymd => 4,
            DateLayout::Dmy => 5,
        }
    }

    fn year_range(&self) -> Range<usize> {
        match self {
            DateLayout::Ymd => 0..4,
            DateLayout::Dmy => 6..10,
        }
    }

    fn matches(&self, date_str: &str) -> bool {
        date_str.chars().nth(self.separator_index()) == Some(self.separator())
    }

    /// Finds the first layout whose separator sits at its expected offset.
    ///
    /// Strings that match neither layout, including strings too short to
    /// hold a separator, are rejected with [`YearError::InvalidFormat`].
    pub fn detect(date_str: &str) -> Result<Self, YearError> {
        DateLayout::iter()
            .find(|layout| layout.matches(date_str))
            .ok_or_else(|| YearError::InvalidFormat(date_str.to_string()))
    }

    /// Cuts the year characters out of `date_str`. The slice is clamped to
    /// the end of the string, so a truncated date yields a shorter result.
    pub fn year_substring(&self, date_str: &str) -> String {
        let range = self.year_range();
        date_str.chars().skip(range.start).take(range.len()).collect()
    }

    pub fn parse_year(&self, date_str: &str) -> Result<i32, YearError> {
        let year = self.year_substring(date_str);
        year.parse::<i32>()
            .map_err(|source| YearError::NumericParse { year, source })
    }
}

/// Extracts the year from a `YYYY-MM-DD` or `DD.MM.YYYY` formatted string.
pub fn extract_year(date_str: &str) -> Result<i32, YearError> {
    let layout = DateLayout::detect(date_str)?;
    debug!("Detected date layout {layout} for '{date_str}'");
    layout.parse_year(date_str)
}
