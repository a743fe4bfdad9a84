//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("Failed to compile date regex")
});

/// A contact's birthday, parsed from `DD.MM.YYYY` text.
///
/// The date is stored as a [`chrono::NaiveDate`] rather than text so the
/// upcoming-birthday computation can do real calendar arithmetic on it.
/// Validation happens in two stages: the text must match the `DD.MM.YYYY`
/// shape, and the day/month/year triple must name an existing Gregorian
/// calendar date.
///
/// # Example
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::parse("29.02.2020").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2020");
/// assert!(Birthday::parse("29.02.2021").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the text does not
    /// match the `DD.MM.YYYY` shape, and `ValidationError::InvalidDate` if
    /// the shape is right but the date does not exist (e.g. `30.02.2021`).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let caps = DATE_REGEX
            .captures(raw)
            .ok_or_else(|| ValidationError::InvalidDateFormat(raw.to_string()))?;

        // Two- and four-digit captures always fit in u32/i32.
        let day: u32 = caps[1]
            .parse()
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))?;
        let year: i32 = caps[3]
            .parse()
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The month of the birthday (1..=12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day within the month (1..=31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Birthday::parse(s)
    }
}

// Serde support - serialize as DD.MM.YYYY text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from text with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - renders back as DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}
