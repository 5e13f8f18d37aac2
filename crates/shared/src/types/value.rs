//! Runtime filter values.
//!
//! A filter field holds exactly one `FilterValue` at runtime. The tagged
//! representation keeps dates and free text distinct so downstream consumers
//! never have to re-parse display strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A runtime value held by a filter field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum FilterValue {
    /// No value set.
    #[default]
    Empty,
    /// Free-form or reference-key text.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
}

impl FilterValue {
    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a date value.
    #[must_use]
    pub const fn date(value: NaiveDate) -> Self {
        Self::Date(value)
    }

    /// Returns true if this value is unset.
    ///
    /// Blank text counts as unset: the UI reports a cleared input as an
    /// empty string, not as a missing key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Date(_) => false,
        }
    }

    /// Returns the text content, if this is a non-empty text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Returns the date content, if this is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
            Self::Date(date) => write!(f, "{date}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_detection() {
        assert!(FilterValue::Empty.is_empty());
        assert!(FilterValue::text("").is_empty());
        assert!(!FilterValue::text("PL-0001").is_empty());
        assert!(!FilterValue::date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()).is_empty());
    }

    #[test]
    fn test_accessors() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        assert_eq!(FilterValue::text("CUST-001").as_text(), Some("CUST-001"));
        assert_eq!(FilterValue::text("").as_text(), None);
        assert_eq!(FilterValue::date(date).as_date(), Some(date));
        assert_eq!(FilterValue::Empty.as_text(), None);
        assert_eq!(FilterValue::Empty.as_date(), None);
    }

    #[test]
    fn test_from_str_blank_is_empty() {
        assert_eq!(FilterValue::from(""), FilterValue::Empty);
        assert_eq!(FilterValue::from("ACME"), FilterValue::text("ACME"));
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        assert_eq!(FilterValue::Empty.to_string(), "");
        assert_eq!(FilterValue::text("ACME").to_string(), "ACME");
        assert_eq!(FilterValue::date(date).to_string(), "2026-01-15");
    }

    #[test]
    fn test_serde_round_trip() {
        let values = vec![
            FilterValue::Empty,
            FilterValue::text("PL-0001"),
            FilterValue::date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
        ];

        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: FilterValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }
}
