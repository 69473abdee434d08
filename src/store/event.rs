use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

pub const DEFAULT_STATUS: &str = "upcoming";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub ministry: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub description: String,
    pub attendees: u32,
    pub status: String,
}

impl Event {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Case-insensitive match against title, ministry, and venue. The
    /// needle must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.ministry.to_lowercase().contains(needle)
            || self.venue.to_lowercase().contains(needle)
    }
}

/// Unvalidated form input for creating or editing an event. Date and time
/// arrive as text from the form buffers and are parsed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub ministry: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub description: String,
}

impl EventDraft {
    /// Checks the five required fields are non-empty and that date/time
    /// parse; returns the typed schedule on success.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveTime), ValidationError> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.ministry.is_empty() {
            missing.push("ministry");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        if self.time.is_empty() {
            missing.push("time");
        }
        if self.venue.is_empty() {
            missing.push("venue");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT)
            .map_err(|_| ValidationError::InvalidTime(self.time.clone()))?;

        Ok((date, time))
    }
}

/// Partial update merged into an existing event; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub ministry: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub attendees: Option<u32>,
    pub status: Option<String>,
}
