use crate::errors::{AppError, AppResult};
use crate::models::time_range::TimeRange;
use crate::models::weekday::Weekday;
use std::fmt;
use uuid::Uuid;

/// Stable synthetic identifier of a schedule entry (the `ID` column).
///
/// The text is kept exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        RecordId(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rows saved with a blank `ID` cell keep it blank until they are edited.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled appointment of a food truck.
///
/// Fields are kept as the text found in the backing file so that any content
/// round-trips unchanged; [`Record::validate`] checks the invariants that
/// every inserted or edited entry must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub day: String,         // ⇔ Tag
    pub location: String,    // ⇔ Ort
    pub vendor_name: String, // ⇔ Foodtruck
    pub category: String,    // ⇔ Küche
    pub time_range: String,  // ⇔ Zeit ("HH:MM-HH:MM")
    pub website: String,     // ⇔ Website (may be empty)
}

impl Record {
    /// Build a new entry with a fresh id.
    pub fn new(
        day: impl Into<String>,
        location: impl Into<String>,
        vendor_name: impl Into<String>,
        category: impl Into<String>,
        time_range: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            day: day.into(),
            location: location.into(),
            vendor_name: vendor_name.into(),
            category: category.into(),
            time_range: time_range.into(),
            website: website.into(),
        }
    }

    /// Human-readable selection label, not unique.
    pub fn display_key(&self) -> String {
        format!("{} - {} - {}", self.day, self.location, self.vendor_name)
    }

    /// Required-field presence, known day label and a well-formed time range.
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("day", &self.day),
            ("location", &self.location),
            ("vendor", &self.vendor_name),
            ("category", &self.category),
            ("time", &self.time_range),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "required fields are empty: {}",
                missing.join(", ")
            )));
        }

        if Weekday::parse(&self.day).is_none() {
            return Err(AppError::Validation(format!(
                "'{}' is not a weekday (Montag … Sonntag)",
                self.day
            )));
        }

        TimeRange::parse(&self.time_range)?;
        Ok(())
    }

    /// Canonical form for storage: trimmed text, weekday label, `HH:MM-HH:MM`.
    /// Call after [`Record::validate`].
    pub fn normalized(mut self) -> Self {
        if let Some(day) = Weekday::parse(&self.day) {
            self.day = day.label().to_string();
        }
        if let Ok(range) = TimeRange::parse(&self.time_range) {
            self.time_range = range.to_string();
        }
        self.location = self.location.trim().to_string();
        self.vendor_name = self.vendor_name.trim().to_string();
        self.category = self.category.trim().to_string();
        self.website = self.website.trim().to_string();
        self
    }

    /// Same content, ignoring the id.
    pub fn same_content(&self, other: &Record) -> bool {
        self.day == other.day
            && self.location == other.location
            && self.vendor_name == other.vendor_name
            && self.category == other.category
            && self.time_range == other.time_range
            && self.website == other.website
    }
}
