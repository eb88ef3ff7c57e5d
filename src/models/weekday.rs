use std::fmt;

/// The seven day labels a schedule entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Montag,
    Dienstag,
    Mittwoch,
    Donnerstag,
    Freitag,
    Samstag,
    Sonntag,
}

impl Weekday {
    /// Label as stored in the `Tag` column.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Montag => "Montag",
            Weekday::Dienstag => "Dienstag",
            Weekday::Mittwoch => "Mittwoch",
            Weekday::Donnerstag => "Donnerstag",
            Weekday::Freitag => "Freitag",
            Weekday::Samstag => "Samstag",
            Weekday::Sonntag => "Sonntag",
        }
    }

    /// Parse user input: German labels, English names and the usual
    /// two/three letter abbreviations, case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "montag" | "mo" | "monday" | "mon" => Some(Weekday::Montag),
            "dienstag" | "di" | "tuesday" | "tue" => Some(Weekday::Dienstag),
            "mittwoch" | "mi" | "wednesday" | "wed" => Some(Weekday::Mittwoch),
            "donnerstag" | "do" | "thursday" | "thu" => Some(Weekday::Donnerstag),
            "freitag" | "fr" | "friday" | "fri" => Some(Weekday::Freitag),
            "samstag" | "sa" | "saturday" | "sat" => Some(Weekday::Samstag),
            "sonntag" | "so" | "sunday" | "sun" => Some(Weekday::Sonntag),
            _ => None,
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Montag,
            chrono::Weekday::Tue => Weekday::Dienstag,
            chrono::Weekday::Wed => Weekday::Mittwoch,
            chrono::Weekday::Thu => Weekday::Donnerstag,
            chrono::Weekday::Fri => Weekday::Freitag,
            chrono::Weekday::Sat => Weekday::Samstag,
            chrono::Weekday::Sun => Weekday::Sonntag,
        }
    }

    /// Today's label in local time (used by `list --today`).
    pub fn today() -> Self {
        use chrono::Datelike;
        Self::from_chrono(chrono::Local::now().weekday())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
