//! `HH:MM-HH:MM` opening hours of a schedule entry.

use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Spaces around the dash are tolerated on input, never written.
    RE.get_or_init(|| Regex::new(r"^\s*(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\s*$").unwrap())
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start > end {
            return Err(AppError::Validation(format!(
                "time range ends before it starts: {}-{}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a range from two separate `HH:MM` inputs (the `--from`/`--to` flags).
    pub fn from_parts(start: &str, end: &str) -> AppResult<Self> {
        let s = parse_time(start)
            .ok_or_else(|| AppError::Validation(format!("invalid start time '{start}'")))?;
        let e = parse_time(end)
            .ok_or_else(|| AppError::Validation(format!("invalid end time '{end}'")))?;
        Self::new(s, e)
    }

    pub fn parse(input: &str) -> AppResult<Self> {
        let caps = range_regex().captures(input).ok_or_else(|| {
            AppError::Validation(format!("time range must look like HH:MM-HH:MM, got '{input}'"))
        })?;
        Self::from_parts(&caps[1], &caps[2])
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
