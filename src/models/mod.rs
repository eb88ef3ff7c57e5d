pub mod record;
pub mod record_set;
pub mod time_range;
pub mod weekday;

pub use record::{Record, RecordId};
pub use record_set::RecordSet;
pub use time_range::TimeRange;
pub use weekday::Weekday;
