//! Time punch model.
//!
//! This module defines the TimePunch struct representing one contiguous
//! worked interval for one employee at one job.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The timestamp format used by the time-punch input document.
pub const PUNCH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp format.
///
/// A timestamp that does not match the format fails deserialization, which
/// is fatal for the whole input document.
mod punch_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::PUNCH_TIME_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(PUNCH_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, PUNCH_TIME_FORMAT).map_err(de::Error::custom)
    }
}

/// Represents a single time punch: one worked interval at one job.
///
/// Punches for an employee are processed strictly in the order they appear
/// in the input document; they are not re-sorted by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePunch {
    /// The job identifier worked during this punch.
    pub job: String,
    /// When the employee clocked in.
    #[serde(with = "punch_time")]
    pub start: NaiveDateTime,
    /// When the employee clocked out.
    #[serde(with = "punch_time")]
    pub end: NaiveDateTime,
}

impl TimePunch {
    /// Calculates the worked hours for this punch.
    ///
    /// The duration is computed to seconds precision and converted to hours.
    /// A punch whose end precedes its start yields a negative duration; no
    /// guard is applied and the value flows into the accrual arithmetic
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use punch_engine::models::TimePunch;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let punch = TimePunch {
    ///     job: "Shop - Laborer".to_string(),
    ///     start: NaiveDateTime::parse_from_str("2022-02-18 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2022-02-18 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(punch.worked_hours(), Decimal::from(8));
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let worked_seconds = (self.end - self.start).num_seconds();

        // Convert seconds to hours as Decimal
        Decimal::new(worked_seconds, 0) / Decimal::new(3600, 0)
    }
}
