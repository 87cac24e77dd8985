//! Core data models for the payroll engine.
//!
//! This module contains the domain models used throughout the engine.

mod pay_summary;
mod time_punch;

pub use pay_summary::{PaySummary, fixed4};
pub use time_punch::{PUNCH_TIME_FORMAT, TimePunch};
