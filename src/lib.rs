//! Payroll engine for time-punch records.
//!
//! This crate computes per-employee payroll totals from a set of per-job pay
//! rates and a chronological sequence of time punches, splitting each
//! employee's hours into regular, overtime (1.5x past 40 cumulative hours),
//! and doubletime (2x past 48 cumulative hours) pay tiers.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod input;
pub mod models;
pub mod rates;
