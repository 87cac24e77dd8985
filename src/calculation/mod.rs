//! Calculation logic for the payroll engine.
//!
//! This module contains the per-employee hour accrual state machine that
//! splits cumulative hours across the regular, overtime, and doubletime pay
//! tiers, and the payroll driver that feeds each employee's punch sequence
//! through it.

mod accrual;
mod payroll;

pub use accrual::{
    DOUBLETIME_MULTIPLIER, DOUBLETIME_THRESHOLD, HourAccrual, HourBuckets, OVERTIME_MULTIPLIER,
    OVERTIME_THRESHOLD,
};
pub use payroll::calculate_payroll;
