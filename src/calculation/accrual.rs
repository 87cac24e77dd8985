//! Per-employee hour accrual and tier splitting.
//!
//! This module provides the [`HourAccrual`] accumulator, the core of the
//! engine. It consumes one (hours, rate, benefit rate) triple per punch, in
//! input order, and maintains running dollar totals split across three pay
//! tiers:
//!
//! - **Regular**: up to 40 cumulative hours, paid at the base rate.
//! - **Overtime**: cumulative hours in the (40, 48] band, paid at 1.5x.
//! - **Doubletime**: cumulative hours past 48, paid at 2x.
//!
//! Tier membership is decided by the employee's cumulative hours, not by the
//! punch itself, so a single punch may straddle a tier boundary and be split
//! between two buckets.

use rust_decimal::Decimal;

use crate::models::{PaySummary, fixed4};

/// Cumulative hours at which overtime pay begins.
pub const OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Cumulative hours at which doubletime pay begins.
pub const DOUBLETIME_THRESHOLD: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Pay multiplier for hours in the overtime band (1.5x).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Pay multiplier for hours past the doubletime threshold (2x).
pub const DOUBLETIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// An employee's hours split across the three pay tiers.
///
/// Derived from the cumulative hour total alone; see
/// [`HourAccrual::hour_buckets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBuckets {
    /// Hours at the base rate.
    pub regular: Decimal,
    /// Hours in the overtime band.
    pub overtime: Decimal,
    /// Hours past the doubletime threshold.
    pub doubletime: Decimal,
}

/// Stateful per-employee accumulator for hours and tiered wages.
///
/// Created when an employee's first punch is processed, updated once per
/// punch via [`update`](Self::update), and rendered to a [`PaySummary`] via
/// [`finalize`](Self::finalize) once the punch sequence is exhausted.
///
/// Dollar totals are accumulated incrementally per punch, while the hour
/// buckets are re-derived from the cumulative total at read time. The two
/// paths are intentionally independent but always agree on total hours.
///
/// # Example
///
/// ```
/// use punch_engine::calculation::HourAccrual;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut accrual = HourAccrual::new("Mike Smith");
/// accrual.update(
///     Decimal::from(8),
///     Decimal::from_str("16.25").unwrap(),
///     Decimal::from_str("1.25").unwrap(),
/// );
///
/// let summary = accrual.finalize();
/// assert_eq!(summary.regular, "8.0000");
/// assert_eq!(summary.wage_total, "130.0000");
/// assert_eq!(summary.benefit_total, "10.0000");
/// ```
#[derive(Debug, Clone)]
pub struct HourAccrual {
    name: String,
    hours: Decimal,
    regular: Decimal,
    overtime: Decimal,
    doubletime: Decimal,
    benefit_total: Decimal,
}

impl HourAccrual {
    /// Creates a fresh accrual for the named employee with all totals zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours: Decimal::ZERO,
            regular: Decimal::ZERO,
            overtime: Decimal::ZERO,
            doubletime: Decimal::ZERO,
            benefit_total: Decimal::ZERO,
        }
    }

    /// Applies one punch to the accrual.
    ///
    /// The punch's hours are added to the cumulative total, and its dollars
    /// are routed into the regular/overtime/doubletime buckets based on the
    /// totals before and after this call. A punch that crosses the 40-hour
    /// boundary is split at 40; one that crosses the 48-hour boundary is
    /// split at 48. Benefit dollars accrue for every hour regardless of
    /// tier.
    ///
    /// The boundary checks are evaluated in order, 40 before 48, and at most
    /// one split is applied per call. A single punch large enough to cross
    /// both boundaries therefore lands entirely in the 40-split and is paid
    /// at 1.5x past 48; callers that want doubletime applied in that case
    /// must feed the punch as two sub-punches.
    ///
    /// Hours are not validated: a zero-hour punch leaves the totals
    /// unchanged, and a negative duration subtracts through the same
    /// arithmetic.
    pub fn update(&mut self, hours: Decimal, rate: Decimal, benefits_rate: Decimal) {
        let prior_total = self.hours;
        self.hours += hours;
        self.benefit_total += benefits_rate * hours;

        if self.hours <= OVERTIME_THRESHOLD {
            // Entirely at or below 40 hours: all regular.
            self.regular += hours * rate;
        } else if self.hours >= OVERTIME_THRESHOLD && prior_total <= OVERTIME_THRESHOLD {
            // Crossed the 40-hour boundary: split this punch at 40.
            self.regular += (OVERTIME_THRESHOLD - prior_total) * rate;
            self.overtime += (self.hours - OVERTIME_THRESHOLD) * (rate * OVERTIME_MULTIPLIER);
        } else if self.hours >= OVERTIME_THRESHOLD && self.hours < DOUBLETIME_THRESHOLD {
            // Entirely inside the overtime band.
            self.overtime += rate * OVERTIME_MULTIPLIER * hours;
        } else if self.hours >= DOUBLETIME_THRESHOLD && prior_total < DOUBLETIME_THRESHOLD {
            // Crossed the 48-hour boundary: split this punch at 48.
            self.overtime += (DOUBLETIME_THRESHOLD - prior_total) * (rate * OVERTIME_MULTIPLIER);
            self.doubletime += (self.hours - DOUBLETIME_THRESHOLD) * (rate * DOUBLETIME_MULTIPLIER);
        } else {
            // Entirely past 48 hours.
            self.doubletime += hours * (rate * DOUBLETIME_MULTIPLIER);
        }
    }

    /// Returns the cumulative hours fed so far.
    pub fn cumulative_hours(&self) -> Decimal {
        self.hours
    }

    /// Returns the total wages across all three tiers.
    pub fn wage_total(&self) -> Decimal {
        self.regular + self.overtime + self.doubletime
    }

    /// Returns the total benefit dollars accrued.
    pub fn benefit_total(&self) -> Decimal {
        self.benefit_total
    }

    /// Splits the cumulative hour total across the three pay tiers.
    ///
    /// This is a pure function of the cumulative total; it does not consult
    /// the dollar buckets. The sum of the three buckets always equals the
    /// cumulative total. At exactly 40 hours the overtime bucket is zero,
    /// and at exactly 48 hours the overtime bucket is exactly 8 with zero
    /// doubletime.
    pub fn hour_buckets(&self) -> HourBuckets {
        let mut regular = Decimal::ZERO;
        let mut overtime = Decimal::ZERO;
        let mut doubletime = Decimal::ZERO;

        if self.hours <= OVERTIME_THRESHOLD {
            regular = self.hours;
        } else if self.hours > OVERTIME_THRESHOLD && self.hours <= DOUBLETIME_THRESHOLD {
            regular = OVERTIME_THRESHOLD;
            overtime = self.hours - OVERTIME_THRESHOLD;
        } else if self.hours > DOUBLETIME_THRESHOLD {
            regular = OVERTIME_THRESHOLD;
            overtime = DOUBLETIME_THRESHOLD - OVERTIME_THRESHOLD;
            doubletime = self.hours - DOUBLETIME_THRESHOLD;
        }

        HourBuckets {
            regular,
            overtime,
            doubletime,
        }
    }

    /// Renders the final pay summary for this employee.
    ///
    /// Hour buckets are derived from the cumulative total, the wage total is
    /// the sum of the three dollar buckets, and every numeric field is
    /// rendered with exactly 4 fractional digits.
    pub fn finalize(&self) -> PaySummary {
        let buckets = self.hour_buckets();

        PaySummary {
            employee: self.name.clone(),
            regular: fixed4(buckets.regular),
            overtime: fixed4(buckets.overtime),
            doubletime: fixed4(buckets.doubletime),
            wage_total: fixed4(self.wage_total()),
            benefit_total: fixed4(self.benefit_total),
        }
    }
}
