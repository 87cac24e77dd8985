//! Job rate table for the payroll engine.
//!
//! This module contains the strongly-typed job rate records deserialized
//! from the input document and the read-only [`RateTable`] built from them
//! at startup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A job rate entry as it appears in the input document's `jobMeta` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRateRecord {
    /// The job identifier (unique key within the rate table).
    pub job: String,
    /// The hourly pay rate for this job.
    pub rate: Decimal,
    /// The hourly benefit rate for this job.
    pub benefits_rate: Decimal,
}

/// The pay and benefit rates stored for one job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobRate {
    /// The hourly pay rate.
    pub rate: Decimal,
    /// The hourly benefit rate.
    pub benefits_rate: Decimal,
}

/// An immutable lookup from job identifier to its pay and benefit rates.
///
/// Built once at startup from the input document's job metadata; read-only
/// thereafter. Looking up a job that is not in the table yields zero for
/// both rates rather than failing. That leniency is deliberate: an employee
/// punch against an unknown job accrues hours but no pay.
///
/// # Example
///
/// ```
/// use punch_engine::rates::{JobRateRecord, RateTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![JobRateRecord {
///     job: "Shop - Laborer".to_string(),
///     rate: Decimal::from_str("16.25").unwrap(),
///     benefits_rate: Decimal::from_str("1.25").unwrap(),
/// }];
/// let table = RateTable::from_records(&records);
///
/// assert_eq!(table.rate("Shop - Laborer"), Decimal::from_str("16.25").unwrap());
/// assert_eq!(table.rate("No Such Job"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    jobs: HashMap<String, JobRate>,
}

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rate table from a sequence of job rate records.
    ///
    /// A later record for the same job silently replaces an earlier one
    /// (last-write-wins). Rates are stored as given; no validation is
    /// applied.
    pub fn from_records(records: &[JobRateRecord]) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record.job.clone(), record.rate, record.benefits_rate);
        }
        table
    }

    /// Inserts or replaces the rates for a job.
    pub fn insert(&mut self, job: impl Into<String>, rate: Decimal, benefits_rate: Decimal) {
        self.jobs.insert(job.into(), JobRate { rate, benefits_rate });
    }

    /// Returns the hourly pay rate for a job, or zero if the job is unknown.
    pub fn rate(&self, job: &str) -> Decimal {
        self.jobs.get(job).map_or(Decimal::ZERO, |entry| entry.rate)
    }

    /// Returns the hourly benefit rate for a job, or zero if the job is unknown.
    pub fn benefits_rate(&self, job: &str) -> Decimal {
        self.jobs
            .get(job)
            .map_or(Decimal::ZERO, |entry| entry.benefits_rate)
    }

    /// Returns the number of jobs in the table.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if the table contains no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
