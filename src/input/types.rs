//! Typed model of the time-punch input document.
//!
//! These structs mirror the wire format of the JSON input: a `jobMeta`
//! section with per-job rates and an `employeeData` section with each
//! employee's punch sequence.

use serde::{Deserialize, Serialize};

use crate::models::TimePunch;
use crate::rates::JobRateRecord;

/// One employee's record in the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// The employee's name.
    pub employee: String,
    /// The employee's punches, in the order they were recorded.
    pub time_punch: Vec<TimePunch>,
}

/// The complete time-punch input document.
///
/// All fields are required; a document missing any of them fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchData {
    /// Per-job pay and benefit rates.
    pub job_meta: Vec<JobRateRecord>,
    /// Per-employee punch sequences, in input order.
    pub employee_data: Vec<EmployeeRecord>,
}
