//! Payroll driver: turns an input document into pay summaries.
//!
//! This module wires the rate table and the per-employee accrual together:
//! for each employee, in input order, every punch is resolved against the
//! rate table, its duration computed, and the triple fed into that
//! employee's [`HourAccrual`].

use tracing::{debug, info};

use crate::input::PunchData;
use crate::models::PaySummary;
use crate::rates::RateTable;

use super::accrual::HourAccrual;

/// Computes the pay summary for every employee in the input document.
///
/// Employees are independent of one another; each gets a fresh
/// [`HourAccrual`] and their punches are applied strictly in the order they
/// appear in the document. Punches against a job missing from the rate
/// table resolve to zero pay and zero benefits but still count toward the
/// employee's cumulative hours.
///
/// Returns one summary per employee, in input order.
///
/// # Example
///
/// ```
/// use punch_engine::calculation::calculate_payroll;
/// use punch_engine::input::InputLoader;
///
/// let data = InputLoader::parse_str(r#"{
///     "jobMeta": [{"job": "Shop - Laborer", "rate": 16.25, "benefitsRate": 1.25}],
///     "employeeData": [{"employee": "Mike Smith", "timePunch": [
///         {"job": "Shop - Laborer", "start": "2022-02-18 09:00:00", "end": "2022-02-18 17:00:00"}
///     ]}]
/// }"#).unwrap();
///
/// let summaries = calculate_payroll(&data);
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].wage_total, "130.0000");
/// ```
pub fn calculate_payroll(data: &PunchData) -> Vec<PaySummary> {
    let rates = RateTable::from_records(&data.job_meta);
    debug!(
        jobs = rates.len(),
        employees = data.employee_data.len(),
        "Built rate table"
    );

    data.employee_data
        .iter()
        .map(|record| {
            let mut accrual = HourAccrual::new(record.employee.clone());

            for punch in &record.time_punch {
                let rate = rates.rate(&punch.job);
                let benefits_rate = rates.benefits_rate(&punch.job);
                accrual.update(punch.worked_hours(), rate, benefits_rate);
            }

            info!(
                employee = %record.employee,
                punches = record.time_punch.len(),
                hours = %accrual.cumulative_hours(),
                "Accrued employee punches"
            );

            accrual.finalize()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EmployeeRecord;
    use crate::models::TimePunch;
    use crate::rates::JobRateRecord;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn punch(job: &str, start: &str, end: &str) -> TimePunch {
        TimePunch {
            job: job.to_string(),
            start: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            end: NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    fn shop_laborer_meta() -> Vec<JobRateRecord> {
        vec![JobRateRecord {
            job: "Shop - Laborer".to_string(),
            rate: dec("16.25"),
            benefits_rate: dec("1.25"),
        }]
    }

    #[test]
    fn test_single_employee_single_punch() {
        let data = PunchData {
            job_meta: shop_laborer_meta(),
            employee_data: vec![EmployeeRecord {
                employee: "Mike Smith".to_string(),
                time_punch: vec![punch(
                    "Shop - Laborer",
                    "2022-02-18 09:00:00",
                    "2022-02-18 17:00:00",
                )],
            }],
        };

        let summaries = calculate_payroll(&data);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].employee, "Mike Smith");
        assert_eq!(summaries[0].regular, "8.0000");
        assert_eq!(summaries[0].overtime, "0.0000");
        assert_eq!(summaries[0].doubletime, "0.0000");
        assert_eq!(summaries[0].wage_total, "130.0000");
        assert_eq!(summaries[0].benefit_total, "10.0000");
    }

    #[test]
    fn test_employees_are_independent_and_ordered() {
        let data = PunchData {
            job_meta: shop_laborer_meta(),
            employee_data: vec![
                EmployeeRecord {
                    employee: "Allison Barker".to_string(),
                    time_punch: vec![punch(
                        "Shop - Laborer",
                        "2022-02-18 09:00:00",
                        "2022-02-18 13:00:00",
                    )],
                },
                EmployeeRecord {
                    employee: "Mike Smith".to_string(),
                    time_punch: vec![punch(
                        "Shop - Laborer",
                        "2022-02-18 09:00:00",
                        "2022-02-18 11:00:00",
                    )],
                },
            ],
        };

        let summaries = calculate_payroll(&data);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].employee, "Allison Barker");
        assert_eq!(summaries[0].regular, "4.0000");
        assert_eq!(summaries[1].employee, "Mike Smith");
        assert_eq!(summaries[1].regular, "2.0000");
    }

    #[test]
    fn test_unknown_job_accrues_hours_but_no_pay() {
        let data = PunchData {
            job_meta: shop_laborer_meta(),
            employee_data: vec![EmployeeRecord {
                employee: "Mike Smith".to_string(),
                time_punch: vec![punch(
                    "Warehouse - Forklift",
                    "2022-02-18 09:00:00",
                    "2022-02-18 17:00:00",
                )],
            }],
        };

        let summaries = calculate_payroll(&data);

        assert_eq!(summaries[0].regular, "8.0000");
        assert_eq!(summaries[0].wage_total, "0.0000");
        assert_eq!(summaries[0].benefit_total, "0.0000");
    }

    #[test]
    fn test_employee_with_no_punches_gets_zeroed_summary() {
        let data = PunchData {
            job_meta: shop_laborer_meta(),
            employee_data: vec![EmployeeRecord {
                employee: "Mike Smith".to_string(),
                time_punch: vec![],
            }],
        };

        let summaries = calculate_payroll(&data);

        assert_eq!(summaries[0].regular, "0.0000");
        assert_eq!(summaries[0].wage_total, "0.0000");
        assert_eq!(summaries[0].benefit_total, "0.0000");
    }

    #[test]
    fn test_punches_are_applied_in_input_order_not_time_order() {
        // The later interval arrives first; it is still accrued first.
        let data = PunchData {
            job_meta: shop_laborer_meta(),
            employee_data: vec![EmployeeRecord {
                employee: "Mike Smith".to_string(),
                time_punch: vec![
                    punch("Shop - Laborer", "2022-02-19 09:00:00", "2022-02-19 17:00:00"),
                    punch("Shop - Laborer", "2022-02-18 09:00:00", "2022-02-18 17:00:00"),
                ],
            }],
        };

        let summaries = calculate_payroll(&data);

        assert_eq!(summaries[0].regular, "16.0000");
        assert_eq!(summaries[0].wage_total, "260.0000");
    }
}
