//! Employee records: work permit lookups and tenure statistics
//!
//! Lookups chain with `bind`: finding the employee may fail, and an employee
//! may have no permit, and both cases collapse into a single `Absent`.

use crate::collections::lookup_key;
use crate::optional::Optional;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DAYS_PER_YEAR: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPermit {
    pub number: String,
    pub expiry: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub work_permit: Optional<WorkPermit>,
    pub joined_on: NaiveDate,
    pub left_on: Optional<NaiveDate>,
}

impl WorkPermit {
    /// A permit is usable up to and including its expiry date
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.expiry >= date
    }
}

/// The work permit of the employee with `employee_id`, if both exist
pub fn get_work_permit(
    people: &HashMap<String, Employee>,
    employee_id: &str,
) -> Optional<WorkPermit> {
    lookup_key(people, employee_id).bind(|employee| employee.work_permit.clone())
}

/// Like [`get_work_permit`], but `Absent` once the permit has expired
pub fn get_valid_work_permit(
    people: &HashMap<String, Employee>,
    employee_id: &str,
    today: NaiveDate,
) -> Optional<WorkPermit> {
    get_work_permit(people, employee_id).bind(|permit| {
        if permit.is_valid_on(today) {
            Optional::some(permit)
        } else {
            Optional::none()
        }
    })
}

/// Whole years between two dates, counting a year as 365 days
pub fn years_between(left_on: NaiveDate, joined_on: NaiveDate) -> i64 {
    left_on.signed_duration_since(joined_on).num_days() / DAYS_PER_YEAR
}

/// Mean whole years worked, over employees who have left
///
/// `Absent` when nobody in `employees` has left.
pub fn average_years_worked(employees: &[Employee]) -> Optional<f64> {
    let tenures: Vec<i64> = employees
        .iter()
        .filter_map(|employee| {
            Option::<i64>::from(
                employee
                    .left_on
                    .map(|left_on| years_between(left_on, employee.joined_on)),
            )
        })
        .collect();

    if tenures.is_empty() {
        return Optional::none();
    }

    let total: i64 = tenures.iter().sum();
    Optional::some(total as f64 / tenures.len() as f64)
}
