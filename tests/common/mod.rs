//! Common test utilities and fixtures

#![allow(dead_code)]

use chrono::NaiveDate;
use katabind::core::employment::{Employee, WorkPermit};
use katabind::Optional;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Builder for employee fixtures
pub struct EmployeeBuilder {
    id: String,
    work_permit: Optional<WorkPermit>,
    joined_on: NaiveDate,
    left_on: Optional<NaiveDate>,
}

impl EmployeeBuilder {
    /// Create a builder for a current employee without a permit
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            work_permit: Optional::none(),
            joined_on: date(2015, 1, 1),
            left_on: Optional::none(),
        }
    }

    /// Attach a work permit expiring on `expiry`
    pub fn with_permit(mut self, number: &str, expiry: NaiveDate) -> Self {
        self.work_permit = Optional::some(WorkPermit {
            number: number.to_string(),
            expiry,
        });
        self
    }

    pub fn joined_on(mut self, joined_on: NaiveDate) -> Self {
        self.joined_on = joined_on;
        self
    }

    /// Mark the employee as having left on `left_on`
    pub fn left_on(mut self, left_on: NaiveDate) -> Self {
        self.left_on = Optional::some(left_on);
        self
    }

    pub fn build(self) -> Employee {
        Employee {
            id: self.id,
            work_permit: self.work_permit,
            joined_on: self.joined_on,
            left_on: self.left_on,
        }
    }
}

/// Build a list of `count` employees from a per-index configuration
pub fn employees<F>(count: usize, configure: F) -> Vec<Employee>
where
    F: Fn(usize, EmployeeBuilder) -> EmployeeBuilder,
{
    (0..count)
        .map(|i| configure(i, EmployeeBuilder::new(&format!("emp-{i:03}"))).build())
        .collect()
}

/// Scoped debug-level subscriber writing to the test output
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}
