//! Earnings statistics over a population

use crate::optional::Optional;
use crate::sort::quick_sort_by;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub earnings: f64,
}

/// Average earnings of the top quarter of earners
///
/// The quartile size is `population.len() / 4`, rounded down, so fewer than
/// four people yields `Absent`.
pub fn average_earnings_of_richest_quartile(population: &[Person]) -> Optional<f64> {
    let quartile = population.len() / 4;
    if quartile == 0 {
        return Optional::none();
    }

    let richest_first = quick_sort_by(population, |a, b| b.earnings.total_cmp(&a.earnings));
    let total: f64 = richest_first
        .iter()
        .take(quartile)
        .map(|person| person.earnings)
        .sum();

    Optional::some(total / quartile as f64)
}
