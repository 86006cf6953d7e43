//! Domain exercises written as pure functions
//!
//! Everything here takes inputs and returns outputs:
//! - No I/O and no clock reads ("today" is always an argument)
//! - Missing data is an `Optional`, never a panic or sentinel value
//! - Testable without mocks

pub mod earnings;
pub mod employment;
