//! # katabind
//!
//! Functional programming exercises built around a handful of small,
//! reusable combinators.
//!
//! ## Usage
//!
//! ```
//! use katabind::{safely, Optional};
//!
//! let age: Optional<u8> = safely(|| "42".parse::<u8>(), |fault| fault.message())
//!     .bind(|n| if n < 120 { Optional::some(n) } else { Optional::none() });
//! assert_eq!(age, Optional::some(42));
//! ```
//!
//! ## Modules
//!
//! - `sort` - Recursive partition sort returning a new vector
//! - `optional` - `Optional<T>`: a value or nothing, with `map` / `bind`
//! - `either` - `Either<L, R>`: typed failure or success, plus `safely`
//! - `exceptional` - `Exceptional<T>`: a value or a captured fault, via `try_run`
//! - `compose` - Function composition, predicate negation, scoped resources
//! - `collections` - Optional-returning lookups and maps over std collections
//! - `validation` - Smart constructors for validated strings
//! - `core` - Pure domain exercises (employment records, earnings)
//! - `error` - Captured faults and the single capture boundary
//! - `logging` - Tracing subscriber setup
pub mod collections;
pub mod compose;
pub mod core;
pub mod either;
pub mod error;
pub mod exceptional;
pub mod logging;
pub mod optional;
pub mod sort;
pub mod validation;


pub use compose::{compose, negate, using};
pub use either::{safely, Either};
pub use error::Fault;
pub use exceptional::{try_run, Exceptional};
pub use optional::Optional;
pub use sort::{quick_sort, quick_sort_by};
