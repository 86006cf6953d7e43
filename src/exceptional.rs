//! Outcomes of running fallible code: a value or the fault it raised
//!
//! An [`Exceptional`] can only be obtained from [`try_run`]; its
//! representation is private, so callers inspect it with
//! [`Exceptional::match_with`] or the `is_ok` / `is_caught` accessors.

use crate::either::Either;
use crate::error::{capture, BoxError, Fault};

#[derive(Debug)]
enum Outcome<T> {
    Ok(T),
    Caught(Fault),
}

/// A successful value or a captured [`Fault`]
#[derive(Debug)]
pub struct Exceptional<T> {
    outcome: Outcome<T>,
}

impl<T> Exceptional<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok(_))
    }

    pub fn is_caught(&self) -> bool {
        matches!(self.outcome, Outcome::Caught(_))
    }

    /// Total elimination: exactly one of the branches runs
    pub fn match_with<X, C, O>(self, on_caught: C, on_ok: O) -> X
    where
        C: FnOnce(Fault) -> X,
        O: FnOnce(T) -> X,
    {
        match self.outcome {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Caught(fault) => on_caught(fault),
        }
    }

    /// Re-express the outcome as an `Either` with the fault on the left
    pub fn into_either(self) -> Either<Fault, T> {
        self.match_with(Either::Failure, Either::Success)
    }
}

/// Run `f` and record its value or the fault it raised; never re-raises
///
/// # Examples
///
/// ```
/// use katabind::try_run;
///
/// let ok = try_run(|| "42".parse::<u32>());
/// assert!(ok.is_ok());
///
/// let caught = try_run(|| "forty-two".parse::<u32>());
/// assert!(caught.is_caught());
/// ```
pub fn try_run<T, E, F>(f: F) -> Exceptional<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    let outcome = match capture(f) {
        Ok(value) => Outcome::Ok(value),
        Err(fault) => Outcome::Caught(fault),
    };
    Exceptional { outcome }
}
