//! Success-or-failure values and the `safely` wrapper
//!
//! `Either<L, R>` carries an explicit, typed failure on the left and a
//! success on the right. Unlike [`Optional`], a failure is never dropped
//! silently except through the explicit [`Either::to_optional`] and
//! [`Either::bind`] conversions.

use crate::error::{capture, BoxError, Fault};
use crate::optional::Optional;
use serde::{Deserialize, Serialize};

/// A failure value `L` or a success value `R`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Failure(L),
    Success(R),
}

impl<L, R> Either<L, R> {
    pub fn failure(value: L) -> Self {
        Self::Failure(value)
    }

    pub fn success(value: R) -> Self {
        Self::Success(value)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Total elimination: exactly one of the branches runs
    pub fn match_with<T, FL, FR>(self, on_failure: FL, on_success: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Failure(value) => on_failure(value),
            Self::Success(value) => on_success(value),
        }
    }

    /// Keep the success value, discarding any failure
    pub fn to_optional(self) -> Optional<R> {
        self.match_with(|_| Optional::Absent, Optional::Present)
    }

    /// Chain an `Optional`-returning step after this one
    ///
    /// A failure short-circuits to `Absent`, which lets `Either`-returning and
    /// `Optional`-returning functions sit in the same pipeline.
    pub fn bind<RR, F>(self, f: F) -> Optional<RR>
    where
        F: FnOnce(R) -> Optional<RR>,
    {
        match self {
            Self::Failure(_) => Optional::Absent,
            Self::Success(value) => f(value),
        }
    }

    /// Transform the success value
    pub fn map<RR, F>(self, f: F) -> Either<L, RR>
    where
        F: FnOnce(R) -> RR,
    {
        match self {
            Self::Failure(value) => Either::Failure(value),
            Self::Success(value) => Either::Success(f(value)),
        }
    }

    /// Transform the failure value
    pub fn map_failure<LL, F>(self, f: F) -> Either<LL, R>
    where
        F: FnOnce(L) -> LL,
    {
        match self {
            Self::Failure(value) => Either::Failure(f(value)),
            Self::Success(value) => Either::Success(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Failure(value) => Err(value),
            Either::Success(value) => Ok(value),
        }
    }
}

/// Run `f`, converting any error or panic it raises into a `Failure`
///
/// The fault is handed to `on_error` to build the failure value; nothing
/// escapes past this call.
///
/// # Examples
///
/// ```
/// use katabind::{safely, Either};
///
/// let parsed: Either<String, i32> = safely(|| "12".parse::<i32>(), |fault| fault.message());
/// assert_eq!(parsed, Either::Success(12));
///
/// let failed: Either<String, i32> = safely(|| Err("boom"), |fault| fault.message());
/// assert_eq!(failed, Either::Failure("boom".to_string()));
/// ```
pub fn safely<L, R, E, F, H>(f: F, on_error: H) -> Either<L, R>
where
    F: FnOnce() -> Result<R, E>,
    E: Into<BoxError>,
    H: FnOnce(Fault) -> L,
{
    match capture(f) {
        Ok(value) => Either::Success(value),
        Err(fault) => Either::Failure(on_error(fault)),
    }
}
