//! A value that may be absent
//!
//! `Optional` is a closed two-variant type consumed through [`Optional::match_with`]
//! or chained with [`Optional::map`] and [`Optional::bind`]. Absence is not an
//! error: it flows through every combinator untouched.
//!
//! # Examples
//!
//! ```
//! use katabind::Optional;
//!
//! let doubled = Optional::some(5).bind(|n| if n > 3 { Optional::some(n * 2) } else { Optional::none() });
//! assert_eq!(doubled, Optional::some(10));
//! ```

use crate::either::Either;
use serde::{Deserialize, Serialize};

/// Either a present value or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// Wrap a value
    pub fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent value
    pub fn none() -> Self {
        Self::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the contained value without consuming `self`
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Apply `f` to the contained value; `Absent` stays `Absent`
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chain a lookup that may itself come back empty
    pub fn bind<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Total elimination: exactly one of the branches runs
    pub fn match_with<R, N, S>(self, on_absent: N, on_present: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Promote absence to an explicit failure value
    pub fn to_either<L, F>(self, on_absent: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Present(value) => Either::Success(value),
            Self::Absent => Either::Failure(on_absent()),
        }
    }

    /// The contained value, or the fallback produced by `default`
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(default, |value| value)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
