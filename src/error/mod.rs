//! Captured faults and the boundary that produces them
//!
//! Caller-supplied code may fail in two ways: by returning an error or by
//! panicking. [`capture`] is the only place where either outcome is turned
//! into a value. `safely` and `try_run` are built on it; every other
//! operation in the crate is total.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::debug;

/// Boxed error accepted from caller-supplied closures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A runtime fault captured from caller-supplied code
#[derive(Error, Debug)]
pub enum Fault {
    /// The closure returned an error
    #[error("{0}")]
    Raised(BoxError),

    /// The closure panicked; holds the panic message
    #[error("panicked: {0}")]
    Panicked(String),
}

impl Fault {
    /// Wrap any error value as a raised fault
    pub fn raised(err: impl Into<BoxError>) -> Self {
        Self::Raised(err.into())
    }

    /// The bare message of the fault, without the panic prefix
    pub fn message(&self) -> String {
        match self {
            Self::Raised(err) => err.to_string(),
            Self::Panicked(message) => message.clone(),
        }
    }

    /// Whether the fault came from an unwinding panic
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Borrow the raised error as a concrete type, if it is one
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Raised(err) => err.downcast_ref::<E>(),
            Self::Panicked(_) => None,
        }
    }
}

impl From<anyhow::Error> for Fault {
    fn from(err: anyhow::Error) -> Self {
        Self::Raised(err.into())
    }
}

/// Run `f`, turning a returned error or a panic into a [`Fault`]
///
/// Panics are caught with `catch_unwind`, so this only captures them when
/// the crate is built with `panic = "unwind"` (the default).
pub fn capture<T, E, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    let fault = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(err)) => Fault::Raised(err.into()),
        Err(payload) => Fault::Panicked(panic_message(&*payload)),
    };

    debug!(fault = %fault, panicked = fault.is_panic(), "Captured fault");
    Err(fault)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests;
