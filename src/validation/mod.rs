//! Validated wrapper types built with smart constructors
//!
//! Each type here can only be obtained through a constructor that checks its
//! invariant and returns an [`Optional`](crate::Optional). Getting the raw
//! value back out is always an explicit call.

pub mod email;

pub use email::{Email, InvalidEmail};
