//! Helpers for testing code built on this crate.

#[cfg(any(feature = "std", test))]
mod multi_failure;
#[doc(hidden)]
#[cfg(any(feature = "std", test))]
pub use multi_failure::MultiFailure;
