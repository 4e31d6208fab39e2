#![cfg_attr(not(test), no_std)]
//! A [`Result`] value type: success or failure as an inspectable value.
//!
//! The two variants are fixed at construction. Callers either narrow
//! (via [`Result::as_ok`], [`Result::as_err`] or [`Result::narrow`]) before
//! reaching for the payload, or branch with [`Result::match_with`], which
//! transforms whichever side is active and never switches sides.
//!
//! ```
//! use ok_err::{ok, err, Matcher, Result};
//!
//! let doubled: Result<String, String> = ok!(2)
//!     .match_with(Matcher {
//!         ok: |v: i32| (v * 2).to_string(),
//!         err: |e: String| e,
//!     });
//! assert_eq!(doubled.as_ok().unwrap().value(), "4");
//!
//! let failed: Result<i32, String> = err!(2)
//!     .match_with(Matcher {
//!         ok: |v: i32| v,
//!         err: |e: i32| (e * 5).to_string(),
//!     });
//! assert_eq!(failed.as_err().unwrap().error(), "10");
//! ```
//!
//! A void payload is `()`: `ok!()` and `ok!(())` are the same value.

delog::generate_macros!();

/// Constructs the `Ok` variant.
///
/// Without an argument the payload is `()`.
#[macro_export]
macro_rules! ok {
    () => {
        $crate::Result::Ok(())
    };
    ($value:expr $(,)?) => {
        $crate::Result::Ok($value)
    };
}

/// Constructs the `Err` variant.
///
/// Without an argument the payload is `()`.
#[macro_export]
macro_rules! err {
    () => {
        $crate::Result::Err(())
    };
    ($error:expr $(,)?) => {
        $crate::Result::Err($error)
    };
}

mod error;
pub use error::UnwrapOnErr;
mod matcher;
pub use matcher::{nullary, Matcher};
mod result;
pub use result::Result;
pub mod shape;
pub use shape::Variant;

#[cfg(test)]
mod fixtures;
