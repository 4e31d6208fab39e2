//! The [`Result`] sum type.

use core::fmt;

use ref_cast::RefCast;

use crate::{Matcher, UnwrapOnErr};
use crate::shape::{self, Variant};

mod trait_implementations;

/// Outcome of a fallible computation: `Ok(V)` or `Err(E)`, never both.
///
/// `V` or `E` may be `()`, the void payload. Construct with the variants
/// directly or with the [`ok!`](crate::ok) and [`err!`](crate::err) macros.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<V, E> {
    Ok(V),
    Err(E),
}

/// Queries.
impl<V, E> Result<V, E> {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Narrows to the `Ok` shape, `None` on `Err`.
    pub fn as_ok(&self) -> Option<&shape::Ok<V>> {
        match self {
            Self::Ok(value) => Some(shape::Ok::ref_cast(value)),
            Self::Err(_) => None,
        }
    }

    /// Narrows to the `Err` shape, `None` on `Ok`.
    pub fn as_err(&self) -> Option<&shape::Err<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(shape::Err::ref_cast(error)),
        }
    }

    /// Narrows to whichever shape is active.
    ///
    /// ```
    /// use ok_err::{ok, Result, Variant};
    ///
    /// let a: Result<u16, &str> = ok!(200);
    /// match a.narrow() {
    ///     Variant::Ok(ok) => assert_eq!(*ok.value(), 200),
    ///     Variant::Err(err) => panic!("{}", err.error()),
    /// }
    /// ```
    pub fn narrow(&self) -> Variant<'_, V, E> {
        match self {
            Self::Ok(value) => Variant::Ok(shape::Ok::ref_cast(value)),
            Self::Err(error) => Variant::Err(shape::Err::ref_cast(error)),
        }
    }

    pub fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    pub fn into_std(self) -> core::result::Result<V, E> {
        self.into()
    }
}

/// Unwrapping.
impl<V, E> Result<V, E> {
    /// Returns the contained `Ok` value.
    ///
    /// Panics with [`UnwrapOnErr`] on `Err`. Do not call without checking
    /// the variant first, or use [`match_with`](Self::match_with).
    pub fn unwrap(self) -> V
    where
        E: fmt::Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(condition) => {
                error!("{}", condition);
                panic!("{}", condition)
            }
        }
    }

    /// Like [`unwrap`](Self::unwrap), with the failure as a value.
    pub fn try_unwrap(self) -> core::result::Result<V, UnwrapOnErr<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapOnErr(error)),
        }
    }
}

/// Matching.
impl<V, E> Result<V, E> {
    /// Transforms the payload of whichever variant is active.
    ///
    /// `Ok(v)` becomes `Ok((matcher.ok)(v))` and `Err(e)` becomes
    /// `Err((matcher.err)(e))`. The variant is preserved: an arm cannot turn
    /// success into failure or back. Panics in the arms propagate as is.
    pub fn match_with<VR, ER, F, G>(self, matcher: Matcher<F, G>) -> Result<VR, ER>
    where
        F: FnOnce(V) -> VR,
        G: FnOnce(E) -> ER,
    {
        let Matcher { ok, err } = matcher;
        match self {
            Self::Ok(value) => {
                trace!("match: Ok arm");
                Result::Ok(ok(value))
            }
            Self::Err(error) => {
                trace!("match: Err arm");
                Result::Err(err(error))
            }
        }
    }
}
