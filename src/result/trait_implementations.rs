#[cfg(feature = "ct-maybe")]
use subtle::{Choice, CtOption};
use zeroize::Zeroize;

use super::Result;

impl<V, E> From<core::result::Result<V, E>> for Result<V, E> {
    fn from(result: core::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for core::result::Result<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

/// Wipes the active payload, the variant stays.
impl<V: Zeroize, E: Zeroize> Zeroize for Result<V, E> {
    fn zeroize(&mut self) {
        match self {
            Self::Ok(value) => value.zeroize(),
            Self::Err(error) => error.zeroize(),
        }
    }
}

/// `1` is success.
#[cfg(feature = "ct-maybe")]
impl From<Choice> for Result<(), ()> {
    fn from(choice: Choice) -> Self {
        if bool::from(choice) {
            Self::Ok(())
        } else {
            Self::Err(())
        }
    }
}

#[cfg(feature = "ct-maybe")]
impl<V> Result<V, ()> {
    /// Leaves constant-time land: `Ok` iff the option is some.
    pub fn from_ct_option(option: CtOption<V>) -> Self {
        if bool::from(option.is_some()) {
            // is_some checked
            Self::Ok(option.unwrap())
        } else {
            Self::Err(())
        }
    }
}
