use core::fmt;

/// There is but one failure: unwrapping an `Err`.
///
/// Carries the error payload that was found instead of a value.
/// [`Result::unwrap`](crate::Result::unwrap) panics with it,
/// [`Result::try_unwrap`](crate::Result::try_unwrap) hands it back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnwrapOnErr<E>(pub E);

impl<E> UnwrapOnErr<E> {
    pub fn error(&self) -> &E {
        &self.0
    }

    pub fn into_error(self) -> E {
        self.0
    }
}

impl<E: fmt::Debug> fmt::Display for UnwrapOnErr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unwrapping Err: {:?}", self.0)
    }
}
