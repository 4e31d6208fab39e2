//! Narrowed shapes of a [`Result`](crate::Result).
//!
//! A shape is what a `Result` is known to be after a successful narrowing
//! query. [`Ok`] is the only place [`value`](Ok::value) is defined, [`Err`]
//! the only place [`error`](Err::error) is, so reading the wrong side does
//! not type-check.
//!
//! Shapes are never constructed on their own: they are `#[repr(transparent)]`
//! views over the payload that stays inside the `Result`.

use ref_cast::RefCast;

/// The `Ok` shape: a complete or correct value.
#[derive(Debug, Eq, Hash, PartialEq, RefCast)]
#[repr(transparent)]
pub struct Ok<V>(V);

/// The `Err` shape: an error that occurred and is meant to be handled.
#[derive(Debug, Eq, Hash, PartialEq, RefCast)]
#[repr(transparent)]
pub struct Err<E>(E);

impl<V> Ok<V> {
    pub fn value(&self) -> &V {
        &self.0
    }
}

impl<E> Err<E> {
    pub fn error(&self) -> &E {
        &self.0
    }
}

/// Exhaustive view of a [`Result`](crate::Result), each arm narrowed to its shape.
#[derive(Debug, Eq, PartialEq)]
pub enum Variant<'r, V, E> {
    Ok(&'r Ok<V>),
    Err(&'r Err<E>),
}

// derive would require V: Clone, E: Clone
impl<V, E> Clone for Variant<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for Variant<'_, V, E> {}

#[cfg(test)]
mod test {
    use ref_cast::RefCast;

    use super::Variant;

    #[test]
    fn views_share_the_payload() {
        let value = [1u8, 2, 3];
        let ok = super::Ok::ref_cast(&value);
        assert!(core::ptr::eq(ok.value(), &value));

        let error = "Failure";
        let err = super::Err::ref_cast(&error);
        assert_eq!(*err.error(), "Failure");
    }

    #[test]
    fn variant_is_copy_for_any_payload() {
        struct Opaque;
        let payload = Opaque;
        let variant: Variant<'_, Opaque, Opaque> = Variant::Ok(super::Ok::ref_cast(&payload));
        let copied = variant;
        assert!(matches!(variant, Variant::Ok(_)));
        assert!(matches!(copied, Variant::Ok(_)));
    }
}
