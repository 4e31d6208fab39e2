//! The matcher consumed by [`Result::match_with`](crate::Result::match_with).

/// A pair of callbacks, one per variant.
///
/// `ok` receives the `Ok` payload, `err` the `Err` payload. For a void
/// payload the callback receives `()`; wrap a zero-argument closure in
/// [`nullary`] to use it there.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<F, G> {
    pub ok: F,
    pub err: G,
}

impl<F, G> Matcher<F, G> {
    pub const fn new(ok: F, err: G) -> Self {
        Self { ok, err }
    }
}

/// Callback for a void payload, taking no argument.
///
/// ```
/// use ok_err::{nullary, ok, Matcher, Result};
///
/// let done: Result<(), ()> = ok!();
/// let status = done.match_with(Matcher {
///     ok: nullary(|| 200),
///     err: nullary(|| 500),
/// });
/// assert_eq!(status, ok!(200));
/// ```
pub fn nullary<R>(f: impl FnOnce() -> R) -> impl FnOnce(()) -> R {
    move |()| f()
}
