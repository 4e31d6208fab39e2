//! Simulated HTTP calls, to wrap outcomes the way callers do.

use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub ok: bool,
    pub status: u16,
    pub status_text: &'static str,
}

pub fn succeeding() -> Response {
    Response { ok: true, status: 200, status_text: "" }
}

pub fn failing() -> Response {
    Response { ok: false, status: 400, status_text: "Failure" }
}

/// Stands in for the resolved outcome of a remote call.
pub fn call(response: Response) -> Result<Response, Response> {
    if response.ok {
        crate::ok!(response)
    } else {
        crate::err!(response)
    }
}
