//! Outbound call to the third-party form-processing service.
//!
//! Client-side (csr): real HTTP via `gloo-net`.
//! Elsewhere: a stub that reports the service as unreachable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, including non-2xx responses, comes back as a
//! [`SubmitError`]; the form maps all of them to one retry-later banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactSubmission, SubmitError};

/// Fixed form-processing endpoint.
pub const CONTACT_ENDPOINT: &str = "https://formspree.io/f/bhardwaj-architect";

/// Map an HTTP status to the submission outcome. Any 2xx is success.
pub fn status_outcome(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Status(status)) }
}

/// POST the contact form as JSON.
///
/// # Errors
///
/// Returns [`SubmitError`] on encoding failure, network failure, or a
/// non-2xx response.
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), SubmitError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .header("Accept", "application/json")
            .json(submission)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let outcome = status_outcome(resp.status());
        if let Err(e) = &outcome {
            log::warn!("contact submission rejected: {e}");
        }
        outcome
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = submission;
        Err(SubmitError::Network("not available outside the browser".to_owned()))
    }
}
