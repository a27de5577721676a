//! Wire types for the contact form service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// JSON body posted to the form-processing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form service responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode submission: {0}")]
    Encode(String),
}
