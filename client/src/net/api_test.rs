use super::*;

#[test]
fn status_outcome_accepts_any_2xx() {
    for status in [200, 201, 204, 299] {
        assert_eq!(status_outcome(status), Ok(()), "{status}");
    }
}

#[test]
fn status_outcome_rejects_everything_else() {
    for status in [0, 199, 301, 400, 422, 500, 503] {
        assert_eq!(status_outcome(status), Err(SubmitError::Status(status)), "{status}");
    }
}

#[test]
fn endpoint_is_https() {
    assert!(CONTACT_ENDPOINT.starts_with("https://"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn submit_outside_browser_reports_network_error() {
    let outcome = futures::executor::block_on(submit_contact(&ContactSubmission::default()));
    assert!(matches!(outcome, Err(SubmitError::Network(_))));
}
