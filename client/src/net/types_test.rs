use super::*;

#[test]
fn contact_submission_serializes_expected_fields() {
    let submission = ContactSubmission {
        name: "A".into(),
        email: "a@b.com".into(),
        phone: String::new(),
        subject: "S".into(),
        message: "M".into(),
    };
    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "A", "email": "a@b.com", "phone": "", "subject": "S", "message": "M" })
    );
}

#[test]
fn submit_error_messages() {
    assert_eq!(SubmitError::Status(500).to_string(), "form service responded with status 500");
    assert_eq!(SubmitError::Network("offline".into()).to_string(), "network error: offline");
}
