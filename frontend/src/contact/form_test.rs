use std::rc::Rc;

use super::*;

fn form(name: &str, email: &str, phone: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn complete_form_without_phone_is_accepted() {
    let submission = form("Jane Doe", "jane@example.com", "").validate().unwrap();
    assert_eq!(
        submission,
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
        }
    );
}

#[test]
fn phone_is_kept_when_given() {
    let submission = form("Jane", "jane@example.com", "(555) 123-4567")
        .validate()
        .unwrap();
    assert_eq!(submission.phone.as_deref(), Some("(555) 123-4567"));
}

#[test]
fn fields_are_trimmed() {
    let submission = form("  Jane  ", " jane@example.com ", "   ").validate().unwrap();
    assert_eq!(submission.name, "Jane");
    assert_eq!(submission.email, "jane@example.com");
    assert_eq!(submission.phone, None);
}

#[test]
fn empty_or_blank_name_is_rejected() {
    assert_eq!(
        form("", "jane@example.com", "").validate(),
        Err(FormError::MissingName)
    );
    assert_eq!(
        form("   ", "jane@example.com", "").validate(),
        Err(FormError::MissingName)
    );
}

#[test]
fn missing_email_is_rejected() {
    assert_eq!(form("Jane", "", "").validate(), Err(FormError::MissingEmail));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(
        form("Jane", "jane.example.com", "").validate(),
        Err(FormError::InvalidEmail("jane.example.com".to_string()))
    );
}

// =============================================================
// accept
// =============================================================

#[test]
fn accept_clears_every_field() {
    let mut contact = form("Jane Doe", "jane@example.com", "555");
    contact.accept().unwrap();
    assert_eq!(contact, ContactForm::default());
}

#[test]
fn rejected_form_keeps_its_values() {
    let mut contact = form("", "jane@example.com", "555");
    let before = contact.clone();
    assert!(contact.accept().is_err());
    assert_eq!(contact, before);
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_common_addresses() {
    for email in [
        "jane@example.com",
        "first.last@sub.example.co.uk",
        "golfer+lessons@tee-to-green.com",
        "james@localhost",
        "o'brien@example.ie",
    ] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "jane",
        "@example.com",
        "jane@",
        "jane@@example.com",
        "jane doe@example.com",
        "jane@example..com",
        "jane@.example.com",
        "jane@example.com.",
        "jane@-example.com",
        "jane@example-.com",
        "jane@exa_mple.com",
    ] {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }
}

#[test]
fn rejects_overlong_domain_label() {
    let label = "a".repeat(64);
    assert!(!is_valid_email(&format!("jane@{label}.com")));
    let label = "a".repeat(63);
    assert!(is_valid_email(&format!("jane@{label}.com")));
}

#[test]
fn submission_omits_missing_phone_when_serialized() {
    let submission = form("Jane", "jane@example.com", "").validate().unwrap();
    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Jane", "email": "jane@example.com" })
    );
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn edits_to_different_fields_queued_before_render_all_land() {
    let initial = Rc::new(ContactForm::default());
    let next = initial
        .clone()
        .reduce(FormAction::Edit(ContactField::Name, "Jane".to_string()))
        .reduce(FormAction::Edit(ContactField::Email, "jane@example.com".to_string()))
        .reduce(FormAction::Edit(ContactField::Phone, "555".to_string()));

    assert_eq!(*next, form("Jane", "jane@example.com", "555"));
    assert_eq!(*initial, ContactForm::default());
}

#[test]
fn clear_resets_every_field() {
    let filled = Rc::new(form("Jane", "jane@example.com", "555"));
    assert_eq!(*filled.reduce(FormAction::Clear), ContactForm::default());
}

#[test]
fn unchanged_edit_keeps_same_state() {
    let filled = Rc::new(form("Jane", "", ""));
    let next = filled
        .clone()
        .reduce(FormAction::Edit(ContactField::Name, "Jane".to_string()));
    assert!(Rc::ptr_eq(&filled, &next));
}
