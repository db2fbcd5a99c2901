use super::*;
use crate::net::test_helpers::dummy_event;

fn registration(first: &str, last: &str, phone: &str) -> RegistrationForm {
    RegistrationForm { first_name: first.to_owned(), last_name: last.to_owned(), phone_number: phone.to_owned() }
}

fn event_form() -> EventForm {
    EventForm {
        event_name: "Gala".to_owned(),
        event_description: "Dinner".to_owned(),
        event_location: "Main hall".to_owned(),
        event_date: "2024-09-01".to_owned(),
        event_capacity: "100".to_owned(),
        prefix_seat_number: "G".to_owned(),
        begin_seat_number: "1".to_owned(),
    }
}

// =============================================================
// Registration
// =============================================================

#[test]
fn nine_digit_phone_is_rejected() {
    let errors = registration("Jane", "Smith", "123456789").into_payload("e-1").unwrap_err();
    assert_eq!(errors.get(RegistrationField::PhoneNumber), Some("Phone must be at least 10 characters"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn ten_digit_phone_is_accepted_and_fields_trimmed() {
    let payload = registration("  Jane ", "Smith", " 1234567890 ").into_payload("e-1").unwrap();
    assert_eq!(payload.first_name, "Jane");
    assert_eq!(payload.phone_number, "1234567890");
    assert_eq!(payload.event_id, "e-1");
}

#[test]
fn blank_fields_are_required() {
    let errors = registration("   ", "", "").validate();
    assert_eq!(errors.get(RegistrationField::FirstName), Some(REQUIRED));
    assert_eq!(errors.get(RegistrationField::LastName), Some(REQUIRED));
    assert_eq!(errors.get(RegistrationField::PhoneNumber), Some(REQUIRED));
}

#[test]
fn whitespace_padding_does_not_satisfy_phone_length() {
    assert_eq!(
        RegistrationForm::check_field(RegistrationField::PhoneNumber, "  12345678  "),
        Some(PHONE_TOO_SHORT)
    );
}

#[test]
fn overlong_values_are_rejected() {
    let long_name = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(RegistrationForm::check_field(RegistrationField::LastName, &long_name), Some(TOO_LONG));
    let long_phone = "1".repeat(MAX_PHONE_LEN + 1);
    assert_eq!(RegistrationForm::check_field(RegistrationField::PhoneNumber, &long_phone), Some(TOO_LONG));
}

#[test]
fn blur_check_clears_message_once_fixed() {
    let mut errors = FieldErrors::default();
    errors.set(RegistrationField::FirstName, RegistrationForm::check_field(RegistrationField::FirstName, ""));
    assert!(!errors.is_empty());
    errors.set(RegistrationField::FirstName, RegistrationForm::check_field(RegistrationField::FirstName, "Jo"));
    assert!(errors.is_empty());
}

// =============================================================
// Event
// =============================================================

#[test]
fn complete_event_form_builds_payload() {
    let payload = event_form().to_payload().unwrap();
    assert_eq!(payload.event_date, "2024-09-01T00:00:00.000Z");
    assert_eq!(payload.event_capacity, 100);
    assert_eq!(payload.begin_seat_number, 1);
}

#[test]
fn empty_event_form_reports_every_field() {
    let errors = EventForm::default().validate();
    assert_eq!(errors.len(), 7);
    assert_eq!(errors.get(EventField::Name), Some("Event Name is required"));
    assert_eq!(errors.get(EventField::BeginSeatNumber), Some("Begin Seat Number is required"));
}

#[test]
fn non_positive_numbers_are_rejected() {
    let mut form = event_form();
    form.set(EventField::Capacity, "0".to_owned());
    form.set(EventField::BeginSeatNumber, "abc".to_owned());
    let errors = form.to_payload().unwrap_err();
    assert_eq!(errors.get(EventField::Capacity), Some(POSITIVE_NUMBER));
    assert_eq!(errors.get(EventField::BeginSeatNumber), Some(POSITIVE_NUMBER));
}

#[test]
fn invalid_date_is_rejected() {
    let mut form = event_form();
    form.set(EventField::Date, "2024-13-40".to_owned());
    assert_eq!(form.validate().get(EventField::Date), Some("Event Date is invalid"));
}

#[test]
fn event_form_prefills_from_event() {
    let mut event = dummy_event("e-1");
    event.begin_seat_number = 5;
    let form = EventForm::from_event(&event);
    assert_eq!(form.event_name, "Event e-1");
    assert_eq!(form.event_date, "2024-08-17");
    assert_eq!(form.event_capacity, "40");
    assert_eq!(form.begin_seat_number, "5");
    assert!(form.validate().is_empty());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = LoginForm::default().to_request().unwrap_err();
    assert_eq!(errors.get(LoginField::Email), Some("Email is required"));
    assert_eq!(errors.get(LoginField::Password), Some("Password is required"));
}

#[test]
fn login_trims_email_only() {
    let form = LoginForm { email: " admin@example.com ".to_owned(), password: " secret ".to_owned() };
    let request = form.to_request().unwrap();
    assert_eq!(request.email, "admin@example.com");
    assert_eq!(request.password, " secret ");
}
