//! Synchronous form checks run before any request is made.
//!
//! A form that fails validation never reaches the network; field messages are
//! rendered next to the inputs. Server-side rejections are reported separately
//! by the caller.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{Event, EventPayload, LoginRequest, SignupPayload};

use super::dates;

pub const REQUIRED: &str = "This field is required";
pub const PHONE_TOO_SHORT: &str = "Phone must be at least 10 characters";
pub const TOO_LONG: &str = "This field is too long";
pub const POSITIVE_NUMBER: &str = "Must be a positive whole number";

pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_NAME_LEN: usize = 254;
pub const MAX_PHONE_LEN: usize = 30;

/// Per-field messages keyed by a form's field enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, &'static str>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    #[must_use]
    pub fn get(&self, field: F) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Set or clear one field's message (blur validation).
    pub fn set(&mut self, field: F, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationField {
    FirstName,
    LastName,
    PhoneNumber,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl RegistrationForm {
    /// Blur-time check for one field.
    #[must_use]
    pub fn check_field(field: RegistrationField, value: &str) -> Option<&'static str> {
        let len = char_len(value);
        if len == 0 {
            return Some(REQUIRED);
        }
        match field {
            RegistrationField::PhoneNumber if len < MIN_PHONE_LEN => Some(PHONE_TOO_SHORT),
            RegistrationField::PhoneNumber if len > MAX_PHONE_LEN => Some(TOO_LONG),
            RegistrationField::FirstName | RegistrationField::LastName if len > MAX_NAME_LEN => Some(TOO_LONG),
            _ => None,
        }
    }

    #[must_use]
    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::PhoneNumber => &self.phone_number,
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors<RegistrationField> {
        let mut errors = FieldErrors::default();
        for field in [RegistrationField::FirstName, RegistrationField::LastName, RegistrationField::PhoneNumber] {
            errors.set(field, Self::check_field(field, self.value(field)));
        }
        errors
    }

    /// Validate and build the signup body for `event_id`.
    ///
    /// # Errors
    ///
    /// Returns the field messages when any check fails.
    pub fn into_payload(self, event_id: &str) -> Result<SignupPayload, FieldErrors<RegistrationField>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupPayload {
            event_id: event_id.to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
        })
    }
}

// =============================================================================
// EVENT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventField {
    Name,
    Description,
    Location,
    Date,
    Capacity,
    PrefixSeatNumber,
    BeginSeatNumber,
}

/// Event editor contents as typed; numbers stay strings until validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub event_name: String,
    pub event_description: String,
    pub event_location: String,
    /// `YYYY-MM-DD` as produced by the date input.
    pub event_date: String,
    pub event_capacity: String,
    pub prefix_seat_number: String,
    pub begin_seat_number: String,
}

impl EventForm {
    /// Pre-fill the editor from an existing event.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_name: event.event_name.clone(),
            event_description: event.event_description.clone(),
            event_location: event.event_location.clone(),
            event_date: dates::to_date_input(&event.event_date),
            event_capacity: event.event_capacity.to_string(),
            prefix_seat_number: event.prefix_seat_number.clone(),
            begin_seat_number: event.begin_seat_number.to_string(),
        }
    }

    pub fn set(&mut self, field: EventField, value: String) {
        match field {
            EventField::Name => self.event_name = value,
            EventField::Description => self.event_description = value,
            EventField::Location => self.event_location = value,
            EventField::Date => self.event_date = value,
            EventField::Capacity => self.event_capacity = value,
            EventField::PrefixSeatNumber => self.prefix_seat_number = value,
            EventField::BeginSeatNumber => self.begin_seat_number = value,
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors<EventField> {
        let mut errors = FieldErrors::default();
        let required = [
            (EventField::Name, &self.event_name, "Event Name is required"),
            (EventField::Description, &self.event_description, "Event Description is required"),
            (EventField::Location, &self.event_location, "Event Location is required"),
            (EventField::Date, &self.event_date, "Event Date is required"),
            (EventField::Capacity, &self.event_capacity, "Event Capacity is required"),
            (EventField::PrefixSeatNumber, &self.prefix_seat_number, "Prefix Seat Number is required"),
            (EventField::BeginSeatNumber, &self.begin_seat_number, "Begin Seat Number is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.set(field, Some(message));
            }
        }
        if errors.get(EventField::Name).is_none() && char_len(&self.event_name) > MAX_NAME_LEN {
            errors.set(EventField::Name, Some(TOO_LONG));
        }
        if errors.get(EventField::Date).is_none() && dates::from_date_input(&self.event_date).is_none() {
            errors.set(EventField::Date, Some("Event Date is invalid"));
        }
        if errors.get(EventField::Capacity).is_none() && parse_positive(&self.event_capacity).is_none() {
            errors.set(EventField::Capacity, Some(POSITIVE_NUMBER));
        }
        if errors.get(EventField::BeginSeatNumber).is_none() && parse_positive(&self.begin_seat_number).is_none() {
            errors.set(EventField::BeginSeatNumber, Some(POSITIVE_NUMBER));
        }
        errors
    }

    /// Validate and build the create/update body.
    ///
    /// # Errors
    ///
    /// Returns the field messages when any check fails.
    pub fn to_payload(&self) -> Result<EventPayload, FieldErrors<EventField>> {
        let errors = self.validate();
        let (Some(event_date), Some(event_capacity), Some(begin_seat_number)) = (
            dates::from_date_input(&self.event_date),
            parse_positive(&self.event_capacity),
            parse_positive(&self.begin_seat_number),
        ) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(EventPayload {
            event_name: self.event_name.trim().to_owned(),
            event_description: self.event_description.trim().to_owned(),
            event_location: self.event_location.trim().to_owned(),
            event_date,
            event_capacity,
            prefix_seat_number: self.prefix_seat_number.trim().to_owned(),
            begin_seat_number,
        })
    }
}

fn parse_positive(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate and build the login body. The password is sent untrimmed.
    ///
    /// # Errors
    ///
    /// Returns the field messages when either field is empty.
    pub fn to_request(&self) -> Result<LoginRequest, FieldErrors<LoginField>> {
        let mut errors = FieldErrors::default();
        if self.email.trim().is_empty() {
            errors.set(LoginField::Email, Some("Email is required"));
        }
        if self.password.is_empty() {
            errors.set(LoginField::Password, Some("Password is required"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() })
    }
}
