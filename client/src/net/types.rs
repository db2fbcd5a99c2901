//! Shared REST DTOs for the events backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. The backend is a document store: records may carry `id`, `_id`,
//! or both, so identifiers are kept in two optional slots and resolved through
//! [`Identified::key`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Records that can be located in a held collection by identifier.
pub trait Identified {
    /// Stable identifier used for replace-by-id and remove-by-id.
    fn key(&self) -> &str;
}

/// A schedulable activity with finite capacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Virtual identifier as exposed by the API.
    #[serde(default)]
    pub id: String,
    /// Raw document identifier, when the API sends it.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub event_name: String,
    #[serde(default)]
    pub event_description: String,
    #[serde(default)]
    pub event_location: String,
    /// ISO 8601 timestamp.
    #[serde(default)]
    pub event_date: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub event_capacity: i64,
    #[serde(default)]
    pub prefix_seat_number: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub begin_seat_number: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub signup_count: i64,
    /// Remaining seats. Computed by the backend; never recomputed here.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub available_capacity: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub signups: Vec<Signup>,
}

impl Event {
    /// Whether the register action should be offered.
    #[must_use]
    pub fn has_open_seats(&self) -> bool {
        self.available_capacity > 0
    }

    /// Percentage of capacity already taken, clamped to `0..=100`.
    #[must_use]
    pub fn fill_percent(&self) -> u8 {
        if self.event_capacity <= 0 {
            return 100;
        }
        let pct = self.signup_count.max(0).saturating_mul(100) / self.event_capacity;
        u8::try_from(pct.clamp(0, 100)).unwrap_or(100)
    }

    /// Label shown under the event summary, e.g. `"12/40 spots filled"`.
    #[must_use]
    pub fn spots_label(&self) -> String {
        format!("{}/{} spots filled", self.signup_count, self.event_capacity)
    }
}

impl Identified for Event {
    fn key(&self) -> &str {
        resolve_key(&self.id, self.object_id.as_deref())
    }
}

/// A reserved seat embedded in an [`Event`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reference")]
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub seat_number: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Signup {
    fn key(&self) -> &str {
        resolve_key(&self.id, self.object_id.as_deref())
    }
}

/// A registration row as listed by `GET /user-signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reference")]
    pub event_id: String,
    /// Owning event, when the backend populates it.
    #[serde(default)]
    pub event: Option<Event>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub seat_number: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Registration {
    /// Registrant display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Name of the owning event, if populated.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.event.as_ref().map(|e| e.event_name.as_str())
    }
}

impl Identified for Registration {
    fn key(&self) -> &str {
        resolve_key(&self.id, self.object_id.as_deref())
    }
}

/// One page of a list resource, normalized across endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// `GET /events` body. Older deployments return a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EventListResponse {
    Paged {
        events: Vec<Event>,
        #[serde(default, deserialize_with = "deserialize_u64_from_number")]
        total: u64,
    },
    Bare(Vec<Event>),
}

impl From<EventListResponse> for Page<Event> {
    fn from(value: EventListResponse) -> Self {
        match value {
            EventListResponse::Paged { events, total } => Self { items: events, total },
            EventListResponse::Bare(events) => {
                let total = events.len() as u64;
                Self { items: events, total }
            }
        }
    }
}

/// `GET /user-signup` body.
#[derive(Debug, Deserialize)]
pub struct RegistrationListResponse {
    pub registrations: Vec<Registration>,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total: u64,
}

impl From<RegistrationListResponse> for Page<Registration> {
    fn from(value: RegistrationListResponse) -> Self {
        Self { items: value.registrations, total: value.total }
    }
}

/// Body for `POST /events` and `PATCH /events/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub event_name: String,
    pub event_description: String,
    pub event_location: String,
    pub event_date: String,
    pub event_capacity: i64,
    pub prefix_seat_number: String,
    pub begin_seat_number: i64,
}

/// Body for `POST /user-signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Administrator identity as returned by `GET /auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(default, alias = "_id", alias = "sub")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "username")]
    pub name: Option<String>,
}

impl AdminProfile {
    /// Best available label for the toolbar.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("admin")
    }
}

/// `POST /auth/login` body. The backend may also set the cookie itself.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default, alias = "access_token")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<AdminProfile>,
}

/// Error envelope; `message` is a string or a list of validation strings.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: serde_json::Value,
}

impl ApiErrorBody {
    /// Flatten `message` into one displayable line.
    #[must_use]
    pub fn message_text(&self) -> Option<String> {
        match &self.message {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            serde_json::Value::Array(parts) => {
                let joined = parts
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                (!joined.is_empty()).then_some(joined)
            }
            _ => None,
        }
    }
}

fn resolve_key<'a>(id: &'a str, object_id: Option<&'a str>) -> &'a str {
    if id.is_empty() { object_id.unwrap_or_default() } else { id }
}

fn default_active() -> bool {
    true
}

/// Accept either a bare id string or a populated document with `id`/`_id`.
fn deserialize_reference<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Object(map) => map
            .get("id")
            .or_else(|| map.get("_id"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| D::Error::custom("reference object without id")),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected id string or object")),
    }
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u64")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        // Form round-trips sometimes send numeric strings.
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected integer string")),
        _ => Err(D::Error::custom("expected number")),
    }
}
