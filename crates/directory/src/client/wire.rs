//! Wire-format DTOs for the Directory Service JSON API.
//!
//! These mirror the service's camelCase payloads exactly. Domain conversions
//! live in the sibling `conversions` module; nothing outside the client
//! should depend on these shapes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Responses
// =============================================================================

/// Paginated list response from `GET /api/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    /// 1-based page number.
    pub page: u32,
    /// Page size the service applied.
    pub per_page: u32,
    /// Total matching records across all pages.
    pub total: u64,
    /// Records on this page.
    #[serde(default)]
    pub data: Vec<User>,
}

/// A customer record as the service serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Honorific title.
    pub title: Option<String>,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Landline phone number.
    pub phone: Option<String>,
    /// Mobile phone number.
    pub cell: Option<String>,
    /// Gender string (`male` / `female` / `other`).
    pub gender: Option<String>,
    /// Birth date (ISO 8601).
    pub birth_date: Option<String>,
    /// Age derived from the birth date.
    pub age: Option<i64>,
    /// Registration timestamp (ISO 8601).
    pub registered_date: Option<String>,
    /// Postal address.
    pub address: Option<Address>,
    /// Profile picture URLs.
    pub picture: Option<Picture>,
}

/// Postal address sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street number.
    pub street_number: Option<u32>,
    /// Street name.
    pub street_name: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
}

/// Profile picture sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    /// Large resolution URL.
    pub large: Option<String>,
    /// Medium resolution URL.
    pub medium: Option<String>,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
}

/// Acknowledgement for `POST /api/users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAck {
    /// Whether the service accepted the record.
    pub success: bool,
    /// Server-assigned identifier for the new record.
    pub uuid: Option<String>,
    /// Human-readable outcome message.
    pub message: Option<String>,
}

/// Acknowledgement for `PUT` / `DELETE` on `/api/users/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationAck {
    /// Whether the mutation was applied.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: Option<String>,
}

// =============================================================================
// Requests
// =============================================================================

/// Creation payload for `POST /api/users`.
///
/// The service expects nested `name` / `login` / `location` objects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    /// Name sub-object.
    pub name: NamePayload,
    /// Login sub-object.
    pub login: LoginPayload,
    /// Location sub-object.
    pub location: LocationPayload,
    /// Email address.
    pub email: String,
    /// Landline phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
    /// Gender string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Birth date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// Nested name object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePayload {
    /// Honorific title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First name.
    pub first: String,
    /// Last name.
    pub last: String,
}

/// Nested login object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    /// Unique login name.
    pub username: String,
    /// Placeholder password.
    pub password: String,
}

/// Nested location object.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    /// Street sub-object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<StreetPayload>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

/// Nested street object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetPayload {
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Partial update payload for `PUT /api/users/{id}`.
///
/// Only present fields are serialized; the service leaves the rest alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
    /// Name sub-object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NameUpdatePayload>,
    /// Location sub-object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationPayload>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Landline phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
    /// Gender string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Birth date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

/// Nested name object for partial updates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameUpdatePayload {
    /// Honorific title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}
