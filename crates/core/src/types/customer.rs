//! Customer record domain types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::CustomerId;

/// Customer gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other / undisclosed.
    Other,
}

impl Gender {
    /// Parse a gender from a form/URL parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Get the wire string for this gender.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// A customer's postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Street number. Non-negative integer when present.
    pub street_number: Option<u32>,
    /// Street name.
    pub street_name: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Postal code. Kept as text - not numeric everywhere.
    pub postcode: Option<String>,
}

/// Profile picture URLs at several resolutions.
///
/// Display-only: never mutated by the coordinators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portrait {
    /// Large resolution URL.
    pub large: Option<String>,
    /// Medium resolution URL.
    pub medium: Option<String>,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
}

/// A customer record in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Identifier assigned by the Directory Service. Immutable.
    pub id: CustomerId,
    /// Unique login name. Required and unique at creation time only.
    pub username: String,
    /// Honorific title (e.g. "Ms", "Dr").
    pub title: Option<String>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Landline phone number.
    pub phone: Option<String>,
    /// Mobile phone number.
    pub cell: Option<String>,
    /// Gender.
    pub gender: Option<Gender>,
    /// Birth date (ISO 8601).
    pub birth_date: Option<String>,
    /// Age in years, derived from the birth date by the service.
    pub age: Option<i64>,
    /// Registration timestamp (ISO 8601).
    pub registered_date: Option<String>,
    /// Postal address.
    pub address: PostalAddress,
    /// Profile picture URLs.
    pub portrait: Portrait,
}

impl CustomerRecord {
    /// Full display name, title included when present.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => {
                format!("{title} {} {}", self.first_name, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Registration timestamp parsed from the wire string, when it is
    /// valid RFC 3339.
    #[must_use]
    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.registered_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Birth date parsed from the wire string. The service sends plain
    /// `YYYY-MM-DD` dates.
    #[must_use]
    pub fn birth_date_parsed(&self) -> Option<NaiveDate> {
        let raw = self.birth_date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Single-line location summary for list views.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        let city = self.address.city.as_deref().unwrap_or("");
        let country = self.address.country.as_deref().unwrap_or("");

        if !city.is_empty() && !country.is_empty() {
            Some(format!("{city}, {country}"))
        } else if !city.is_empty() {
            Some(city.to_string())
        } else if !country.is_empty() {
            Some(country.to_string())
        } else {
            None
        }
    }
}
