//! Directory Service REST client.
//!
//! The Directory Service is the remote system of record for customer data.
//! It exposes list/get/create/update/delete operations over `/api/users`
//! with server-side pagination and search.
//!
//! # Architecture
//!
//! - Plain REST+JSON over `reqwest` - no local cache, no sync
//! - Explicitly constructed and injectable; clones share one connection pool
//! - Non-2xx responses are treated uniformly as failure and surfaced with
//!   status code and body text; `404` gets its own variant
//! - The wire format's 1-based `page` is converted to the 0-based
//!   [`ListQuery`] indexing at this boundary

use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use rolodex_core::{CustomerId, CustomerRecord, Gender, ListQuery};

use crate::config::DirectoryConfig;

mod conversions;
pub mod wire;

use conversions::{build_create_payload, build_update_payload, convert_page, convert_user};

/// Errors that can occur when talking to the Directory Service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// HTTP request failed (connection, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Directory service returned {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body text (may be empty).
        body: String,
    },

    /// The target record does not exist server-side.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service answered 2xx but reported `success: false`.
    #[error("Rejected by directory service: {0}")]
    Rejected(String),
}

/// One fetched page of customer records.
#[derive(Debug, Clone)]
pub struct CustomerPage {
    /// Records on this page.
    pub records: Vec<CustomerRecord>,
    /// Total number of matching records across all pages.
    pub total: u64,
    /// 0-based index of this page.
    pub page_index: u32,
    /// Page size the service applied.
    pub page_size: u32,
}

/// Input for creating a customer record.
///
/// The server assigns the identifier; `password` is a placeholder the
/// service may replace (see [`placeholder_password`]).
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    /// Honorific title.
    pub title: Option<String>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Placeholder password for the login object.
    pub password: String,
    /// Landline phone number.
    pub phone: Option<String>,
    /// Mobile phone number.
    pub cell: Option<String>,
    /// Gender.
    pub gender: Option<Gender>,
    /// Birth date (ISO 8601).
    pub birth_date: Option<String>,
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

/// Input for updating a customer record.
///
/// All fields are optional - only provided fields are sent.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    /// New honorific title.
    pub title: Option<String>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New landline phone number.
    pub phone: Option<String>,
    /// New mobile phone number.
    pub cell: Option<String>,
    /// New gender.
    pub gender: Option<Gender>,
    /// New birth date (ISO 8601).
    pub birth_date: Option<String>,
    /// New street number.
    pub street_number: Option<u32>,
    /// New street name.
    pub street_name: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state or province.
    pub state: Option<String>,
    /// New country.
    pub country: Option<String>,
    /// New postal code.
    pub postcode: Option<String>,
}

/// Generate a random 16-character alphanumeric placeholder password.
///
/// Creation payloads must carry a `login.password` field, but password
/// policy belongs to the Directory Service; the placeholder is never shown
/// to anyone and the service is free to replace it.
#[must_use]
pub fn placeholder_password() -> String {
    use rand::{Rng, distr::Alphanumeric};

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Directory Service REST client.
///
/// Cheap to clone; all clones share one `reqwest` connection pool.
#[derive(Clone)]
pub struct DirectoryClient {
    inner: Arc<DirectoryClientInner>,
}

struct DirectoryClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Create a new Directory Service client.
    ///
    /// # Arguments
    ///
    /// * `config` - Directory Service configuration (base URL, timeout)
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built with
    /// the configured timeout.
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(DirectoryClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        format!("{base}/api/{path}")
    }

    /// Get a paginated, searchable list of customers.
    ///
    /// The wire protocol's 1-based `page` parameter is derived from the
    /// query's 0-based `page_index` here and converted back when
    /// interpreting the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers non-2xx.
    #[instrument(skip(self))]
    pub async fn list_customers(&self, query: &ListQuery) -> Result<CustomerPage, DirectoryError> {
        let mut request = self
            .inner
            .client
            .get(self.endpoint("users"))
            .query(&[("page", query.page_index + 1), ("perPage", query.page_size)])
            .query(&[("sortBy", query.sort_key.as_str())]);

        if !query.search_term.is_empty() {
            request = request.query(&[("search", query.search_term.as_str())]);
        }

        let response = request.send().await?;
        let response = Self::check_status(response).await?;

        let page: wire::UserPage = response.json().await?;
        Ok(convert_page(page))
    }

    /// Get a single customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if the record does not exist, or
    /// another error if the request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: &CustomerId) -> Result<CustomerRecord, DirectoryError> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("users/{id}")))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let user: wire::User = response.json().await?;
        Ok(convert_user(user))
    }

    /// Create a new customer record.
    ///
    /// # Returns
    ///
    /// Returns the server-assigned identifier on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers non-2xx,
    /// or the service reports `success: false`.
    #[instrument(skip(self, customer), fields(username = %customer.username))]
    pub async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<CustomerId, DirectoryError> {
        let payload = build_create_payload(customer);

        let response = self
            .inner
            .client
            .post(self.endpoint("users"))
            .json(&payload)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let ack: wire::CreateAck = response.json().await?;
        if !ack.success {
            return Err(DirectoryError::Rejected(
                ack.message.unwrap_or_else(|| "create failed".to_string()),
            ));
        }

        ack.uuid.map(CustomerId::new).ok_or_else(|| {
            DirectoryError::Rejected("no identifier returned from create".to_string())
        })
    }

    /// Update an existing customer record.
    ///
    /// Only the fields set in `update` are sent.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if the record vanished server-side,
    /// or another error if the request fails or the service reports
    /// `success: false`.
    #[instrument(skip(self, update), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        update: &CustomerUpdate,
    ) -> Result<(), DirectoryError> {
        let payload = build_update_payload(update);

        let response = self
            .inner
            .client
            .put(self.endpoint(&format!("users/{id}")))
            .json(&payload)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let ack: wire::MutationAck = response.json().await?;
        if !ack.success {
            return Err(DirectoryError::Rejected(
                ack.message.unwrap_or_else(|| "update failed".to_string()),
            ));
        }

        Ok(())
    }

    /// Delete a customer record. Terminal - no soft-delete or undo.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if the record vanished server-side,
    /// or another error if the request fails or the service reports
    /// `success: false`.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: &CustomerId) -> Result<(), DirectoryError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&format!("users/{id}")))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let ack: wire::MutationAck = response.json().await?;
        if !ack.success {
            return Err(DirectoryError::Rejected(
                ack.message.unwrap_or_else(|| "delete failed".to_string()),
            ));
        }

        Ok(())
    }

    /// Map non-2xx responses to errors, reading the body for context.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DirectoryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            return Err(DirectoryError::NotFound(if body.is_empty() {
                "resource not found".to_string()
            } else {
                body
            }));
        }

        Err(DirectoryError::Status {
            code: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        let err = DirectoryError::NotFound("customer-123".to_string());
        assert_eq!(err.to_string(), "Not found: customer-123");
    }

    #[test]
    fn test_status_error_display() {
        let err = DirectoryError::Status {
            code: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Directory service returned 502: bad gateway");
    }

    #[test]
    fn test_rejected_error_display() {
        let err = DirectoryError::Rejected("username taken".to_string());
        assert_eq!(
            err.to_string(),
            "Rejected by directory service: username taken"
        );
    }

    #[test]
    fn test_new_builds_with_configured_timeout() {
        let config = crate::config::DirectoryConfig::with_base_url(
            "https://directory.example.com"
                .parse()
                .expect("static URL parses"),
        );
        let client = DirectoryClient::new(&config).expect("client builds");
        assert_eq!(client.base_url().as_str(), "https://directory.example.com/");
    }

    #[test]
    fn test_placeholder_password_shape() {
        let password = placeholder_password();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        // Two draws should essentially never collide.
        assert_ne!(password, placeholder_password());
    }
}
