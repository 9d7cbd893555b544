//! Test support for Rolodex integration tests.
//!
//! The Directory Service is stood in for by a [`wiremock::MockServer`];
//! every test builds a session against it and drives the coordinators the
//! way a screen would. Helpers here keep the JSON fixtures in one place.

#![allow(clippy::missing_panics_doc)]

use std::time::Duration;

use serde_json::{Value, json};
use url::Url;
use wiremock::MockServer;

use rolodex_directory::{DirectoryClient, DirectoryConfig, DirectorySession};

/// Debounce window used in tests. Short enough to keep tests fast, long
/// enough that a burst of keystrokes lands inside one window.
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(50);

/// How long tests wait for a debounced fetch to have fired.
pub const DEBOUNCE_SETTLE: Duration = Duration::from_millis(250);

/// Build a configuration pointing at the mock server.
#[must_use]
pub fn test_config(server: &MockServer) -> DirectoryConfig {
    let base_url: Url = server.uri().parse().expect("mock server URI is a URL");
    let mut config = DirectoryConfig::with_base_url(base_url);
    config.debounce = TEST_DEBOUNCE;
    config
}

/// Build a session over a client pointed at the mock server.
#[must_use]
pub fn test_session(server: &MockServer) -> DirectorySession {
    let config = test_config(server);
    let client = DirectoryClient::new(&config).expect("HTTP client builds");
    DirectorySession::new(client, &config)
}

/// A wire-format user object.
#[must_use]
pub fn user_json(id: &str, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "username": format!("{}.{}", first_name.to_lowercase(), last_name.to_lowercase()),
        "title": null,
        "firstName": first_name,
        "lastName": last_name,
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "phone": "(555) 123-4567",
        "cell": null,
        "gender": "female",
        "birthDate": "1990-01-01",
        "age": 36,
        "registeredDate": "2020-04-01T12:00:00Z",
        "address": {
            "streetNumber": 42,
            "streetName": "Main St",
            "city": "Springfield",
            "state": "IL",
            "country": "USA",
            "postcode": "62701"
        },
        "picture": {
            "large": null,
            "medium": null,
            "thumbnail": null
        }
    })
}

/// A wire-format list page. `page` is 1-based as on the wire.
#[must_use]
pub fn page_json(page: u32, per_page: u32, total: u64, data: Vec<Value>) -> Value {
    json!({
        "page": page,
        "perPage": per_page,
        "total": total,
        "data": data,
    })
}

/// A create acknowledgement.
#[must_use]
pub fn create_ack_json(uuid: &str) -> Value {
    json!({
        "success": true,
        "uuid": uuid,
        "message": "created",
    })
}

/// A mutation acknowledgement for update/delete.
#[must_use]
pub fn mutation_ack_json(success: bool) -> Value {
    json!({
        "success": success,
        "message": if success { "ok" } else { "rejected" },
    })
}
