//! Wire-format conversion functions.

use rolodex_core::{CustomerId, CustomerRecord, Gender, Portrait, PostalAddress};

use super::{CustomerPage, CustomerUpdate, NewCustomer, wire};

// =============================================================================
// Response conversions
// =============================================================================

/// Convert a wire customer into the domain record.
pub fn convert_user(user: wire::User) -> CustomerRecord {
    let address = user.address.map(convert_address).unwrap_or_default();
    let portrait = user.picture.map(convert_picture).unwrap_or_default();

    CustomerRecord {
        id: CustomerId::new(user.id),
        username: user.username,
        title: user.title,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        phone: user.phone,
        cell: user.cell,
        // Unknown gender strings degrade to None rather than failing the page
        gender: user.gender.as_deref().and_then(Gender::from_str_param),
        birth_date: user.birth_date,
        age: user.age,
        registered_date: user.registered_date,
        address,
        portrait,
    }
}

fn convert_address(address: wire::Address) -> PostalAddress {
    PostalAddress {
        street_number: address.street_number,
        street_name: address.street_name,
        city: address.city,
        state: address.state,
        country: address.country,
        postcode: address.postcode,
    }
}

fn convert_picture(picture: wire::Picture) -> Portrait {
    Portrait {
        large: picture.large,
        medium: picture.medium,
        thumbnail: picture.thumbnail,
    }
}

/// Convert a wire page into a [`CustomerPage`], shifting the 1-based wire
/// `page` back to the 0-based indexing the coordinators use.
pub fn convert_page(page: wire::UserPage) -> CustomerPage {
    CustomerPage {
        records: page.data.into_iter().map(convert_user).collect(),
        total: page.total,
        page_index: page.page.saturating_sub(1),
        page_size: page.per_page,
    }
}

// =============================================================================
// Request conversions
// =============================================================================

fn build_location(
    street_number: Option<u32>,
    street_name: Option<&String>,
    city: Option<&String>,
    state: Option<&String>,
    country: Option<&String>,
    postcode: Option<&String>,
) -> Option<wire::LocationPayload> {
    let street = if street_number.is_some() || street_name.is_some() {
        Some(wire::StreetPayload {
            number: street_number,
            name: street_name.cloned(),
        })
    } else {
        None
    };

    if street.is_none()
        && city.is_none()
        && state.is_none()
        && country.is_none()
        && postcode.is_none()
    {
        return None;
    }

    Some(wire::LocationPayload {
        street,
        city: city.cloned(),
        state: state.cloned(),
        country: country.cloned(),
        postcode: postcode.cloned(),
    })
}

/// Build the nested creation payload for `POST /api/users`.
pub fn build_create_payload(customer: &NewCustomer) -> wire::CreatePayload {
    wire::CreatePayload {
        name: wire::NamePayload {
            title: customer.title.clone(),
            first: customer.first_name.clone(),
            last: customer.last_name.clone(),
        },
        login: wire::LoginPayload {
            username: customer.username.clone(),
            password: customer.password.clone(),
        },
        location: build_location(
            customer.street_number,
            customer.street_name.as_ref(),
            customer.city.as_ref(),
            customer.state.as_ref(),
            customer.country.as_ref(),
            customer.postcode.as_ref(),
        )
        .unwrap_or_default(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        cell: customer.cell.clone(),
        gender: customer.gender.map(|g| g.as_str().to_string()),
        birth_date: customer.birth_date.clone(),
    }
}

/// Build the partial update payload for `PUT /api/users/{id}`.
pub fn build_update_payload(update: &CustomerUpdate) -> wire::UpdatePayload {
    let name = if update.title.is_some() || update.first_name.is_some() || update.last_name.is_some()
    {
        Some(wire::NameUpdatePayload {
            title: update.title.clone(),
            first: update.first_name.clone(),
            last: update.last_name.clone(),
        })
    } else {
        None
    };

    wire::UpdatePayload {
        name,
        location: build_location(
            update.street_number,
            update.street_name.as_ref(),
            update.city.as_ref(),
            update.state.as_ref(),
            update.country.as_ref(),
            update.postcode.as_ref(),
        ),
        email: update.email.clone(),
        phone: update.phone.clone(),
        cell: update.cell.clone(),
        gender: update.gender.map(|g| g.as_str().to_string()),
        birth_date: update.birth_date.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user_json() -> serde_json::Value {
        serde_json::json!({
            "id": "3fa6f1c2-0b1d-4d6e-9f3a-7a8a4c1d9e02",
            "username": "grace.h",
            "title": "Dr",
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "phone": "(555) 123-4567",
            "cell": null,
            "gender": "female",
            "birthDate": "1906-12-09",
            "age": 85,
            "registeredDate": "2020-04-01T12:00:00Z",
            "address": {
                "streetNumber": 1701,
                "streetName": "Navy Way",
                "city": "Arlington",
                "state": "VA",
                "country": "USA",
                "postcode": "22201"
            },
            "picture": {
                "large": "https://cdn.example.com/p/l.jpg",
                "medium": "https://cdn.example.com/p/m.jpg",
                "thumbnail": "https://cdn.example.com/p/t.jpg"
            }
        })
    }

    #[test]
    fn test_convert_user_full() {
        let user: wire::User = serde_json::from_value(sample_user_json()).unwrap();
        let record = convert_user(user);

        assert_eq!(record.id.as_str(), "3fa6f1c2-0b1d-4d6e-9f3a-7a8a4c1d9e02");
        assert_eq!(record.first_name, "Grace");
        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.address.street_number, Some(1701));
        assert_eq!(record.portrait.thumbnail.as_deref(), Some("https://cdn.example.com/p/t.jpg"));
    }

    #[test]
    fn test_convert_user_unknown_gender_degrades() {
        let mut value = sample_user_json();
        value["gender"] = serde_json::json!("nonbinary-unknown-to-service");
        let user: wire::User = serde_json::from_value(value).unwrap();

        assert_eq!(convert_user(user).gender, None);
    }

    #[test]
    fn test_convert_page_shifts_to_zero_based() {
        let page: wire::UserPage = serde_json::from_value(serde_json::json!({
            "page": 3,
            "perPage": 10,
            "total": 57,
            "data": [sample_user_json()]
        }))
        .unwrap();

        let converted = convert_page(page);
        assert_eq!(converted.page_index, 2);
        assert_eq!(converted.page_size, 10);
        assert_eq!(converted.total, 57);
        assert_eq!(converted.records.len(), 1);
    }

    #[test]
    fn test_build_create_payload_nests_objects() {
        let customer = NewCustomer {
            title: Some("Dr".to_string()),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            username: "grace.h".to_string(),
            password: "s3cretplaceholder".to_string(),
            city: Some("Arlington".to_string()),
            street_number: Some(1701),
            street_name: Some("Navy Way".to_string()),
            ..NewCustomer::default()
        };

        let json = serde_json::to_value(build_create_payload(&customer)).unwrap();
        assert_eq!(json["name"]["first"], "Grace");
        assert_eq!(json["login"]["username"], "grace.h");
        assert_eq!(json["location"]["street"]["number"], 1701);
        assert_eq!(json["location"]["city"], "Arlington");
        assert_eq!(json["email"], "grace@example.com");
        // Unset optional fields stay off the wire
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_build_update_payload_is_partial() {
        let update = CustomerUpdate {
            first_name: Some("Grace".to_string()),
            city: Some("Arlington".to_string()),
            ..CustomerUpdate::default()
        };

        let json = serde_json::to_value(build_update_payload(&update)).unwrap();
        assert_eq!(json["name"]["first"], "Grace");
        assert!(json["name"].get("last").is_none());
        assert_eq!(json["location"]["city"], "Arlington");
        assert!(json.get("email").is_none());

        let empty = serde_json::to_value(build_update_payload(&CustomerUpdate::default())).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }
}
