//! Record editor coordinator.
//!
//! Owns the draft behind the create/edit customer form. Every field is
//! held as entered text; validation runs over the whole draft and reports
//! per-field messages, and submission only reaches the Directory Service
//! once the draft validates.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{instrument, warn};

use rolodex_core::{CustomerId, CustomerRecord, Email, Gender, Phone};

use crate::client::{CustomerUpdate, DirectoryClient, NewCustomer, placeholder_password};

/// A field of the editor draft.
///
/// Ordered so validation errors render in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DraftField {
    Title,
    FirstName,
    LastName,
    Email,
    Username,
    Gender,
    BirthDate,
    Phone,
    Cell,
    StreetNumber,
    StreetName,
    City,
    State,
    Country,
    Postcode,
}

impl DraftField {
    /// Human-readable label for form rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Username => "Username",
            Self::Gender => "Gender",
            Self::BirthDate => "Birth date",
            Self::Phone => "Phone",
            Self::Cell => "Cell",
            Self::StreetNumber => "Street number",
            Self::StreetName => "Street name",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::Postcode => "Postcode",
        }
    }
}

/// Whether the editor is creating a new record or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Creating a record; the server will assign the identifier.
    Create,
    /// Editing the record with this identifier.
    Edit(CustomerId),
}

/// The form draft, every field as entered.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub gender: String,
    pub birth_date: String,
    pub phone: String,
    pub cell: String,
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: String,
}

impl Draft {
    fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Username => &self.username,
            DraftField::Gender => &self.gender,
            DraftField::BirthDate => &self.birth_date,
            DraftField::Phone => &self.phone,
            DraftField::Cell => &self.cell,
            DraftField::StreetNumber => &self.street_number,
            DraftField::StreetName => &self.street_name,
            DraftField::City => &self.city,
            DraftField::State => &self.state,
            DraftField::Country => &self.country,
            DraftField::Postcode => &self.postcode,
        }
    }

    fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Username => &mut self.username,
            DraftField::Gender => &mut self.gender,
            DraftField::BirthDate => &mut self.birth_date,
            DraftField::Phone => &mut self.phone,
            DraftField::Cell => &mut self.cell,
            DraftField::StreetNumber => &mut self.street_number,
            DraftField::StreetName => &mut self.street_name,
            DraftField::City => &mut self.city,
            DraftField::State => &mut self.state,
            DraftField::Country => &mut self.country,
            DraftField::Postcode => &mut self.postcode,
        };
        *slot = value;
    }

    fn from_record(record: &CustomerRecord) -> Self {
        Self {
            title: record.title.clone().unwrap_or_default(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            username: record.username.clone(),
            gender: record
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_default(),
            birth_date: record.birth_date.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            cell: record.cell.clone().unwrap_or_default(),
            street_number: record
                .address
                .street_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            street_name: record.address.street_name.clone().unwrap_or_default(),
            city: record.address.city.clone().unwrap_or_default(),
            state: record.address.state.clone().unwrap_or_default(),
            country: record.address.country.clone().unwrap_or_default(),
            postcode: record.address.postcode.clone().unwrap_or_default(),
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The record was saved; `id` is server-assigned in create mode.
    Saved {
        /// Identifier of the saved record.
        id: CustomerId,
    },
    /// The draft failed validation; nothing was sent.
    Invalid(BTreeMap<DraftField, String>),
    /// The Directory Service refused or the request failed; the draft is
    /// kept so the operator can retry.
    Failed(String),
}

/// Immutable view of the editor state at one point in time.
#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    /// Create or edit mode.
    pub mode: EditorMode,
    /// The draft as currently entered.
    pub draft: Draft,
    /// Validation errors from the last submit attempt.
    pub errors: BTreeMap<DraftField, String>,
    /// Whether a load or submit is in flight.
    pub busy: bool,
    /// Transport error from the last load or submit, if any.
    pub last_error: Option<String>,
}

struct EditorState {
    mode: EditorMode,
    draft: Draft,
    errors: BTreeMap<DraftField, String>,
    busy: bool,
    last_error: Option<String>,
}

struct EditorInner {
    client: DirectoryClient,
    state: Mutex<EditorState>,
}

/// Coordinator for the customer create/edit screen.
///
/// Cheap to clone; all clones share one state. Starts out in create mode
/// with a blank draft.
#[derive(Clone)]
pub struct EditorCoordinator {
    inner: Arc<EditorInner>,
}

impl EditorCoordinator {
    /// Create an editor over `client`, in create mode with a blank draft.
    #[must_use]
    pub fn new(client: DirectoryClient) -> Self {
        Self {
            inner: Arc::new(EditorInner {
                client,
                state: Mutex::new(EditorState {
                    mode: EditorMode::Create,
                    draft: Draft::default(),
                    errors: BTreeMap::new(),
                    busy: false,
                    last_error: None,
                }),
            }),
        }
    }

    /// Take an immutable snapshot of the current editor state.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        let state = self.lock_state();
        EditorSnapshot {
            mode: state.mode.clone(),
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            busy: state.busy,
            last_error: state.last_error.clone(),
        }
    }

    /// Reset to create mode with a blank draft.
    pub fn load_new(&self) {
        let mut state = self.lock_state();
        state.mode = EditorMode::Create;
        state.draft = Draft::default();
        state.errors.clear();
        state.last_error = None;
    }

    /// Enter edit mode with an already-fetched record as the draft.
    pub fn load_record(&self, record: &CustomerRecord) {
        let mut state = self.lock_state();
        state.mode = EditorMode::Edit(record.id.clone());
        state.draft = Draft::from_record(record);
        state.errors.clear();
        state.last_error = None;
    }

    /// Fetch a record and enter edit mode with its fields as the draft.
    ///
    /// On failure the editor stays in its previous mode with the error
    /// recorded in the snapshot.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn load(&self, id: &CustomerId) {
        {
            let mut state = self.lock_state();
            state.busy = true;
            state.last_error = None;
        }

        let result = self.inner.client.get_customer(id).await;

        let mut state = self.lock_state();
        state.busy = false;
        match result {
            Ok(record) => {
                state.mode = EditorMode::Edit(record.id.clone());
                state.draft = Draft::from_record(&record);
                state.errors.clear();
            }
            Err(e) => {
                warn!(error = %e, "failed to load record for editing");
                state.last_error = Some(e.to_string());
            }
        }
    }

    /// Record a field edit. Clears any validation error on that field.
    pub fn set_field(&self, field: DraftField, value: impl Into<String>) {
        let mut state = self.lock_state();
        state.draft.set(field, value.into());
        state.errors.remove(&field);
    }

    /// Validate the current draft without submitting.
    ///
    /// Returns per-field messages, empty when the draft is valid. The
    /// username is only required when creating; the Directory Service does
    /// not allow changing it afterwards.
    #[must_use]
    pub fn validate(&self) -> BTreeMap<DraftField, String> {
        let state = self.lock_state();
        validate_draft(&state.draft, &state.mode)
    }

    /// Validate and submit the draft.
    ///
    /// An invalid draft is returned as [`SubmitOutcome::Invalid`] without
    /// touching the network. A valid one is sent as a `POST` (create mode)
    /// or `PUT` (edit mode); success clears the draft back to create mode,
    /// failure keeps it intact for retry.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let (mode, draft) = {
            let mut state = self.lock_state();
            let errors = validate_draft(&state.draft, &state.mode);
            if !errors.is_empty() {
                state.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
            state.errors.clear();
            state.busy = true;
            state.last_error = None;
            (state.mode.clone(), state.draft.clone())
        };

        let result = match &mode {
            EditorMode::Create => {
                let customer = build_new_customer(&draft);
                self.inner.client.create_customer(&customer).await
            }
            EditorMode::Edit(id) => {
                let update = build_update(&draft);
                self.inner
                    .client
                    .update_customer(id, &update)
                    .await
                    .map(|()| id.clone())
            }
        };

        let mut state = self.lock_state();
        state.busy = false;
        match result {
            Ok(id) => {
                state.mode = EditorMode::Create;
                state.draft = Draft::default();
                SubmitOutcome::Saved { id }
            }
            Err(e) => {
                warn!(error = %e, "submit failed, draft retained");
                state.last_error = Some(e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, EditorState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate_draft(draft: &Draft, mode: &EditorMode) -> BTreeMap<DraftField, String> {
    let mut errors = BTreeMap::new();

    if draft.first_name.trim().is_empty() {
        errors.insert(DraftField::FirstName, "First name is required".to_string());
    }
    if draft.last_name.trim().is_empty() {
        errors.insert(DraftField::LastName, "Last name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(DraftField::Email, "Email is required".to_string());
    } else if let Err(e) = Email::parse(draft.email.trim()) {
        errors.insert(DraftField::Email, e.to_string());
    }

    if *mode == EditorMode::Create && draft.username.trim().is_empty() {
        errors.insert(DraftField::Username, "Username is required".to_string());
    }

    if !draft.gender.trim().is_empty() && Gender::from_str_param(draft.gender.trim()).is_none() {
        errors.insert(
            DraftField::Gender,
            "Gender must be male, female or other".to_string(),
        );
    }

    for (field, value) in [
        (DraftField::Phone, &draft.phone),
        (DraftField::Cell, &draft.cell),
    ] {
        if !value.trim().is_empty() {
            if let Err(e) = Phone::parse(value.trim()) {
                errors.insert(field, e.to_string());
            }
        }
    }

    let street_number = draft.street_number.trim();
    if !street_number.is_empty() {
        if !street_number.chars().all(|c| c.is_ascii_digit()) {
            errors.insert(
                DraftField::StreetNumber,
                "Street number must be digits only".to_string(),
            );
        } else if street_number.parse::<u32>().is_err() {
            // All digits but wider than the address field can hold.
            errors.insert(
                DraftField::StreetNumber,
                "Street number is too large".to_string(),
            );
        }
    }

    errors
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_new_customer(draft: &Draft) -> NewCustomer {
    NewCustomer {
        title: opt(&draft.title),
        first_name: draft.first_name.trim().to_string(),
        last_name: draft.last_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        username: draft.username.trim().to_string(),
        password: placeholder_password(),
        phone: opt(&draft.phone),
        cell: opt(&draft.cell),
        gender: Gender::from_str_param(draft.gender.trim()),
        birth_date: opt(&draft.birth_date),
        street_number: draft.street_number.trim().parse().ok(),
        street_name: opt(&draft.street_name),
        city: opt(&draft.city),
        state: opt(&draft.state),
        country: opt(&draft.country),
        postcode: opt(&draft.postcode),
    }
}

fn build_update(draft: &Draft) -> CustomerUpdate {
    CustomerUpdate {
        title: opt(&draft.title),
        first_name: opt(&draft.first_name),
        last_name: opt(&draft.last_name),
        email: opt(&draft.email),
        phone: opt(&draft.phone),
        cell: opt(&draft.cell),
        gender: Gender::from_str_param(draft.gender.trim()),
        birth_date: opt(&draft.birth_date),
        street_number: draft.street_number.trim().parse().ok(),
        street_name: opt(&draft.street_name),
        city: opt(&draft.city),
        state: opt(&draft.state),
        country: opt(&draft.country),
        postcode: opt(&draft.postcode),
    }
}
