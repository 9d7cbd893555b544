//! Customer record commands.
//!
//! Every command goes through a [`DirectorySession`] so the terminal
//! behaves like any other presentation layer: drafts are validated before
//! anything is sent, deletes are confirmed, and a successful save is
//! followed by a list refresh.

#![allow(clippy::print_stdout)]

use std::io::Write;

use clap::Subcommand;
use thiserror::Error;

use rolodex_core::{CustomerId, ListQuery, SortKey};
use rolodex_directory::{
    ConfigError, DirectoryClient, DirectoryConfig, DirectoryError, DirectorySession, DraftField,
    FetchPhase, SubmitOutcome,
};

/// Errors that can occur during customer commands.
#[derive(Debug, Error)]
pub enum CustomerCommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Directory Service request failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Unknown sort key on the command line.
    #[error("Invalid sort key: {0}. Valid keys: name, email, username, city, country, registered")]
    InvalidSortKey(String),

    /// The draft failed validation; details were printed.
    #[error("Draft failed validation")]
    InvalidDraft,

    /// A coordinator captured a failure in its state.
    #[error("{0}")]
    Failed(String),

    /// Could not read the confirmation prompt.
    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

#[derive(Subcommand)]
pub enum CustomerAction {
    /// List customers with search, paging and sorting
    List {
        /// Free-text search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Records per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Sort key (name, email, username, city, country, registered)
        #[arg(long, default_value = "name")]
        sort_by: String,
    },
    /// Show one customer record
    Show {
        /// Customer identifier
        id: String,
    },
    /// Create a customer record
    Create {
        #[command(flatten)]
        fields: CustomerFields,
    },
    /// Update fields of a customer record
    Update {
        /// Customer identifier
        id: String,

        #[command(flatten)]
        fields: CustomerFields,
    },
    /// Delete a customer record
    Delete {
        /// Customer identifier
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Draft fields shared by `create` and `update`.
#[derive(clap::Args)]
pub struct CustomerFields {
    /// First name
    #[arg(short = 'f', long)]
    first_name: Option<String>,

    /// Last name
    #[arg(short = 'l', long)]
    last_name: Option<String>,

    /// Email address
    #[arg(short = 'e', long)]
    email: Option<String>,

    /// Login name (create only; immutable afterwards)
    #[arg(short = 'u', long)]
    username: Option<String>,

    /// Honorific title
    #[arg(long)]
    title: Option<String>,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Option<String>,

    /// Birth date (ISO 8601)
    #[arg(long)]
    birth_date: Option<String>,

    /// Landline phone number
    #[arg(long)]
    phone: Option<String>,

    /// Mobile phone number
    #[arg(long)]
    cell: Option<String>,

    /// Street number
    #[arg(long)]
    street_number: Option<String>,

    /// Street name
    #[arg(long)]
    street_name: Option<String>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// State or province
    #[arg(long)]
    state: Option<String>,

    /// Country
    #[arg(long)]
    country: Option<String>,

    /// Postal code
    #[arg(long)]
    postcode: Option<String>,
}

impl CustomerFields {
    fn entries(self) -> Vec<(DraftField, String)> {
        [
            (DraftField::FirstName, self.first_name),
            (DraftField::LastName, self.last_name),
            (DraftField::Email, self.email),
            (DraftField::Username, self.username),
            (DraftField::Title, self.title),
            (DraftField::Gender, self.gender),
            (DraftField::BirthDate, self.birth_date),
            (DraftField::Phone, self.phone),
            (DraftField::Cell, self.cell),
            (DraftField::StreetNumber, self.street_number),
            (DraftField::StreetName, self.street_name),
            (DraftField::City, self.city),
            (DraftField::State, self.state),
            (DraftField::Country, self.country),
            (DraftField::Postcode, self.postcode),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Run a customer command against the configured Directory Service.
pub async fn run(action: CustomerAction) -> Result<(), CustomerCommandError> {
    let config = DirectoryConfig::from_env()?;
    let client = DirectoryClient::new(&config)?;
    let session = DirectorySession::new(client.clone(), &config);

    match action {
        CustomerAction::List {
            search,
            page,
            page_size,
            sort_by,
        } => list(&session, &config, search, page, page_size, &sort_by).await,
        CustomerAction::Show { id } => show(&client, &id).await,
        CustomerAction::Create { fields } => {
            session.editor().load_new();
            submit(&session, fields).await
        }
        CustomerAction::Update { id, fields } => {
            let id = CustomerId::from(id.as_str());
            session.editor().load(&id).await;
            if let Some(message) = session.editor().snapshot().last_error {
                return Err(CustomerCommandError::Failed(message));
            }
            submit(&session, fields).await
        }
        CustomerAction::Delete { id, yes } => delete(&session, &id, yes).await,
    }
}

async fn list(
    session: &DirectorySession,
    config: &DirectoryConfig,
    search: String,
    page: u32,
    page_size: Option<u32>,
    sort_by: &str,
) -> Result<(), CustomerCommandError> {
    let sort_key = SortKey::from_str_param(sort_by)
        .ok_or_else(|| CustomerCommandError::InvalidSortKey(sort_by.to_string()))?;

    let query = ListQuery {
        search_term: search,
        page_index: page.saturating_sub(1),
        page_size: page_size.unwrap_or(config.page_size),
        sort_key,
    };

    session.list().apply_query(query).await;
    let snapshot = session.list().snapshot();

    if let FetchPhase::Failed(message) = snapshot.phase {
        return Err(CustomerCommandError::Failed(message));
    }

    for record in &snapshot.records {
        let location = record.location().unwrap_or_default();
        println!(
            "{}  {:<30} {:<30} {}",
            record.id,
            record.display_name(),
            record.email,
            location
        );
    }
    println!(
        "Page {}/{} - {} customers total",
        snapshot.query.page_index + 1,
        snapshot.page_count().max(1),
        snapshot.total
    );

    Ok(())
}

async fn show(client: &DirectoryClient, id: &str) -> Result<(), CustomerCommandError> {
    let record = client.get_customer(&CustomerId::from(id)).await?;

    println!("Id:         {}", record.id);
    println!("Name:       {}", record.display_name());
    println!("Username:   {}", record.username);
    println!("Email:      {}", record.email);
    println!("Phone:      {}", record.phone.as_deref().unwrap_or("-"));
    println!("Cell:       {}", record.cell.as_deref().unwrap_or("-"));
    println!(
        "Gender:     {}",
        record.gender.map_or("-", rolodex_core::Gender::as_str)
    );
    println!(
        "Birth date: {}",
        record.birth_date.as_deref().unwrap_or("-")
    );
    println!("Location:   {}", record.location().unwrap_or_default());
    println!(
        "Registered: {}",
        record.registered_date.as_deref().unwrap_or("-")
    );

    Ok(())
}

async fn submit(
    session: &DirectorySession,
    fields: CustomerFields,
) -> Result<(), CustomerCommandError> {
    for (field, value) in fields.entries() {
        session.editor().set_field(field, value);
    }

    match session.submit_draft().await {
        SubmitOutcome::Saved { id } => {
            println!("Saved customer {id}");
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in &errors {
                println!("  {}: {message}", field.label());
            }
            Err(CustomerCommandError::InvalidDraft)
        }
        SubmitOutcome::Failed(message) => Err(CustomerCommandError::Failed(message)),
    }
}

async fn delete(
    session: &DirectorySession,
    id: &str,
    yes: bool,
) -> Result<(), CustomerCommandError> {
    let id = CustomerId::from(id);
    let confirmed = yes || confirm(&format!("Delete customer {id}? [y/N] "))?;

    if session.delete_record(&id, confirmed).await {
        println!("Deleted customer {id}");
        return Ok(());
    }

    if confirmed {
        if let FetchPhase::Failed(message) = session.list().snapshot().phase {
            return Err(CustomerCommandError::Failed(message));
        }
        return Err(CustomerCommandError::Failed("delete failed".to_string()));
    }

    println!("Aborted");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keeps_only_provided_fields() {
        let fields = CustomerFields {
            first_name: Some("Grace".to_string()),
            last_name: None,
            email: Some("grace@example.com".to_string()),
            username: None,
            title: None,
            gender: None,
            birth_date: None,
            phone: None,
            cell: None,
            street_number: None,
            street_name: None,
            city: None,
            state: None,
            country: None,
            postcode: None,
        };

        let entries = fields.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, DraftField::FirstName);
        assert_eq!(entries[1].0, DraftField::Email);
    }

    #[test]
    fn test_invalid_sort_key_message() {
        let err = CustomerCommandError::InvalidSortKey("height".to_string());
        assert!(err.to_string().contains("height"));
    }
}
