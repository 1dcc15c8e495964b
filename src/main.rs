//! Contact Book - command-line front end
//!
//! A thin view over the contact store: every command validates its input,
//! calls the store, and prints the resulting contacts to stdout. Logs go to
//! stderr.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use contact_book::search::{self, SortField};
use contact_book::store::LoadOutcome;
use contact_book::validation::validate_draft;
use contact_book::{transfer, Config, Contact, ContactDraft, ContactStore, JsonContactRepository};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(author, version, about = "Manage personal contacts stored in a local JSON file")]
struct Cli {
    /// Storage file (overrides CONTACT_BOOK_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contacts
    List {
        /// Column to sort by: name, phone, email or address
        #[arg(short, long)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Search contacts by name or phone
    Search {
        /// Case-insensitive substring; formatting in phone numbers is ignored
        query: String,
    },

    /// Add a new contact
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        phone: String,

        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, default_value = "")]
        address: String,
    },

    /// Update a contact; omitted fields keep their current value
    Update {
        /// Contact ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        address: Option<String>,
    },

    /// Delete a contact
    Remove {
        /// Contact ID
        id: String,
    },

    /// Import contacts from a CSV file with a name,phone,email,address header
    Import { path: PathBuf },

    /// Export all contacts to a CSV file
    Export { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(data_file) = cli.data_file {
        config = config.with_data_file(data_file);
    }

    // Initialize logging (stderr only so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using contact file {}", config.data_file.display());
    let mut store = ContactStore::open(JsonContactRepository::new(&config.data_file));
    if let LoadOutcome::Unreadable(reason) = store.load_outcome() {
        eprintln!("warning: could not read contacts ({}); starting empty", reason);
    }

    match cli.command {
        Commands::List { sort, desc } => {
            let mut view: Vec<&Contact> = store.all().iter().collect();
            if let Some(field) = sort {
                search::sort(&mut view, field, desc);
            }
            print_contacts(&view);
        }
        Commands::Search { query } => {
            let found: Vec<&Contact> = store.search(&query).collect();
            print_contacts(&found);
        }
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let draft = ContactDraft::new(name, phone)
                .with_email(email)
                .with_address(address);
            validate_draft(&draft)?;
            let contact = store.add(draft)?;
            println!("Added {}", contact.id);
        }
        Commands::Update {
            id,
            name,
            phone,
            email,
            address,
        } => {
            let Some(current) = store.get(&id) else {
                bail!("Contact not found: {}", id);
            };
            let current = current.to_draft();
            let draft = ContactDraft {
                name: name.unwrap_or(current.name),
                phone: phone.unwrap_or(current.phone),
                email: email.unwrap_or(current.email),
                address: address.unwrap_or(current.address),
            };
            validate_draft(&draft)?;
            let contact = store.update(&id, draft)?;
            println!("Updated {}", contact.id);
        }
        Commands::Remove { id } => {
            let contact = store.remove(&id)?;
            println!("Removed {} ({})", contact.id, contact.name);
        }
        Commands::Import { path } => {
            let report = transfer::import(&mut store, &path)?;
            println!("{} contacts imported", report.imported);
            if report.skipped() > 0 {
                println!(
                    "{} rows skipped ({} duplicate phone, {} missing name/phone, {} invalid email)",
                    report.skipped(),
                    report.skipped_duplicates,
                    report.skipped_malformed,
                    report.skipped_invalid
                );
            }
        }
        Commands::Export { path } => {
            if store.is_empty() {
                println!("No contacts to export.");
                return Ok(());
            }
            let written = transfer::export(store.all(), &path)?;
            println!("{} contacts exported to {}", written, path.display());
        }
    }

    if let Some(reason) = store.last_save().and_then(|outcome| outcome.warning()) {
        error!("Changes were not saved: {}", reason);
        eprintln!("warning: changes kept for this session only: {}", reason);
    }

    Ok(())
}

fn print_contacts(contacts: &[&Contact]) {
    if contacts.is_empty() {
        println!("No contacts.");
        return;
    }
    for contact in contacts {
        let address = contact.address.replace('\n', ", ");
        println!(
            "{}\t{}\t{}\t{}\t{}",
            contact.id, contact.name, contact.phone, contact.email, address
        );
    }
}
