use crate::{
    cli::{
        EMPTY_BOOK, NO_RESULTS,
        command::{Cli, Commands},
        format_listing, format_statistics,
    },
    prelude::{AppError, Contact, ContactBook, JsonStorage, LoadStatus, Uuid},
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let (mut book, status) = ContactBook::open(Box::new(JsonStorage::new(cli.file)))?;

    match status {
        LoadStatus::Fresh => {
            eprintln!(
                "No address book found at {}, starting fresh.",
                book.location()
            );
        }
        LoadStatus::Recovered => {
            eprintln!(
                "Warning: {} is corrupt or empty, starting with an empty address book.",
                book.location()
            );
        }
        LoadStatus::Loaded(_) => {}
    }

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            phone,
            street,
            city,
        } => {
            let new_contact = Contact::new(first_name, last_name, phone, street, city);

            let added = book.add_contact(new_contact)?;

            println!("Contact added successfully");
            println!("{added}");
            Ok(())
        }

        Commands::List { ids } => {
            println!("{}", format_listing(book.contact_list(), ids, EMPTY_BOOK));
            Ok(())
        }

        Commands::Search { by, value } => {
            let results = book.search(by, &value);

            println!("{}", format_listing(results, false, NO_RESULTS));
            Ok(())
        }

        Commands::Delete { entry, id } => {
            let removed = match (entry, id) {
                (_, Some(id)) => book.remove_by_id(&id.trim().parse::<Uuid>()?)?,
                (Some(entry), None) => match book.remove(&entry) {
                    Err(AppError::NotFound(_)) if strip_listing_number(&entry) != entry => {
                        book.remove(strip_listing_number(&entry))?
                    }
                    removed => removed?,
                },
                (None, None) => {
                    return Err(AppError::Validation(
                        "Provide the listing line or --id of the address to delete".to_string(),
                    ));
                }
            };

            println!("Contact deleted successfully");
            println!("{removed}");
            Ok(())
        }

        Commands::Stats => {
            println!("{}", format_statistics(&book.city_statistics()));
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let report = book.import_contacts_from_csv(src.as_deref())?;

            for (row, reason) in &report.skipped {
                eprintln!("Skipped row {row}: {reason}");
            }

            println!("Successfully imported {} contacts.", report.added);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = book.export_contacts_to_csv(des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

/// Accepts a line copied from `list` output, with or without its number.
fn strip_listing_number(entry: &str) -> &str {
    let trimmed = entry.trim_start();

    match trimmed.split_once(". ") {
        Some((number, rest))
            if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) =>
        {
            rest
        }
        _ => entry,
    }
}
