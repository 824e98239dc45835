use crate::domain::SearchField;
use crate::storage::{DEFAULT_FILE_PATH, FILE_PATH_ENV};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple Address Book")]
pub struct Cli {
    /// Address book file
    #[arg(long, global = true, env = FILE_PATH_ENV, default_value = DEFAULT_FILE_PATH)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new address
    Add {
        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Phone number (optional)
        #[arg(long, default_value = "")]
        phone: String,

        /// Street and house number
        #[arg(long)]
        street: String,

        /// City
        #[arg(long)]
        city: String,
    },
    /// List every saved address
    List {
        /// Show contact ids next to each entry
        #[arg(long)]
        ids: bool,
    },
    /// Find addresses whose field equals the value, ignoring case
    Search {
        /// Field to compare
        #[arg(long, value_enum, default_value_t = SearchField::LastName)]
        by: SearchField,

        /// Value to look for
        value: String,
    },
    /// Delete an address by its listing line, or by id
    Delete {
        /// Listing line exactly as printed by `list`
        #[arg(required_unless_present = "id", conflicts_with = "id")]
        entry: Option<String>,

        /// Contact id as printed by `list --ids`
        #[arg(long)]
        id: Option<String>,
    },
    /// Count addresses per city
    Stats,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<PathBuf>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<PathBuf>,
    },
}
