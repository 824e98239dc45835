pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub const EMPTY_BOOK: &str = "Address book is empty. Add the first address!";
pub const NO_RESULTS: &str = "No results.";
pub const NO_STATISTICS: &str = "No data to generate statistics.";

pub fn listing_line(i: usize, contact: &Contact, with_id: bool) -> String {
    if with_id {
        format!("{i:>3}. {contact}  [{}]", contact.id)
    } else {
        format!("{i:>3}. {contact}")
    }
}

/// Numbered listing, or `placeholder` when there is nothing to show.
pub fn format_listing<'a, I>(contacts: I, with_id: bool, placeholder: &str) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    let lines: Vec<String> = contacts
        .into_iter()
        .enumerate()
        .map(|(i, c)| listing_line(i + 1, c, with_id))
        .collect();

    if lines.is_empty() {
        placeholder.to_string()
    } else {
        lines.join("\n")
    }
}

pub fn format_statistics(stats: &[(String, usize)]) -> String {
    if stats.is_empty() {
        return NO_STATISTICS.to_string();
    }

    let mut report = String::from("Addresses per city:");
    for (city, count) in stats {
        report.push_str(&format!("\n- {city}: {count}"));
    }
    report
}
