use crate::prelude::Contact;
use clap::ValueEnum;

/// Contact field a search compares against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    #[value(alias = "imie")]
    FirstName,
    #[value(alias = "nazwisko")]
    LastName,
    #[value(alias = "telefon")]
    Phone,
    #[value(alias = "ulica")]
    Street,
    #[value(alias = "miasto")]
    City,
}

impl SearchField {
    pub fn value_of<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            SearchField::FirstName => &contact.first_name,
            SearchField::LastName => &contact.last_name,
            SearchField::Phone => &contact.phone,
            SearchField::Street => &contact.street,
            SearchField::City => &contact.city,
        }
    }

    /// Case-insensitive equality of the contact's field with `value`.
    pub fn matches(&self, contact: &Contact, value: &str) -> bool {
        self.value_of(contact).to_lowercase() == value.to_lowercase()
    }
}
