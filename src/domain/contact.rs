use super::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single address book entry.
///
/// Field names on disk are the Polish keys of the address book file
/// (`imie`, `nazwisko`, `telefon`, `ulica`, `miasto`), so existing files load
/// unchanged.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    // Nil until the book assigns one; files written before ids existed have none.
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,

    #[serde(rename = "imie")]
    pub first_name: String,

    #[serde(rename = "nazwisko")]
    pub last_name: String,

    #[serde(rename = "telefon", default, deserialize_with = "deserialize_phone")]
    pub phone: String,

    #[serde(rename = "ulica")]
    pub street: String,

    #[serde(rename = "miasto")]
    pub city: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn required_fields() -> String {
        "First name, last name, street and city are required".to_string()
    }

    pub fn missing(fields: &[&str]) -> String {
        format!("{} (missing: {})", Self::required_fields(), fields.join(", "))
    }
}

impl Contact {
    pub fn new(
        first_name: String,
        last_name: String,
        phone: String,
        street: String,
        city: String,
    ) -> Self {
        Contact {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            phone,
            street,
            city,
        }
    }

    /// Copy of the contact with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Contact {
            id: self.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("street", &self.street),
            ("city", &self.city),
        ];

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(ValidationReq::missing(&missing)))
        }
    }

    /// Two contacts are the same person when first and last name match, ignoring case.
    pub fn same_person(&self, other: &Contact) -> bool {
        self.first_name.to_lowercase() == other.first_name.to_lowercase()
            && self.last_name.to_lowercase() == other.last_name.to_lowercase()
    }

    pub fn already_exist(&self, contactlist: &[Contact]) -> bool {
        contactlist.iter().any(|cont| cont.same_person(self))
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)?;

        if !self.phone.is_empty() {
            write!(f, ", tel: {}", self.phone)?;
        }

        write!(f, ", {}, {}", self.street, self.city)
    }
}

fn deserialize_phone<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default()) // null means no phone
}

/// Line shown for a contact in listings. Removal by display string matches on this.
pub fn render_display(contact: &Contact) -> String {
    contact.to_string()
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    fn anna() -> Contact {
        Contact::new(
            "Anna".to_string(),
            "Nowak".to_string(),
            "".to_string(),
            "Polna 2".to_string(),
            "Łódź".to_string(),
        )
    }

    #[test]
    fn display_without_phone() {
        assert_eq!(render_display(&anna()), "Anna Nowak, Polna 2, Łódź");
    }

    #[test]
    fn display_with_phone() {
        let mut contact = anna();
        contact.phone = "600100200".to_string();

        assert_eq!(
            render_display(&contact),
            "Anna Nowak, tel: 600100200, Polna 2, Łódź"
        );
    }

    #[test]
    fn trimmed_strips_every_field() {
        let contact = Contact::new(
            "  Jan ".to_string(),
            "\tKowalski".to_string(),
            " 123 ".to_string(),
            "Długa 5  ".to_string(),
            " Gdańsk".to_string(),
        )
        .trimmed();

        assert_eq!(contact.first_name, "Jan");
        assert_eq!(contact.last_name, "Kowalski");
        assert_eq!(contact.phone, "123");
        assert_eq!(contact.street, "Długa 5");
        assert_eq!(contact.city, "Gdańsk");
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut contact = anna();
        contact.street = "   ".to_string();
        contact.city = String::new();

        assert_eq!(contact.missing_fields(), vec!["street", "city"]);

        match contact.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("street, city")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn phone_is_optional() {
        assert!(anna().validate().is_ok());
    }

    #[test]
    fn same_person_ignores_case() {
        let mut other = anna();
        other.first_name = "ANNA".to_string();
        other.last_name = "nowak".to_string();
        other.city = "Kraków".to_string();

        assert!(anna().same_person(&other));
        assert!(other.already_exist(&[anna()]));
    }

    #[test]
    fn deserializes_legacy_record_without_id_or_phone() -> Result<(), AppError> {
        let raw = r#"{"imie": "Ewa", "nazwisko": "Zając", "ulica": "Leśna 1", "miasto": "Poznań"}"#;
        let contact: Contact = serde_json::from_str(raw)?;

        assert_eq!(contact.first_name, "Ewa");
        assert_eq!(contact.phone, "");
        assert!(contact.id.is_nil());
        Ok(())
    }

    #[test]
    fn null_phone_reads_as_empty() -> Result<(), AppError> {
        let raw = r#"{"imie": "Ewa", "nazwisko": "Zając", "telefon": null, "ulica": "Leśna 1", "miasto": "Poznań"}"#;
        let contact: Contact = serde_json::from_str(raw)?;

        assert_eq!(contact.phone, "");
        assert_eq!(render_display(&contact), "Ewa Zając, Leśna 1, Poznań");
        Ok(())
    }
}
