use super::*;

use crate::storage::{ContactStore, stores::CsvStorage};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What opening the book found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Contacts were read successfully.
    Loaded(usize),
    /// Nothing stored yet; starting with an empty book.
    Fresh,
    /// Stored data could not be read; it was replaced by an empty book.
    Recovered,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: Vec<(usize, AppError)>,
}

/// The address book: contacts in insertion order, kept in sync with storage
/// after every change.
pub struct ContactBook {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn open(storage: Box<dyn ContactStore>) -> Result<(Self, LoadStatus), AppError> {
        let mut book = Self {
            mem: Vec::new(),
            storage,
        };
        let status = book.load()?;
        Ok((book, status))
    }

    /// Replaces the in-memory contacts with what storage holds.
    ///
    /// Corrupt data is not an error here: the book starts empty and the
    /// empty state is written back right away.
    pub fn load(&mut self) -> Result<LoadStatus, AppError> {
        match self.storage.load() {
            Ok(Some(contacts)) => {
                info!(
                    count = contacts.len(),
                    location = %self.storage.location(),
                    "loaded address book"
                );
                self.mem = contacts;

                let assigned = self.assign_missing_ids();
                if assigned > 0 {
                    // Ids must survive to the next run for delete by id to work.
                    info!(assigned, "assigned ids to stored contacts");
                    self.save()?;
                }
                Ok(LoadStatus::Loaded(self.mem.len()))
            }
            Ok(None) => {
                info!(location = %self.storage.location(), "no address book found, starting fresh");
                self.mem.clear();
                Ok(LoadStatus::Fresh)
            }
            Err(AppError::CorruptData(reason)) => {
                warn!(
                    location = %self.storage.location(),
                    %reason,
                    "address book is corrupt, starting fresh"
                );
                self.mem.clear();
                self.save()?;
                Ok(LoadStatus::Recovered)
            }
            Err(e) => Err(e),
        }
    }

    /// Gives a fresh id to every contact whose id is nil or already taken.
    fn assign_missing_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut assigned = 0;

        for contact in &mut self.mem {
            if contact.id.is_nil() || !seen.insert(contact.id) {
                contact.id = Uuid::new_v4();
                seen.insert(contact.id);
                assigned += 1;
            }
        }
        assigned
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)?;
        info!(
            count = self.mem.len(),
            medium = self.storage.get_medium(),
            "saved address book"
        );
        Ok(())
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// Validates and appends a contact without saving.
    fn insert(&mut self, candidate: &Contact) -> Result<usize, AppError> {
        let mut contact = candidate.trimmed();

        contact.validate()?;

        if contact.already_exist(&self.mem) {
            return Err(AppError::Duplicate(contact.full_name()));
        }

        if contact.id.is_nil() || self.mem.iter().any(|c| c.id == contact.id) {
            contact.id = Uuid::new_v4();
        }

        self.mem.push(contact);
        Ok(self.mem.len() - 1)
    }

    pub fn add_contact(&mut self, candidate: Contact) -> Result<&Contact, AppError> {
        let index = self.insert(&candidate)?;

        if let Err(e) = self.save() {
            self.mem.remove(index);
            return Err(e);
        }

        info!(id = %self.mem[index].id, "added contact");
        Ok(&self.mem[index])
    }

    /// Contacts whose `field` equals `value`, ignoring case, in insertion order.
    pub fn search(&self, field: SearchField, value: &str) -> Vec<&Contact> {
        self.mem
            .iter()
            .filter(|c| field.matches(c, value))
            .collect()
    }

    /// Removes the first contact whose display line is exactly `display_key`.
    pub fn remove(&mut self, display_key: &str) -> Result<Contact, AppError> {
        let index = self
            .mem
            .iter()
            .position(|c| render_display(c) == display_key)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        self.remove_at(index)
    }

    pub fn remove_by_id(&mut self, id: &Uuid) -> Result<Contact, AppError> {
        let index = self
            .mem
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        self.remove_at(index)
    }

    fn remove_at(&mut self, index: usize) -> Result<Contact, AppError> {
        let removed = self.mem.remove(index);

        if let Err(e) = self.save() {
            self.mem.insert(index, removed);
            return Err(e);
        }

        info!(id = %removed.id, "removed contact");
        Ok(removed)
    }

    /// Number of contacts per city, sorted by city name.
    pub fn city_statistics(&self) -> Vec<(String, usize)> {
        let mut cities: BTreeMap<String, usize> = BTreeMap::new();

        for contact in &self.mem {
            *cities.entry(contact.city.trim().to_string()).or_default() += 1;
        }

        cities.into_iter().collect()
    }

    pub fn import_contacts_from_csv(
        &mut self,
        path: Option<&Path>,
    ) -> Result<ImportReport, AppError> {
        let source = CsvStorage::new(path, None)?;
        let mut report = ImportReport::default();

        for (row, record) in source.load_rows()?.into_iter().enumerate() {
            let row = row + 1;
            match record.and_then(|contact| self.insert(&contact)) {
                Ok(_) => report.added += 1,
                Err(e) if e.is_recoverable() || matches!(e, AppError::Csv(_)) => {
                    warn!(row, error = %e, "skipping CSV row");
                    report.skipped.push((row, e));
                }
                Err(e) => return Err(e),
            }
        }

        if report.added > 0 {
            self.save()?;
        }

        info!(
            added = report.added,
            skipped = report.skipped.len(),
            "imported contacts"
        );
        Ok(report)
    }

    pub fn export_contacts_to_csv(
        &self,
        path: Option<&Path>,
    ) -> Result<(PathBuf, usize), AppError> {
        let destination = CsvStorage::new(None, path)?;
        destination.save(&self.mem)?;

        info!(
            count = self.mem.len(),
            path = %destination.dest.display(),
            "exported contacts"
        );
        Ok((destination.dest, self.mem.len()))
    }
}
