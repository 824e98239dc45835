use super::*;
use std::cell::{Cell, RefCell};

/// Keeps the collection in memory. Counts saves so callers can check when
/// the book was persisted.
#[derive(Default)]
pub struct MemStorage {
    pub data: RefCell<Option<Vec<Contact>>>,
    saves: Cell<usize>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(Some(contacts)),
            saves: Cell::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Option<Vec<Contact>> {
        self.data.borrow().clone()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        Ok(self.snapshot())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(contacts.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
