pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Default location of the address book, relative to the working directory.
pub const DEFAULT_FILE_PATH: &str = "adresy_ksiazki.json";

/// Environment variable overriding [`DEFAULT_FILE_PATH`].
pub const FILE_PATH_ENV: &str = "ADDRESS_BOOK_FILE";

pub trait ContactStore {
    /// Reads the whole collection. `Ok(None)` means nothing has been stored yet.
    /// Unreadable content is reported as [`AppError::CorruptData`].
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError>;

    /// Replaces everything stored with `contacts`.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;

    /// Where the data lives, for user-facing messages.
    fn location(&self) -> String;
}

impl<T: ContactStore + ?Sized> ContactStore for Rc<T> {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        (**self).load()
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        (**self).save(contacts)
    }

    fn get_medium(&self) -> &str {
        (**self).get_medium()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
