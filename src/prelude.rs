pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, render_display},
    manager::{ContactBook, ImportReport, LoadStatus},
    search::SearchField,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore, DEFAULT_FILE_PATH, FILE_PATH_ENV,
    memory::MemStorage,
    stores::{CsvStorage, JsonStorage},
};
pub use uuid::{self, Uuid};
