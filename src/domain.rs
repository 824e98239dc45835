pub mod contact;
pub mod manager;
pub mod search;

use crate::errors::AppError;
use uuid::Uuid;

pub use contact::{Contact, render_display};
pub use search::SearchField;
