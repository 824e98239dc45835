use super::*;

use csv::{Reader, Writer};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};

const EXPORT_FILE_NAME: &str = "exported.csv";

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

/// CSV source for imports and destination for exports.
pub struct CsvStorage {
    pub medium: String,
    pub src: PathBuf,
    pub dest: PathBuf,
}

impl CsvStorage {
    pub fn new(src: Option<&Path>, dest: Option<&Path>) -> Result<Self, AppError> {
        let mut dest_path = dest
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

        if dest_path.is_dir() {
            dest_path = dest_path.join(EXPORT_FILE_NAME);
        } else if !has_csv_extension(&dest_path) {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }

        Ok(Self {
            medium: "csv".to_string(),
            src: src
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("contacts.csv")),
            dest: dest_path,
        })
    }

    /// Reads rows one by one so a bad row does not abort the whole import.
    pub fn load_rows(&self) -> Result<Vec<Result<Contact, AppError>>, AppError> {
        if !self.src.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        if !has_csv_extension(&self.src) {
            return Err(AppError::Validation("File not .csv".to_string()));
        }

        let mut reader = Reader::from_path(&self.src)?;

        Ok(reader
            .deserialize::<Contact>()
            .map(|row| row.map_err(AppError::from))
            .collect())
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "csv")
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Empty files, invalid UTF-8 and anything but an array of contacts land here.
        serde_json::from_slice::<Vec<Contact>>(&data)
            .map(Some)
            .map_err(|e| AppError::CorruptData(e.to_string()))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut data = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
        contacts.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl ContactStore for CsvStorage {
    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn location(&self) -> String {
        self.src.display().to_string()
    }

    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let contacts = self
            .load_rows()?
            .into_iter()
            .collect::<Result<Vec<Contact>, AppError>>()?;

        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.dest)?;

        let mut writer = Writer::from_path(&self.dest)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;

        Ok(())
    }
}
