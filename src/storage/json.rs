//! JSON file implementation of the habit storage interface
//!
//! The file holds one JSON object mapping each habit name to its record.
//! Keys appear in insertion order so that listing order survives a reload:
//!
//! ```json
//! {
//!   "Read 10 pages": { "last_done": "2026-10-17", "streak": 3, "total_completions": 9 }
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::storage::{HabitStorage, StorageError};

/// File name used when no explicit path is configured
pub const DEFAULT_STORE_FILE: &str = "habits.json";

/// JSON-file-based storage implementation
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage handle for the given file (nothing is touched yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the new content is written to before the rename
    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.as_os_str().to_owned();
        temp.push(".tmp");
        PathBuf::from(temp)
    }

    fn persistence_error(&self, action: &'static str, source: io::Error) -> StorageError {
        StorageError::Persistence {
            action,
            path: self.path.clone(),
            source,
        }
    }

    fn write_temp(&self, temp_path: &Path, habits: &[Habit]) -> io::Result<()> {
        let file = File::create(temp_path)?;
        let mut writer = BufWriter::new(&file);

        serde_json::to_writer_pretty(&mut writer, &DocumentRef(habits))?;
        writeln!(writer)?;
        writer.flush()?;
        drop(writer);

        file.sync_all()
    }
}

impl HabitStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No store file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.persistence_error("read", e)),
        };

        let document: Document = serde_json::from_str(&content).map_err(|source| {
            StorageError::CorruptStore {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!("Loaded {} habits from {}", document.0.len(), self.path.display());
        Ok(document.0)
    }

    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| self.persistence_error("create directory for", e))?;
            }
        }

        let temp_path = self.temp_path();

        if let Err(e) = self.write_temp(&temp_path, habits) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.persistence_error("write", e));
        }

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.persistence_error("replace", e));
        }

        tracing::debug!("Saved {} habits to {}", habits.len(), self.path.display());
        Ok(())
    }
}

/// On-disk shape of one habit; the name is the map key
#[derive(Debug, Serialize, Deserialize)]
struct HabitRecord {
    last_done: Option<NaiveDate>,
    streak: u32,
    #[serde(default)]
    total_completions: u32,
}

impl HabitRecord {
    fn from_habit(habit: &Habit) -> Self {
        Self {
            last_done: habit.last_done,
            streak: habit.streak,
            total_completions: habit.total_completions,
        }
    }

    /// Reject records that break the habit invariants
    fn check(&self, name: &str) -> Result<(), String> {
        let normalized = Habit::normalize_name(name).map_err(|e| format!("{} ({:?})", e, name))?;
        if normalized != name {
            return Err(format!("habit name {:?} has surrounding whitespace", name));
        }

        match (self.last_done, self.streak) {
            (None, streak) if streak > 0 => Err(format!(
                "habit '{}' has a streak of {} but was never done",
                name, streak
            )),
            (Some(_), 0) => Err(format!("habit '{}' was done but has a zero streak", name)),
            _ => Ok(()),
        }
    }
}

/// Borrowed view of the habit list for writing
struct DocumentRef<'a>(&'a [Habit]);

impl Serialize for DocumentRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|habit| (&habit.name, HabitRecord::from_habit(habit))),
        )
    }
}

/// Habit list read back from disk, in document order
struct Document(Vec<Habit>);

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of habit names to habit records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
                let mut seen = HashSet::new();
                let mut habits = Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((name, record)) = map.next_entry::<String, HabitRecord>()? {
                    if !seen.insert(name.clone()) {
                        return Err(de::Error::custom(format!(
                            "habit '{}' appears more than once",
                            name
                        )));
                    }
                    record.check(&name).map_err(de::Error::custom)?;

                    habits.push(Habit::from_existing(
                        name,
                        record.last_done,
                        record.streak,
                        record.total_completions,
                    ));
                }

                Ok(Document(habits))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
