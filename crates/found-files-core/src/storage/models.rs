use crate::path::extract_path_components;
use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::Serialize;

/// A file seen by a crawler.
///
/// Identity is the triple (`source`, `path`, `md5hash`): the same path with
/// different content is a separate catalog entry, so every content version
/// seen at a path keeps its own row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundFile {
    pub source: String,
    pub path: String,
    pub md5hash: String,
    pub name: String,
    pub extension: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: i64,
    pub category: String,
    pub label: String,
    pub modified: DateTime<Utc>,
    pub discovered: DateTime<Utc>,
    pub last_checked: DateTime<Utc>,
}

impl FoundFile {
    /// Record for a file observed at `now`. Name and extension come from
    /// `path`; classification fields start empty.
    pub fn new(
        source: &str,
        path: &str,
        md5hash: &str,
        size: i64,
        modified: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let parts = extract_path_components(path);
        FoundFile {
            source: source.to_string(),
            path: path.to_string(),
            md5hash: md5hash.to_string(),
            name: parts.name,
            extension: parts.extension,
            file_type: String::new(),
            size,
            category: String::new(),
            label: String::new(),
            modified,
            discovered: now,
            last_checked: now,
        }
    }

    pub fn with_classification(mut self, file_type: &str, category: &str, label: &str) -> Self {
        self.file_type = file_type.to_string();
        self.category = category.to_string();
        self.label = label.to_string();
        self
    }

    /// Maps a row selected with the column order used throughout `queries`.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(FoundFile {
            source: row.get(0)?,
            path: row.get(1)?,
            md5hash: row.get(2)?,
            name: row.get(3)?,
            size: row.get(4)?,
            modified: row.get(5)?,
            extension: row.get(6)?,
            file_type: row.get(7)?,
            category: row.get(8)?,
            label: row.get(9)?,
            discovered: row.get(10)?,
            last_checked: row.get(11)?,
        })
    }
}
