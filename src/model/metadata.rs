//! Document metadata scanned from the raw file bytes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata fields found by a direct scan over the file.
///
/// Every field is optional; absence means the pattern was not found.
/// The scan is independent of the extraction pipeline and never fails:
/// a missing or unreadable file simply yields the default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creation date, raw PDF form (e.g. `D:20240115103045+01'00'`)
    pub creation_date: Option<String>,

    /// Creation date parsed to UTC, when the raw form is well-formed
    pub created: Option<DateTime<Utc>>,

    /// PDF version from the header (e.g. "1.7")
    pub pdf_version: Option<String>,
}

impl Metadata {
    /// Check whether no field was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flatten into a string map; absent fields are omitted.
    ///
    /// Keys: `title`, `author`, `subject`, `creation_date`, `pdf_version`.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        if let Some(ref title) = self.title {
            map.insert("title".to_string(), title.clone());
        }
        if let Some(ref author) = self.author {
            map.insert("author".to_string(), author.clone());
        }
        if let Some(ref subject) = self.subject {
            map.insert("subject".to_string(), subject.clone());
        }
        if let Some(ref date) = self.creation_date {
            map.insert("creation_date".to_string(), date.clone());
        }
        if let Some(ref version) = self.pdf_version {
            map.insert("pdf_version".to_string(), version.clone());
        }
        map
    }
}
