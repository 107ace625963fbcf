//! PC configuration records as exchanged with the catalog backend.
//!
//! [`PcRecord`] is what the backend stores and returns; [`NewPcRecord`] is the
//! body the plugin posts when creating one. They differ in two ways: the
//! backend adds a `createdAt` timestamp, and the create body always carries a
//! `note` string (empty when the user left it blank) because the backend
//! stringifies whatever it receives.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Timestamp layout the backend uses for `createdAt` (naive UTC, optional fraction).
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One persisted personal-computer configuration.
///
/// # Fields
///
/// - `id`: Client-assigned identifier, unique within the catalog
/// - `name`, `cpu`, `purpose`: Non-empty descriptive fields
/// - `ram`, `storage`: Capacities in GB, strictly positive
/// - `note`: Free text, absent or empty when the user left it blank
/// - `created_at`: Backend timestamp, never sent back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcRecord {
    pub id: String,
    pub name: String,
    pub cpu: String,
    pub ram: u64,
    pub storage: u64,
    pub purpose: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PcRecord {
    /// Returns the note if it holds anything besides whitespace.
    #[must_use]
    pub fn note_text(&self) -> Option<&str> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
    }

    /// Lowercased text the search query is matched against.
    ///
    /// Joins name, CPU, purpose and note with single spaces so a query cannot
    /// accidentally match across two fields without the separator.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.cpu,
            self.purpose,
            self.note.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }

    /// Returns `true` if `query` (already lowercased) occurs in the haystack.
    ///
    /// An empty query matches every record.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.search_haystack().contains(query)
    }

    /// Hardware line shown under the record name.
    ///
    /// ```
    /// # use rigbook::domain::PcRecord;
    /// let pc = PcRecord {
    ///     id: "a".into(), name: "Desk".into(), cpu: "Ryzen 5".into(),
    ///     ram: 16, storage: 512, purpose: "Office".into(),
    ///     note: None, created_at: None,
    /// };
    /// assert_eq!(pc.spec_line(), "CPU: Ryzen 5 • RAM: 16GB • Storage: 512GB");
    /// ```
    #[must_use]
    pub fn spec_line(&self) -> String {
        format!(
            "CPU: {} • RAM: {}GB • Storage: {}GB",
            self.cpu, self.ram, self.storage
        )
    }

    /// Parses `created_at` into a UTC timestamp, if present and well-formed.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let raw = self.created_at.as_deref()?;
        chrono::NaiveDateTime::parse_from_str(raw, CREATED_AT_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Returns a short relative age such as `"5m ago"`, measured against `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// Returns `None` when the backend sent no usable timestamp.
    #[must_use]
    pub fn added_ago(&self, now: chrono::DateTime<chrono::Utc>) -> Option<String> {
        let created = self.created_at_utc()?;
        let diff = (now - created).num_seconds().max(0);

        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        })
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPcRecord {
    pub id: String,
    pub name: String,
    pub cpu: String,
    pub ram: u64,
    pub storage: u64,
    pub purpose: String,
    pub note: String,
}

impl From<NewPcRecord> for PcRecord {
    fn from(new: NewPcRecord) -> Self {
        let note = if new.note.is_empty() { None } else { Some(new.note) };
        Self {
            id: new.id,
            name: new.name,
            cpu: new.cpu,
            ram: new.ram,
            storage: new.storage,
            purpose: new.purpose,
            note,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(note: Option<&str>) -> PcRecord {
        PcRecord {
            id: "a".to_string(),
            name: "Gaming Rig".to_string(),
            cpu: "Ryzen 7 7800X3D".to_string(),
            ram: 32,
            storage: 2000,
            purpose: "Games".to_string(),
            note: note.map(String::from),
            created_at: Some("2026-10-14T08:30:00.123456".to_string()),
        }
    }

    #[test]
    fn matches_is_case_insensitive_over_all_text_fields() {
        let pc = record(Some("Quiet fans"));
        assert!(pc.matches("ryzen"));
        assert!(pc.matches("games"));
        assert!(pc.matches("quiet"));
        assert!(pc.matches(""));
        assert!(!pc.matches("intel"));
    }

    #[test]
    fn blank_note_is_treated_as_absent() {
        assert_eq!(record(Some("   ")).note_text(), None);
        assert_eq!(record(None).note_text(), None);
        assert_eq!(record(Some(" hi ")).note_text(), Some("hi"));
    }

    #[test]
    fn deserializes_backend_payload_with_created_at() {
        let json = r#"{"id":"x","name":"n","cpu":"c","ram":8,"storage":256,
            "purpose":"p","note":"","createdAt":"2026-01-01T00:00:00"}"#;
        let pc: PcRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pc.ram, 8);
        assert_eq!(pc.created_at.as_deref(), Some("2026-01-01T00:00:00"));
        assert_eq!(pc.note_text(), None);
    }

    #[test]
    fn added_ago_uses_backend_timestamp() {
        let pc = record(None);
        let now = chrono::Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        assert_eq!(pc.added_ago(now).as_deref(), Some("2d ago"));

        let soon = chrono::Utc.with_ymd_and_hms(2026, 10, 14, 8, 45, 0).unwrap();
        assert_eq!(pc.added_ago(soon).as_deref(), Some("14m ago"));
    }

    #[test]
    fn added_ago_is_none_without_timestamp() {
        let mut pc = record(None);
        pc.created_at = Some("yesterday".to_string());
        assert!(pc.added_ago(chrono::Utc::now()).is_none());
    }
}
