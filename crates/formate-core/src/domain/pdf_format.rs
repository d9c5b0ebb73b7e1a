//! The `PdfFormate` resource record.
//!
//! A record describes one PDF output configuration: a human name, the page
//! format it targets and an optional free-form settings object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form settings attached to a record: string keys to arbitrary JSON.
pub type Settings = serde_json::Map<String, serde_json::Value>;

/// A persisted pdf format record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfFormat {
    /// UUID v4, assigned on insert and never changed afterwards.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub format_type: String,
    pub settings: Option<Settings>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated data for creating a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPdfFormat {
    pub name: String,
    pub description: Option<String>,
    pub format_type: String,
    pub settings: Option<Settings>,
}

impl NewPdfFormat {
    /// Create input with only the required fields set.
    pub fn new(name: impl Into<String>, format_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            format_type: format_type.into(),
            settings: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Materialize the record a store persists: fresh id, both timestamps `now`.
    pub fn into_record(self, now: DateTime<Utc>) -> PdfFormat {
        PdfFormat {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            description: self.description,
            format_type: self.format_type,
            settings: self.settings,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial replacement of a record's mutable fields.
///
/// `None` leaves a field unchanged. For the nullable columns use
/// `Some(None)` to clear and `Some(Some(v))` to set. The overlay is shallow:
/// a provided `settings` object replaces the stored one wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfFormatUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub format_type: Option<String>,
    pub settings: Option<Option<Settings>>,
}

impl PdfFormatUpdate {
    /// True when no field would change.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.format_type.is_none()
            && self.settings.is_none()
    }

    /// Overlay the provided fields onto `record` and bump `updated_at`.
    ///
    /// The record's `id` and `created_at` are never touched.
    pub fn apply_to(self, record: &mut PdfFormat, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(format_type) = self.format_type {
            record.format_type = format_type;
        }
        if let Some(settings) = self.settings {
            record.settings = settings;
        }
        record.updated_at = now.max(record.created_at);
    }
}
