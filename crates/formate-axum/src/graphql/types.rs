//! GraphQL object and input types, plus input validation.
//!
//! Unknown or missing input fields never reach this module: the GraphQL
//! type system rejects them while coercing arguments. What is checked
//! here is content the type system cannot express.

use async_graphql::{ID, InputObject, Json, MaybeUndefined, SimpleObject};
use chrono::{DateTime, Utc};
use formate_core::validation::{require_non_empty, require_object, require_uuid};
use formate_core::{NewPdfFormat, PdfFormat, PdfFormatUpdate, Settings, ValidationErrors};
use serde_json::Value;

/// A stored PDF format configuration.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "PdfFormate")]
pub struct PdfFormateObject {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub format_type: String,
    pub settings: Option<Json<Settings>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PdfFormat> for PdfFormateObject {
    fn from(record: PdfFormat) -> Self {
        Self {
            id: ID(record.id),
            name: record.name,
            description: record.description,
            format_type: record.format_type,
            settings: record.settings.map(Json),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreatePdfFormateInput {
    pub name: String,
    pub description: Option<String>,
    pub format_type: String,
    /// Must be a JSON object when present.
    pub settings: Option<Json<Value>>,
}

impl CreatePdfFormateInput {
    /// Check field contents and build the domain input.
    pub fn validate(self) -> Result<NewPdfFormat, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "formatType", &self.format_type);
        let settings = self
            .settings
            .and_then(|Json(value)| require_object(&mut errors, "settings", value));

        errors.into_result(NewPdfFormat {
            name: self.name,
            description: self.description,
            format_type: self.format_type,
            settings,
        })
    }
}

/// Partial update. Omitted fields are left unchanged; an explicit `null`
/// clears `description` or `settings`.
#[derive(Debug, InputObject)]
pub struct UpdatePdfFormateInput {
    pub id: ID,
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
    pub format_type: Option<String>,
    pub settings: MaybeUndefined<Json<Value>>,
}

impl UpdatePdfFormateInput {
    /// Check field contents and split into the target id and the overlay.
    pub fn validate(self) -> Result<(String, PdfFormatUpdate), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_uuid(&mut errors, "id", &self.id);

        if let Some(name) = &self.name {
            require_non_empty(&mut errors, "name", name);
        }
        if let Some(format_type) = &self.format_type {
            require_non_empty(&mut errors, "formatType", format_type);
        }

        // name and formatType are non-null columns: an explicit null means "leave as is"
        let description = match self.description {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(d) => Some(Some(d)),
        };
        let settings = match self.settings {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(Json(value)) => {
                Some(require_object(&mut errors, "settings", value))
            }
        };

        let update = PdfFormatUpdate {
            name: self.name,
            description,
            format_type: self.format_type,
            settings,
        };

        errors.into_result((self.id.0, update))
    }
}
