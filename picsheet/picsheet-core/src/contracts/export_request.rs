use serde::{Serialize, Deserialize};
use serde_json::Value;

use super::ImageMetadata;
use crate::error::ExportError;

/// Body of an export call as received from the browser.
///
/// `images` is kept as raw JSON so that a missing field, a non-list and an
/// empty list all fail the same validation instead of a deserializer error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,

    #[serde(rename = "spreadsheetId", default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetTarget {
    New,
    Existing(String),
}

impl SpreadsheetTarget {
    /// Blank ids count as "no spreadsheet yet".
    pub fn from_id(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            Some(id) if !id.is_empty() => SpreadsheetTarget::Existing(id.to_string()),
            _ => SpreadsheetTarget::New,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedExport {
    pub images: Vec<ImageMetadata>,
    pub target: SpreadsheetTarget,
}

impl ExportRequest {
    pub fn new(images: &[ImageMetadata], spreadsheet_id: Option<String>) -> Self {
        Self {
            images: serde_json::to_value(images).ok(),
            spreadsheet_id,
        }
    }

    /// Parses a request body, which must be a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, ExportError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ExportError::Validation(format!("Invalid request body: {e}")))?;

        // Derived struct deserializers also accept sequences; only objects are requests.
        if !value.is_object() {
            return Err(ExportError::Validation("No images provided".to_string()));
        }
        serde_json::from_value(value)
            .map_err(|e| ExportError::Validation(format!("Invalid request body: {e}")))
    }

    pub fn validate(self) -> Result<ValidatedExport, ExportError> {
        let images = match self.images {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(ExportError::Validation("No images provided".to_string())),
        };

        let images = images
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<ImageMetadata>(item).map_err(|e| {
                    ExportError::Validation(format!("Invalid image metadata at index {index}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedExport {
            images,
            target: SpreadsheetTarget::from_id(self.spreadsheet_id.as_deref()),
        })
    }
}
