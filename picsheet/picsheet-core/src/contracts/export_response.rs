use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResult {
    #[serde(rename = "spreadsheetId")]
    pub spreadsheet_id: String,

    pub url: String,

    #[serde(rename = "imageCount")]
    pub image_count: usize,
}

/// Success envelope: `{ "success": true, "spreadsheetId", "url", "imageCount" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub success: bool,

    #[serde(flatten)]
    pub result: ExportResult,
}

impl From<ExportResult> for ExportResponse {
    fn from(result: ExportResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
