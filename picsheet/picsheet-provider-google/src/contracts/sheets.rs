use picsheet_core::contracts::{COLUMN_HEADERS, ImageRow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Spreadsheet {
    pub properties: SpreadsheetProperties,
    pub sheets: Vec<Sheet>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SpreadsheetProperties {
    pub title: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Sheet {
    pub properties: SheetProperties,
    pub data: Vec<GridData>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SheetProperties {
    pub title: String,

    #[serde(rename = "gridProperties")]
    pub grid_properties: GridProperties,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GridProperties {
    #[serde(rename = "frozenRowCount")]
    pub frozen_row_count: u32,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GridData {
    #[serde(rename = "startRow")]
    pub start_row: u32,

    #[serde(rename = "startColumn")]
    pub start_column: u32,

    #[serde(rename = "rowData")]
    pub row_data: Vec<RowData>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RowData {
    pub values: Vec<CellData>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CellData {
    #[serde(rename = "userEnteredValue")]
    pub user_entered_value: ExtendedValue,

    #[serde(rename = "userEnteredFormat", skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum ExtendedValue {
    #[serde(rename = "stringValue")]
    String(String),

    #[serde(rename = "numberValue")]
    Number(f64),
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CellFormat {
    #[serde(rename = "textFormat")]
    pub text_format: TextFormat,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TextFormat {
    pub bold: bool,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CreateSpreadsheetResponse {
    #[serde(rename = "spreadsheetId")]
    pub spreadsheet_id: Option<String>,

    #[serde(rename = "spreadsheetUrl")]
    pub spreadsheet_url: Option<String>,
}

/// Body of a `values.update` call.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ValueRange {
    pub values: Vec<Vec<Value>>,
}

impl CellData {
    fn text(value: &str) -> Self {
        Self {
            user_entered_value: ExtendedValue::String(value.to_string()),
            user_entered_format: None,
        }
    }

    fn number(value: f64) -> Self {
        Self {
            user_entered_value: ExtendedValue::Number(value),
            user_entered_format: None,
        }
    }

    fn bold(value: &str) -> Self {
        Self {
            user_entered_value: ExtendedValue::String(value.to_string()),
            user_entered_format: Some(CellFormat {
                text_format: TextFormat { bold: true },
            }),
        }
    }
}

impl RowData {
    pub fn header() -> Self {
        Self {
            values: COLUMN_HEADERS.iter().map(|h| CellData::bold(h)).collect(),
        }
    }
}

impl From<&ImageRow> for RowData {
    fn from(row: &ImageRow) -> Self {
        Self {
            values: vec![
                CellData::text(&row.filename),
                CellData::number(row.width as f64),
                CellData::number(row.height as f64),
                CellData::number(row.size_bytes as f64),
                CellData::number(row.size_kb),
                CellData::text(&row.url),
            ],
        }
    }
}

impl From<&[ImageRow]> for ValueRange {
    fn from(rows: &[ImageRow]) -> Self {
        let mut values = Vec::with_capacity(rows.len() + 1);
        values.push(ImageRow::header_values());
        values.extend(rows.iter().map(ImageRow::to_values));
        Self { values }
    }
}
