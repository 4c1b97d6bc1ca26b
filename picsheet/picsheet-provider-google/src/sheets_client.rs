use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use picsheet_core::contracts::{AccessToken, CreatedSpreadsheet, ImageMetadata, ImageRow, SHEET_TITLE};
use picsheet_core::{ExportError, ExportOperation, SpreadsheetClient};
use reqwest::Url;
use tracing::info;

use crate::contracts::{
    CreateSpreadsheetResponse, GridData, GridProperties, RowData, Sheet, SheetProperties,
    Spreadsheet, SpreadsheetProperties, ValueRange,
};

pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub fn create_payload(images: &[ImageMetadata], today: NaiveDate) -> Spreadsheet {
    let mut row_data = Vec::with_capacity(images.len() + 1);
    row_data.push(RowData::header());
    row_data.extend(images.iter().map(|image| RowData::from(&ImageRow::from(image))));

    Spreadsheet {
        properties: SpreadsheetProperties {
            title: format!("Image Export - {}", today.format("%Y-%m-%d")),
        },
        sheets: vec![Sheet {
            properties: SheetProperties {
                title: SHEET_TITLE.to_string(),
                grid_properties: GridProperties { frozen_row_count: 1 },
            },
            data: vec![GridData {
                start_row: 0,
                start_column: 0,
                row_data,
            }],
        }],
    }
}

pub fn update_payload(images: &[ImageMetadata]) -> ValueRange {
    let rows: Vec<ImageRow> = images.iter().map(ImageRow::from).collect();
    ValueRange::from(rows.as_slice())
}

/// A1 range covering the header plus one row per image, e.g. `Images!A1:F2`.
pub fn value_range(image_count: usize) -> String {
    format!("{}!A1:F{}", SHEET_TITLE, image_count + 1)
}

#[derive(Clone)]
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleSheetsClient {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    pub fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, ExportError> {
        let invalid = || {
            ExportError::transport(
                ExportOperation::UpdateSpreadsheet,
                format!("invalid Sheets API url: {}", self.api_url),
            )
        };

        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(spreadsheet_id)
            .push("values")
            .push(range);
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");
        Ok(url)
    }
}

#[async_trait]
impl SpreadsheetClient for GoogleSheetsClient {
    async fn create(&self, token: &AccessToken, images: &[ImageMetadata]) -> Result<CreatedSpreadsheet, ExportError> {
        let payload = create_payload(images, Utc::now().date_naive());
        info!("Google: Creating spreadsheet \"{}\" with {} rows", payload.properties.title, images.len());

        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", token.authorization_header())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ExportError::transport(ExportOperation::CreateSpreadsheet, e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ExportError::transport(ExportOperation::CreateSpreadsheet, e))?;

        if !status.is_success() {
            return Err(ExportError::SpreadsheetCreate {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreateSpreadsheetResponse = match serde_json::from_str(&body) {
            Ok(created) => created,
            Err(_) => {
                return Err(ExportError::SpreadsheetCreate {
                    status: status.as_u16(),
                    body,
                });
            }
        };
        let Some(spreadsheet_id) = created.spreadsheet_id else {
            return Err(ExportError::SpreadsheetCreate {
                status: status.as_u16(),
                body,
            });
        };

        let url = created
            .spreadsheet_url
            .unwrap_or_else(|| CreatedSpreadsheet::docs_url(&spreadsheet_id));
        Ok(CreatedSpreadsheet { spreadsheet_id, url })
    }

    async fn update(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
        images: &[ImageMetadata],
    ) -> Result<(), ExportError> {
        let url = self.values_url(spreadsheet_id, &value_range(images.len()))?;
        info!("Google: Updating spreadsheet {} with {} rows", spreadsheet_id, images.len());

        let res = self
            .client
            .put(url)
            .header("Authorization", token.authorization_header())
            .json(&update_payload(images))
            .send()
            .await
            .map_err(|e| ExportError::transport(ExportOperation::UpdateSpreadsheet, e))?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .await
                .map_err(|e| ExportError::transport(ExportOperation::UpdateSpreadsheet, e))?;
            return Err(ExportError::SpreadsheetUpdate {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
