use std::future::Future;
use std::sync::Arc;

use picsheet_core::{
    AccessTokenProvider,
    CredentialSource,
    ExportError,
    ExportOperation,
    SpreadsheetClient,
    contracts::{CreatedSpreadsheet, ExportRequest, ExportResult, SpreadsheetTarget, ValidatedExport},
    logging::{IExportLogger, TracingExportLogger},
};
use picsheet_provider_google::{CachingTokenProvider, GoogleSheetsClient, GoogleTokenProvider};
pub use picsheet_provider_google::sheets_client::SHEETS_API_URL;

/// Configuration for the export service.
#[derive(Debug, Clone)]
pub struct ExportServiceConfig {
    /// Where the service-account JSON is read from on every export.
    pub credential_source: CredentialSource,
    /// Token endpoint override; the credential's `token_uri` is used when unset.
    pub token_url: Option<String>,
    /// Base URL of the spreadsheets collection.
    pub sheets_api_url: String,
    /// Reuse access tokens across exports until shortly before they expire.
    pub token_cache: bool,
}

impl Default for ExportServiceConfig {
    fn default() -> Self {
        Self {
            credential_source: CredentialSource::default(),
            token_url: None,
            sheets_api_url: SHEETS_API_URL.to_string(),
            token_cache: false,
        }
    }
}

/// Drives one export: validate, load credentials, authenticate, write the sheet.
///
/// Every stage runs once and in order; the first failure ends the export.
pub struct ExportService {
    credential_source: CredentialSource,
    tokens: Arc<dyn AccessTokenProvider>,
    sheets: Arc<dyn SpreadsheetClient>,
    logger: Arc<dyn IExportLogger>,
}

impl ExportService {
    /// Builds a service talking to Google with the given configuration.
    pub fn new(config: ExportServiceConfig) -> Self {
        let client = reqwest::Client::new();

        let google = GoogleTokenProvider::new(client.clone(), config.token_url.clone());
        let tokens: Arc<dyn AccessTokenProvider> = if config.token_cache {
            Arc::new(CachingTokenProvider::new(google))
        } else {
            Arc::new(google)
        };
        let sheets = Arc::new(GoogleSheetsClient::new(client, config.sheets_api_url.clone()));

        Self::with_parts(config.credential_source, tokens, sheets)
    }

    pub fn with_parts(
        credential_source: CredentialSource,
        tokens: Arc<dyn AccessTokenProvider>,
        sheets: Arc<dyn SpreadsheetClient>,
    ) -> Self {
        Self {
            credential_source,
            tokens,
            sheets,
            logger: Arc::new(TracingExportLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn IExportLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Runs a stage, reporting start, completion and failure to the logger.
    async fn stage<T, F>(&self, cid: Option<&str>, operation: ExportOperation, fut: F) -> Result<T, ExportError>
    where
        F: Future<Output = Result<T, ExportError>>,
    {
        self.logger.log_stage_started(cid, operation);
        match fut.await {
            Ok(value) => {
                self.logger.log_stage_completed(cid, operation);
                Ok(value)
            }
            Err(e) => {
                self.logger.log_stage_failed(cid, e.operation(), &e);
                Err(e)
            }
        }
    }

    /// Parses a raw request body and exports it.
    pub async fn export_body(&self, body: &[u8], correlation_id: Option<&str>) -> Result<ExportResult, ExportError> {
        let export = self
            .stage(correlation_id, ExportOperation::ValidateRequest, async {
                ExportRequest::from_slice(body)?.validate()
            })
            .await?;
        self.run(export, correlation_id).await
    }

    pub async fn export(&self, request: ExportRequest, correlation_id: Option<&str>) -> Result<ExportResult, ExportError> {
        let export = self
            .stage(correlation_id, ExportOperation::ValidateRequest, async { request.validate() })
            .await?;
        self.run(export, correlation_id).await
    }

    async fn run(&self, export: ValidatedExport, correlation_id: Option<&str>) -> Result<ExportResult, ExportError> {
        let cid = correlation_id;

        let credential = self
            .stage(cid, ExportOperation::LoadCredentials, async {
                self.credential_source.load()
            })
            .await?;

        let token = self
            .stage(cid, ExportOperation::ExchangeToken, self.tokens.access_token(&credential))
            .await?;

        let (spreadsheet_id, url) = match export.target {
            SpreadsheetTarget::New => {
                let created = self
                    .stage(cid, ExportOperation::CreateSpreadsheet, self.sheets.create(&token, &export.images))
                    .await?;
                (created.spreadsheet_id, created.url)
            }
            SpreadsheetTarget::Existing(id) => {
                self.stage(
                    cid,
                    ExportOperation::UpdateSpreadsheet,
                    self.sheets.update(&token, &id, &export.images),
                )
                .await?;
                let url = CreatedSpreadsheet::docs_url(&id);
                (id, url)
            }
        };

        tracing::info!(
            spreadsheet_id = %spreadsheet_id,
            image_count = export.images.len(),
            "Export completed successfully"
        );

        Ok(ExportResult {
            spreadsheet_id,
            url,
            image_count: export.images.len(),
        })
    }
}
