use async_trait::async_trait;

use crate::contracts::{AccessToken, CreatedSpreadsheet, ImageMetadata, ServiceAccountCredential};

pub mod contracts;
pub mod credentials;
pub mod error;
pub mod logging;

pub use credentials::CredentialSource;
pub use error::{ExportError, ExportOperation};

/// Turns a service-account credential into a bearer token.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self, credential: &ServiceAccountCredential) -> Result<AccessToken, ExportError>;
}

/// The two spreadsheet writes an export can end in.
#[async_trait]
pub trait SpreadsheetClient: Send + Sync {
    async fn create(&self, token: &AccessToken, images: &[ImageMetadata]) -> Result<CreatedSpreadsheet, ExportError>;

    async fn update(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
        images: &[ImageMetadata],
    ) -> Result<(), ExportError>;
}
