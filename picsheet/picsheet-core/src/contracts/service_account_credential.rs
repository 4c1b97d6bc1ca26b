use secrecy::SecretString;
use serde::Deserialize;

use crate::error::ExportError;

pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    GOOGLE_TOKEN_URI.to_string()
}

/// The fields of a Google service-account JSON key this service needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountCredential {
    pub client_email: String,

    /// PEM-encoded PKCS8 key.
    pub private_key: SecretString,

    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountCredential {
    pub fn from_json(raw: &str) -> Result<Self, ExportError> {
        let credential: ServiceAccountCredential =
            serde_json::from_str(raw).map_err(|e| ExportError::CredentialParse(e.to_string()))?;

        if credential.client_email.trim().is_empty() {
            return Err(ExportError::CredentialParse("client_email is empty".to_string()));
        }
        Ok(credential)
    }
}
