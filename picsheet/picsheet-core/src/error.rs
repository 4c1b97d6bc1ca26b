use std::fmt;

use thiserror::Error;

/// Pipeline stage an [`ExportError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportOperation {
    ValidateRequest,
    LoadCredentials,
    SignAssertion,
    ExchangeToken,
    CreateSpreadsheet,
    UpdateSpreadsheet,
}

impl ExportOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportOperation::ValidateRequest => "validate_request",
            ExportOperation::LoadCredentials => "load_credentials",
            ExportOperation::SignAssertion => "sign_assertion",
            ExportOperation::ExchangeToken => "exchange_token",
            ExportOperation::CreateSpreadsheet => "create_spreadsheet",
            ExportOperation::UpdateSpreadsheet => "update_spreadsheet",
        }
    }
}

impl fmt::Display for ExportOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every failure the export pipeline can produce.
///
/// The `Display` output carries internal detail (upstream bodies, parser
/// messages) and is meant for operator logs. Callers only ever see
/// [`ExportError::public_message`].
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    Validation(String),

    #[error("service account key is not configured: {0}")]
    Configuration(String),

    #[error("service account key could not be parsed: {0}")]
    CredentialParse(String),

    #[error("private key could not be imported: {0}")]
    KeyImport(String),

    #[error("assertion signing failed: {0}")]
    Signing(String),

    #[error("token endpoint rejected the assertion (status {status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("transport failure during {operation}: {message}")]
    Transport {
        operation: ExportOperation,
        message: String,
    },

    #[error("spreadsheet create failed (status {status}): {body}")]
    SpreadsheetCreate { status: u16, body: String },

    #[error("spreadsheet update failed (status {status}): {body}")]
    SpreadsheetUpdate { status: u16, body: String },
}

impl ExportError {
    pub fn transport(operation: ExportOperation, err: impl fmt::Display) -> Self {
        ExportError::Transport {
            operation,
            message: err.to_string(),
        }
    }

    pub fn operation(&self) -> ExportOperation {
        match self {
            ExportError::Validation(_) => ExportOperation::ValidateRequest,
            ExportError::Configuration(_) | ExportError::CredentialParse(_) => {
                ExportOperation::LoadCredentials
            }
            ExportError::KeyImport(_) | ExportError::Signing(_) => ExportOperation::SignAssertion,
            ExportError::Authentication { .. } => ExportOperation::ExchangeToken,
            ExportError::Transport { operation, .. } => *operation,
            ExportError::SpreadsheetCreate { .. } => ExportOperation::CreateSpreadsheet,
            ExportError::SpreadsheetUpdate { .. } => ExportOperation::UpdateSpreadsheet,
        }
    }

    /// HTTP status for the failure class: 400 for bad caller input, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            ExportError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ExportError::Validation(message) => message.clone(),
            ExportError::Configuration(_) => "Google credentials not configured".to_string(),
            ExportError::CredentialParse(_) => "Invalid Google credentials format".to_string(),
            _ => match self.operation() {
                ExportOperation::CreateSpreadsheet => "Failed to create spreadsheet".to_string(),
                ExportOperation::UpdateSpreadsheet => "Failed to update spreadsheet".to_string(),
                _ => "Failed to authenticate with Google".to_string(),
            },
        }
    }
}
