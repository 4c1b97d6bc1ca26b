use async_trait::async_trait;
use chrono::Utc;
use picsheet_core::contracts::{AccessToken, ServiceAccountCredential};
use picsheet_core::{AccessTokenProvider, ExportError, ExportOperation};
use tracing::info;

use crate::contracts::{GoogleAccessToken, GoogleClaims};
use crate::jwt;

pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Signs a fresh assertion and trades it for an access token on every call.
#[derive(Clone)]
pub struct GoogleTokenProvider {
    client: reqwest::Client,
    token_url: Option<String>,
}

impl GoogleTokenProvider {
    /// `token_url` overrides the credential's `token_uri` when set.
    pub fn new(client: reqwest::Client, token_url: Option<String>) -> Self {
        Self { client, token_url }
    }

    pub fn token_url<'a>(&'a self, credential: &'a ServiceAccountCredential) -> &'a str {
        self.token_url.as_deref().unwrap_or(&credential.token_uri)
    }

    pub async fn exchange(&self, token_url: &str, assertion: &str) -> Result<AccessToken, ExportError> {
        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)];
        let res = self
            .client
            .post(token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ExportError::transport(ExportOperation::ExchangeToken, e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ExportError::transport(ExportOperation::ExchangeToken, e))?;

        if !status.is_success() {
            return Err(ExportError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let response: GoogleAccessToken = match serde_json::from_str(&body) {
            Ok(response) => response,
            Err(_) => {
                return Err(ExportError::Authentication {
                    status: status.as_u16(),
                    body,
                });
            }
        };

        Ok(AccessToken::new(response.access_token, Utc::now(), response.expires_in))
    }
}

#[async_trait]
impl AccessTokenProvider for GoogleTokenProvider {
    async fn access_token(&self, credential: &ServiceAccountCredential) -> Result<AccessToken, ExportError> {
        info!("Google: Creating new access token for {}", credential.client_email);

        let token_url = self.token_url(credential);
        let claims = GoogleClaims::for_spreadsheets(&credential.client_email, token_url, Utc::now());
        let assertion = jwt::build_assertion(credential, &claims)?;

        self.exchange(token_url, &assertion).await
    }
}
