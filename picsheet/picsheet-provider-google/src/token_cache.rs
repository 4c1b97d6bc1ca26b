use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use picsheet_core::contracts::{AccessToken, ServiceAccountCredential};
use picsheet_core::{AccessTokenProvider, ExportError};
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tracing::info;

pub const DEFAULT_REFRESH_SKEW: Duration = Duration::from_secs(5 * 60);

type TokenSlot = Arc<Mutex<Option<AccessToken>>>;

/// Reuses tokens per credential until shortly before they expire.
///
/// Each credential has its own slot lock, held across a refresh, so concurrent
/// exports with the same credential wait for one exchange while other
/// credentials are unaffected. The map lock is only held to look up a slot.
pub struct CachingTokenProvider<P> {
    inner: P,
    refresh_skew: Duration,
    slots: Mutex<HashMap<String, TokenSlot>>,
}

impl<P> CachingTokenProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_refresh_skew(inner, DEFAULT_REFRESH_SKEW)
    }

    pub fn with_refresh_skew(inner: P, refresh_skew: Duration) -> Self {
        Self {
            inner,
            refresh_skew,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn fingerprint(credential: &ServiceAccountCredential) -> String {
        let mut hasher = Sha256::new();
        hasher.update(credential.client_email.as_bytes());
        hasher.update(b"\n");
        hasher.update(credential.token_uri.as_bytes());
        hasher.update(b"\n");
        hasher.update(credential.private_key.expose_secret().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn is_fresh(&self, token: &AccessToken) -> bool {
        let skew = chrono::Duration::from_std(self.refresh_skew).unwrap_or(chrono::Duration::zero());
        match token.expires_at() {
            Some(expires_at) => Utc::now() + skew < expires_at,
            None => false,
        }
    }
}

#[async_trait]
impl<P: AccessTokenProvider> AccessTokenProvider for CachingTokenProvider<P> {
    async fn access_token(&self, credential: &ServiceAccountCredential) -> Result<AccessToken, ExportError> {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(Self::fingerprint(credential)).or_default().clone()
        };
        let mut cached = slot.lock().await;

        if let Some(token) = cached.as_ref() {
            if self.is_fresh(token) {
                return Ok(token.clone());
            }
        }

        info!("Google: Refreshing access token (cached)");
        let token = self.inner.access_token(credential).await?;
        if let Some(expires_at) = token.expires_at() {
            info!("Google: New access token cached; expires at {}", expires_at);
        }
        *cached = Some(token.clone());
        Ok(token)
    }
}
