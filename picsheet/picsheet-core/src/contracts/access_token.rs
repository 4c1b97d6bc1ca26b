use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone)]
pub struct AccessToken {
    value: SecretString,
    pub obtained_at: DateTime<Utc>,
    /// Lifetime in seconds as reported by the token endpoint.
    pub expires_in: Option<u64>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, obtained_at: DateTime<Utc>, expires_in: Option<u64>) -> Self {
        Self {
            value: SecretString::new(value.into()),
            obtained_at,
            expires_in,
        }
    }

    pub fn value(&self) -> &str {
        self.value.expose_secret()
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .and_then(|secs| i64::try_from(secs).ok())
            .map(|secs| self.obtained_at + Duration::seconds(secs))
    }
}
