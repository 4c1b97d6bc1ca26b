use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Google rejects assertions that live longer than one hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 60 * 60;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self {
            alg: "RS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GoogleClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl GoogleClaims {
    pub fn new(issuer: &str, scope: &str, audience: &str, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            iss: issuer.to_string(),
            scope: scope.to_string(),
            aud: audience.to_string(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }

    pub fn for_spreadsheets(issuer: &str, audience: &str, issued_at: DateTime<Utc>) -> Self {
        Self::new(issuer, SPREADSHEETS_SCOPE, audience, issued_at)
    }
}
