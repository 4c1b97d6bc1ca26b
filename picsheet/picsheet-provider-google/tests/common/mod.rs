#![allow(dead_code)]

use picsheet_core::contracts::ServiceAccountCredential;
use serde_json::json;

pub const TEST_KEY_PEM: &str = include_str!("../fixtures/service_account_key.pem");
pub const TEST_CLIENT_EMAIL: &str = "exporter@picsheet-test.iam.gserviceaccount.com";

pub fn credential_json(token_uri: &str) -> String {
    json!({
        "type": "service_account",
        "project_id": "picsheet-test",
        "client_email": TEST_CLIENT_EMAIL,
        "private_key": TEST_KEY_PEM,
        "token_uri": token_uri,
    })
    .to_string()
}

pub fn credential(token_uri: &str) -> ServiceAccountCredential {
    ServiceAccountCredential::from_json(&credential_json(token_uri)).expect("fixture credential parses")
}
