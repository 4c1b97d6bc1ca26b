use chrono::{NaiveDate, Utc};
use mockito::Matcher;
use picsheet_core::contracts::{AccessToken, ImageMetadata};
use picsheet_core::{ExportError, SpreadsheetClient};
use picsheet_provider_google::GoogleSheetsClient;
use picsheet_provider_google::sheets_client::{create_payload, update_payload, value_range};
use serde_json::json;

const HEADERS: [&str; 6] = ["Filename", "Width (px)", "Height (px)", "Size (bytes)", "Size (KB)", "URL"];

fn token() -> AccessToken {
    AccessToken::new("ya29.test", Utc::now(), Some(3600))
}

fn images() -> Vec<ImageMetadata> {
    vec![
        ImageMetadata::new("cat.png", 2048, 800, 600),
        ImageMetadata::new("dog.jpg", 1536, 1024, 768).with_url("https://img.test/dog.jpg"),
        ImageMetadata::new("bird.gif", 1000, 16, 16),
    ]
}

#[test]
fn test_create_payload_layout() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let payload = serde_json::to_value(create_payload(&images(), today)).unwrap();

    assert_eq!(payload["properties"]["title"], "Image Export - 2024-03-09");
    let sheet = &payload["sheets"][0];
    assert_eq!(payload["sheets"].as_array().unwrap().len(), 1);
    assert_eq!(sheet["properties"]["title"], "Images");
    assert_eq!(sheet["properties"]["gridProperties"]["frozenRowCount"], 1);
    assert_eq!(sheet["data"][0]["startRow"], 0);
    assert_eq!(sheet["data"][0]["startColumn"], 0);

    let rows = sheet["data"][0]["rowData"].as_array().unwrap();
    assert_eq!(rows.len(), 4);

    for (cell, expected) in rows[0]["values"].as_array().unwrap().iter().zip(HEADERS) {
        assert_eq!(cell["userEnteredValue"]["stringValue"], expected);
        assert_eq!(cell["userEnteredFormat"]["textFormat"]["bold"], true);
    }

    let cat = rows[1]["values"].as_array().unwrap();
    assert_eq!(cat[0], json!({ "userEnteredValue": { "stringValue": "cat.png" } }));
    assert_eq!(cat[1], json!({ "userEnteredValue": { "numberValue": 800.0 } }));
    assert_eq!(cat[2], json!({ "userEnteredValue": { "numberValue": 600.0 } }));
    assert_eq!(cat[3], json!({ "userEnteredValue": { "numberValue": 2048.0 } }));
    assert_eq!(cat[4], json!({ "userEnteredValue": { "numberValue": 2.0 } }));
    assert_eq!(cat[5], json!({ "userEnteredValue": { "stringValue": "" } }));

    assert_eq!(rows[2]["values"][0]["userEnteredValue"]["stringValue"], "dog.jpg");
    assert_eq!(rows[2]["values"][4]["userEnteredValue"]["numberValue"], 1.5);
    assert_eq!(rows[2]["values"][5]["userEnteredValue"]["stringValue"], "https://img.test/dog.jpg");
    assert_eq!(rows[3]["values"][4]["userEnteredValue"]["numberValue"], 0.98);
}

#[test]
fn test_update_payload_is_flat_grid() {
    let payload = serde_json::to_value(update_payload(&images())).unwrap();
    assert_eq!(
        payload,
        json!({
            "values": [
                HEADERS,
                ["cat.png", 800, 600, 2048, 2.0, ""],
                ["dog.jpg", 1024, 768, 1536, 1.5, "https://img.test/dog.jpg"],
                ["bird.gif", 16, 16, 1000, 0.98, ""]
            ]
        })
    );
}

#[test]
fn test_value_range_covers_header_and_rows() {
    assert_eq!(value_range(1), "Images!A1:F2");
    assert_eq!(value_range(3), "Images!A1:F4");
}

#[test]
fn test_spreadsheet_id_cannot_escape_its_path_segment() {
    let client = GoogleSheetsClient::new(reqwest::Client::new(), "https://sheets.googleapis.com/v4/spreadsheets".into());
    let url = client.values_url("abc/../../x?y", "Images!A1:F2").unwrap();
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/abc%2F..%2F..%2Fx%3Fy/values/Images!A1:F2?valueInputOption=RAW"
    );
}

#[tokio::test]
async fn test_create_returns_id_and_service_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/spreadsheets")
        .match_header("authorization", "Bearer ya29.test")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Regex(r#""title":"Images""#.into()))
        .with_status(200)
        .with_body(r#"{"spreadsheetId":"new-sheet","spreadsheetUrl":"https://docs.google.com/spreadsheets/d/new-sheet/edit"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = GoogleSheetsClient::new(reqwest::Client::new(), format!("{}/v4/spreadsheets", server.url()));
    let created = client.create(&token(), &images()).await.unwrap();

    assert_eq!(created.spreadsheet_id, "new-sheet");
    assert_eq!(created.url, "https://docs.google.com/spreadsheets/d/new-sheet/edit");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_rejection_carries_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v4/spreadsheets")
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"status":"PERMISSION_DENIED"}}"#)
        .create_async()
        .await;

    let client = GoogleSheetsClient::new(reqwest::Client::new(), format!("{}/v4/spreadsheets", server.url()));
    match client.create(&token(), &images()).await {
        Err(ExportError::SpreadsheetCreate { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("PERMISSION_DENIED"));
        }
        other => panic!("expected create error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_puts_raw_values_into_range() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v4/spreadsheets/sheet-123/values/Images!A1:F4")
        .match_query(Matcher::UrlEncoded("valueInputOption".into(), "RAW".into()))
        .match_header("authorization", "Bearer ya29.test")
        .match_body(Matcher::Json(serde_json::to_value(update_payload(&images())).unwrap()))
        .with_status(200)
        .with_body(r#"{"updatedRange":"Images!A1:F4"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = GoogleSheetsClient::new(reqwest::Client::new(), format!("{}/v4/spreadsheets", server.url()));
    client.update(&token(), "sheet-123", &images()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_rejection_carries_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", Matcher::Any)
        .with_status(404)
        .with_body("Requested entity was not found.")
        .create_async()
        .await;

    let client = GoogleSheetsClient::new(reqwest::Client::new(), format!("{}/v4/spreadsheets", server.url()));
    let err = client.update(&token(), "missing", &images()).await.unwrap_err();
    assert!(matches!(
        err,
        ExportError::SpreadsheetUpdate { status: 404, ref body } if body == "Requested entity was not found."
    ));
}

#[tokio::test]
async fn test_update_body_read_failure_is_transport_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_lowercase();
            if let Some(end) = text.find("\r\n\r\n") {
                let length: usize = text
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse().unwrap())
                    .unwrap_or(0);
                if request.len() >= end + 4 + length {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        // Promise more body than is sent, then hang up.
        let _ = socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial")
            .await;
        let _ = socket.shutdown().await;
    });

    let client = GoogleSheetsClient::new(reqwest::Client::new(), format!("http://{addr}/v4/spreadsheets"));
    let err = client.update(&token(), "sheet-123", &images()).await.unwrap_err();
    assert!(matches!(
        err,
        ExportError::Transport { operation: picsheet_core::ExportOperation::UpdateSpreadsheet, .. }
    ));
    assert_eq!(err.public_message(), "Failed to update spreadsheet");
}
