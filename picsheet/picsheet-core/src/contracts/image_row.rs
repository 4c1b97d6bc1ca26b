use serde_json::{Value, json};

use super::ImageMetadata;

pub const SHEET_TITLE: &str = "Images";

pub const COLUMN_HEADERS: [&str; 6] = [
    "Filename",
    "Width (px)",
    "Height (px)",
    "Size (bytes)",
    "Size (KB)",
    "URL",
];

/// One sheet row, in [`COLUMN_HEADERS`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRow {
    pub filename: String,
    pub width: u64,
    pub height: u64,
    pub size_bytes: u64,
    pub size_kb: f64,
    pub url: String,
}

impl ImageRow {
    /// Kilobytes rounded to two decimals, e.g. 1000 bytes is 0.98.
    pub fn size_in_kb(size: u64) -> f64 {
        (size as f64 / 1024.0 * 100.0).round() / 100.0
    }

    pub fn header_values() -> Vec<Value> {
        COLUMN_HEADERS.iter().map(|h| Value::from(*h)).collect()
    }

    pub fn to_values(&self) -> Vec<Value> {
        vec![
            json!(self.filename),
            json!(self.width),
            json!(self.height),
            json!(self.size_bytes),
            json!(self.size_kb),
            json!(self.url),
        ]
    }
}

impl From<&ImageMetadata> for ImageRow {
    fn from(image: &ImageMetadata) -> Self {
        Self {
            filename: image.name.clone(),
            width: image.width,
            height: image.height,
            size_bytes: image.size,
            size_kb: Self::size_in_kb(image.size),
            url: image.url.clone().unwrap_or_default(),
        }
    }
}
