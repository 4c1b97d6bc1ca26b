use serde::{Serialize, Deserialize};

/// Metadata the browser reports for one uploaded image.
///
/// Unknown fields (the browser also sends a local id and preview URL) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub name: String,

    /// Size in bytes.
    pub size: u64,

    pub width: u64,

    pub height: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ImageMetadata {
    pub fn new(name: impl Into<String>, size: u64, width: u64, height: u64) -> Self {
        Self {
            name: name.into(),
            size,
            width,
            height,
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
