#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSpreadsheet {
    pub spreadsheet_id: String,
    pub url: String,
}

impl CreatedSpreadsheet {
    pub const DOCS_URL_PREFIX: &'static str = "https://docs.google.com/spreadsheets/d/";

    /// Browser URL of a spreadsheet, used when the API does not hand one back.
    pub fn docs_url(spreadsheet_id: &str) -> String {
        format!("{}{}", Self::DOCS_URL_PREFIX, spreadsheet_id)
    }
}
