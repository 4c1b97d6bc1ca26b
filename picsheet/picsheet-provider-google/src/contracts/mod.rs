pub mod google_claims;
pub use google_claims::{GoogleClaims, JwtHeader};

pub mod google_access_token;
pub use google_access_token::GoogleAccessToken;

pub mod sheets;
pub use sheets::{
    CellData,
    CellFormat,
    CreateSpreadsheetResponse,
    ExtendedValue,
    GridData,
    GridProperties,
    RowData,
    Sheet,
    SheetProperties,
    Spreadsheet,
    SpreadsheetProperties,
    TextFormat,
    ValueRange
};
