macro_rules! muse {
    ($module:ident, {$($item:ident),* $(,)?}) => {
        pub mod $module;
        pub use $module::{ $($item),* };
    };
}

muse!(image_metadata, {ImageMetadata});
muse!(image_row, {ImageRow, COLUMN_HEADERS, SHEET_TITLE});
muse!(export_request, {ExportRequest, SpreadsheetTarget, ValidatedExport});
muse!(export_response, {ExportResult, ExportResponse, ErrorResponse});

muse!(service_account_credential, {ServiceAccountCredential, GOOGLE_TOKEN_URI});
muse!(access_token, {AccessToken});
muse!(created_spreadsheet, {CreatedSpreadsheet});
