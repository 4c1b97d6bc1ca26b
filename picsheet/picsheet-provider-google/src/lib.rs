pub mod contracts;
pub mod google_auth;
pub mod jwt;
pub mod sheets_client;
pub mod token_cache;

pub use google_auth::GoogleTokenProvider;
pub use sheets_client::GoogleSheetsClient;
pub use token_cache::CachingTokenProvider;
