use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use picsheet_api::{create_app, AppState};
use picsheet_client::{ExportService, ExportServiceConfig, SHEETS_API_URL};
use picsheet_core::CredentialSource;
use picsheet_core::credentials::DEFAULT_CREDENTIAL_ENV;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "picsheet: exports image metadata to Google Sheets"
)]
struct Args {
    #[arg(long, env = "PICSHEET_BIND", default_value = "0.0.0.0:3000", help = "Address to listen on")]
    bind: SocketAddr,

    #[arg(
        long,
        env = "PICSHEET_CREDENTIAL_ENV",
        default_value = DEFAULT_CREDENTIAL_ENV,
        help = "Environment variable holding the service-account JSON key"
    )]
    credential_env: String,

    #[arg(long, env = "PICSHEET_TOKEN_URL", help = "Override of the credential's token_uri")]
    token_url: Option<String>,

    #[arg(long, env = "PICSHEET_SHEETS_API_URL", default_value = SHEETS_API_URL, help = "Sheets API spreadsheets endpoint")]
    sheets_api_url: String,

    #[arg(long, env = "PICSHEET_TOKEN_CACHE", default_value_t = false, help = "Reuse access tokens across exports")]
    token_cache: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = ExportServiceConfig {
        credential_source: CredentialSource::Env(args.credential_env),
        token_url: args.token_url,
        sheets_api_url: args.sheets_api_url,
        token_cache: args.token_cache,
    };
    if config.token_cache {
        info!("Access token cache enabled");
    }

    let state = Arc::new(AppState {
        export_service: ExportService::new(config),
    });
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
