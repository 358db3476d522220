use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use roster::Database;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roster-server",
    about = "HTTP server for Roster documentation and member endpoints"
)]
struct Cli {
    /// Path to the .redb file (in-memory store when omitted)
    #[arg(env = "ROSTER_DB")]
    path: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ROSTER_PORT", default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Database name (defaults to filename without extension)
    #[arg(long, env = "ROSTER_DB_NAME")]
    db_name: Option<String>,

    /// Documentation file served at /api/docs
    #[arg(long, env = "ROSTER_DOCS", default_value = "API_DOCUMENTATION.md")]
    docs: PathBuf,
}

fn infer_db_name(path: Option<&str>) -> String {
    path.and_then(|p| std::path::Path::new(p).file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("roster")
        .to_string()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let db_name = cli
        .db_name
        .unwrap_or_else(|| infer_db_name(cli.path.as_deref()));

    let db = match &cli.path {
        Some(path) => match Database::open(path, &db_name) {
            Ok(db) => db,
            Err(e) => {
                eprintln!("Error opening database: {e}");
                process::exit(1);
            }
        },
        None => {
            tracing::warn!("No database path given, using an in-memory store");
            Database::memory(&db_name)
        }
    };

    let config = roster_server::ServerConfig {
        port: cli.port,
        host: cli.host,
        db_name,
        docs_path: cli.docs,
    };

    if let Err(e) = roster_server::start_server(Arc::new(db), config).await {
        eprintln!("Server error: {e}");
        process::exit(1);
    }
}
