use std::process;

use clap::{Parser, Subcommand};
use roster::{Database, ListOptions, RosterError};

#[derive(Parser)]
#[command(name = "roster", about = "Seed and inspect Roster member databases")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show database info (name, member count)
    Info {
        /// Path to the .redb file
        path: String,
        /// Database name (defaults to filename without extension)
        #[arg(long)]
        db_name: Option<String>,
    },

    /// Get a single member by ID
    Get {
        /// Path to the .redb file
        path: String,
        /// Member ID
        id: String,
        /// Database name (defaults to filename without extension)
        #[arg(long)]
        db_name: Option<String>,
    },

    /// List members in natural order
    List {
        /// Path to the .redb file
        path: String,
        /// Maximum number of members to return
        #[arg(long)]
        limit: Option<usize>,
        /// Number of members to skip
        #[arg(long, default_value = "0")]
        skip: usize,
        /// Database name (defaults to filename without extension)
        #[arg(long)]
        db_name: Option<String>,
    },

    /// Import members from a JSON file (array of objects)
    Import {
        /// Path to the .redb file
        path: String,
        /// JSON file holding an array of members
        file: String,
        /// Database name (defaults to filename without extension)
        #[arg(long)]
        db_name: Option<String>,
    },
}

fn infer_db_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("roster")
        .to_string()
}

fn open_db(path: &str, name: Option<&str>) -> roster::Result<Database> {
    let db_name = name
        .map(String::from)
        .unwrap_or_else(|| infer_db_name(path));
    Database::open(path, &db_name)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> roster::Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> roster::Result<()> {
    match cli.command {
        Commands::Info { path, db_name } => {
            let db = open_db(&path, db_name.as_deref())?;
            let info = db.info().await?;
            print_json(&serde_json::to_value(&info)?, cli.pretty)?;
        }

        Commands::Get { path, id, db_name } => {
            let db = open_db(&path, db_name.as_deref())?;
            let member = db.get(&id).await?;
            print_json(&serde_json::to_value(&member)?, cli.pretty)?;
        }

        Commands::List {
            path,
            limit,
            skip,
            db_name,
        } => {
            let db = open_db(&path, db_name.as_deref())?;
            let members = db.list(ListOptions { limit, skip }).await?;
            print_json(&serde_json::to_value(&members)?, cli.pretty)?;
        }

        Commands::Import {
            path,
            file,
            db_name,
        } => {
            let db = open_db(&path, db_name.as_deref())?;
            let content = std::fs::read_to_string(&file)?;
            let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
                RosterError::BadRequest(format!("invalid JSON in '{file}': {e}"))
            })?;

            let results = db.import_json(value).await?;
            print_json(
                &serde_json::json!({
                    "ok": true,
                    "imported": results.len(),
                }),
                cli.pretty,
            )?;
        }
    }

    Ok(())
}
