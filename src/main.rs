use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use vulndb_version::config::cache_dir;
use vulndb_version::db::{DbType, Metadata, Store};
use vulndb_version::report::{OutputFormat, show_version};

#[derive(Parser)]
#[command(name = "vulndb-version")]
#[command(version, about = "Show the scanner version and vulnerability database state")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Cache directory (defaults to $XDG_CACHE_HOME/trivy)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Vulnerability database maintenance
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Overwrite the database metadata record
    SetMetadata {
        /// Database schema/content version
        #[arg(long = "db-version")]
        db_version: i64,

        /// Database type (1 = Light)
        #[arg(long = "type")]
        db_type: i32,

        /// Last update time (RFC3339)
        #[arg(long)]
        updated_at: DateTime<Utc>,

        /// Next scheduled update time (RFC3339)
        #[arg(long)]
        next_update: DateTime<Utc>,
    },
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn set_metadata(cache_dir: &Path, metadata: &Metadata) -> anyhow::Result<()> {
    let store = Store::open(cache_dir)?;
    store.set_metadata(metadata)?;
    store.close()?;
    info!("Metadata updated in {:?}", cache_dir);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cache_dir = cli.global.cache_dir.unwrap_or_else(cache_dir);

    match cli.command {
        None => {
            let mut stdout = std::io::stdout().lock();
            show_version(&cache_dir, cli.format, env!("CARGO_PKG_VERSION"), &mut stdout)?;
            stdout.flush()?;
        }
        Some(Command::Db {
            action:
                DbAction::SetMetadata {
                    db_version,
                    db_type,
                    updated_at,
                    next_update,
                },
        }) => {
            let metadata = Metadata {
                version: db_version,
                db_type: DbType(db_type),
                next_update,
                updated_at,
            };
            set_metadata(&cache_dir, &metadata)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
