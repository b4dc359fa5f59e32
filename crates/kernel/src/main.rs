//! Waymark CLI
//!
//! Loads module manifests, aggregates them into the navigation registry, and
//! answers tree, route, match, and landing queries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use waymark_kernel::cli;
use waymark_kernel::{Config, NavRegistry, load_modules};

/// Inspect the navigation contributed by application modules.
#[derive(Parser, Debug)]
#[command(name = "waymark")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Modules directory (overrides WAYMARK_MODULES_DIR)
    #[arg(short = 'M', long, global = true)]
    modules_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the navigation tree visible to a session
    Tree(SessionArgs),

    /// Print every registered route in registration order
    Routes,

    /// Print the route matching a URL path
    Match {
        /// Concrete path, e.g. /users/42
        path: String,
    },

    /// Print the landing route for a session
    Landing(SessionArgs),
}

/// Session described on the command line.
#[derive(Args, Debug)]
struct SessionArgs {
    /// Permission held by the session (repeatable)
    #[arg(short, long = "permission")]
    permissions: Vec<String>,

    /// Session without a resolved permission set
    #[arg(long, conflicts_with = "permissions")]
    anonymous: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = args.modules_dir {
        config.modules_dir = dir;
    }

    let modules = load_modules(&config.modules_dir).with_context(|| {
        format!(
            "failed to load modules from {}",
            config.modules_dir.display()
        )
    })?;
    let registry = NavRegistry::from_manifests(modules);
    info!(
        routes = registry.len(),
        sections = registry.sections().len(),
        "navigation registry built"
    );

    match args.command {
        Commands::Tree(session) => {
            let session = cli::session_from_args(session.permissions, session.anonymous);
            cli::cmd_tree(&registry, &session)
        }
        Commands::Routes => cli::cmd_routes(&registry),
        Commands::Match { path } => cli::cmd_match(&registry, &path),
        Commands::Landing(session) => {
            let session = cli::session_from_args(session.permissions, session.anonymous);
            cli::cmd_landing(&session, &config.landing)
        }
    }
}

/// Initialize tracing on stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
