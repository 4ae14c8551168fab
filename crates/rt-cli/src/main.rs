//! CLI frontend for Rolltables.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "rt",
    about = "Rolltables: store random tables and roll on them",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Storage backend: file or kv
    #[arg(long, global = true, default_value = "file")]
    store: String,

    /// Table directory (file) or database file (kv)
    #[arg(long, global = true)]
    location: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a CSV file as a table, replacing any table with the same name
    Load {
        /// CSV file; the first record is the header
        csv: PathBuf,

        /// Table name
        #[arg(short, long)]
        name: String,

        /// Dice expression used to roll on the table (e.g. d6, 2d8)
        #[arg(short, long, default_value = "")]
        roll: String,

        /// Human-readable title
        #[arg(long)]
        title: Option<String>,

        /// Descriptive text shown with the table
        #[arg(long)]
        flavor: Option<String>,

        /// Campaign the table belongs to
        #[arg(long)]
        campaign: Option<String>,
    },

    /// List stored tables
    List,

    /// Show every row of a table
    Show {
        /// Table name
        name: String,
    },

    /// Evaluate a table expression (e.g. ?npc, 2?npc, uni:3?npc, 4#npc)
    Roll {
        /// Table expression
        expression: String,
    },

    /// Roll a dice expression (e.g. 2d6+1)
    Dice {
        /// Dice expression
        expression: String,
    },

    /// Delete a table
    Delete {
        /// Table name
        name: String,
    },

    /// Export a table as CSV records or as the full JSON document
    Export {
        /// Table name
        name: String,

        /// Output format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = Context::new(&cli.store, cli.location, cli.seed).and_then(|ctx| match cli.command {
        Commands::Load {
            csv,
            name,
            roll,
            title,
            flavor,
            campaign,
        } => commands::load::run(
            &ctx,
            &csv,
            &name,
            &roll,
            commands::load::Details {
                title,
                flavor,
                campaign,
            },
        ),
        Commands::List => commands::list::run(&ctx),
        Commands::Show { name } => commands::show::run(&ctx, &name),
        Commands::Roll { expression } => commands::roll::run(&ctx, &expression),
        Commands::Dice { expression } => commands::dice::run(&ctx, &expression),
        Commands::Delete { name } => commands::delete::run(&ctx, &name),
        Commands::Export {
            name,
            format,
            output,
        } => commands::export::run(&ctx, &name, &format, output.as_deref()),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
