//! CLI browser for the Space Vocab content catalog.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use sv_core::Language;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DisplayConfig;

#[derive(Parser)]
#[command(
    name = "sv",
    about = "Space Vocab: browse the bilingual vocabulary catalog",
    version,
    propagate_version = true
)]
struct Cli {
    /// Display language for names: en or vi
    #[arg(long, global = true, env = "SV_LANG", default_value = "en")]
    lang: Language,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the four time eras
    Eras,

    /// List planets, optionally for one era
    Planets {
        /// Era id: prehistoric, medieval, modern, future
        #[arg(short, long)]
        era: Option<String>,

        /// Mark each planet open or locked for this star total
        #[arg(short, long)]
        stars: Option<u32>,
    },

    /// Show a planet and its zones
    Show {
        /// Planet id (e.g. animal)
        planet: String,
    },

    /// Show the words and sentences of one zone
    Zone {
        /// Planet id
        planet: String,

        /// Zone id within the planet
        zone: String,
    },

    /// Search words in English or Vietnamese
    Search {
        /// Text to look for
        query: String,

        /// Restrict to one era
        #[arg(short, long)]
        era: Option<String>,

        /// Restrict to one planet
        #[arg(short, long)]
        planet: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show which planets a star total opens
    Unlocks {
        /// The learner's star total
        stars: u32,
    },

    /// Print catalog counts
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the catalog
    Export {
        /// Output format: json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the built-in catalog or a catalog JSON file
    Check {
        /// Catalog JSON file (default: the built-in catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DisplayConfig::default()
        .with_lang(cli.lang)
        .with_color(!cli.no_color);
    config.apply();

    let result = match cli.command {
        Commands::Eras => commands::eras::run(&config),
        Commands::Planets { era, stars } => commands::planets::run(&config, era.as_deref(), stars),
        Commands::Show { planet } => commands::show::run(&config, &planet),
        Commands::Zone { planet, zone } => commands::zone::run(&config, &planet, &zone),
        Commands::Search {
            query,
            era,
            planet,
            limit,
        } => commands::search::run(&config, &query, era.as_deref(), planet.as_deref(), limit),
        Commands::Unlocks { stars } => commands::unlocks::run(&config, stars),
        Commands::Stats { json } => commands::stats::run(json),
        Commands::Export { format, output } => {
            commands::export::run(&config, &format, output.as_deref())
        }
        Commands::Check { file } => commands::check::run(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
