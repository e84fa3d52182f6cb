//! CLI frontend for the Sobitype spending character test.

mod commands;

use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sobi_core::config::DEFAULT_ORIGIN;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sobi",
    about = "Sobitype — which spending character are you?",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (overridden by SOBI_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every character in the catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one character in detail
    Show {
        /// Main code, e.g. SNF
        code: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive a result from answers in SP EI NR FL order
    Derive {
        /// Four answer tokens (S E N F) or one four-letter string (SENF)
        #[arg(required = true, num_args = 1..)]
        answers: Vec<String>,
    },

    /// Show the compatibility comment for two main codes
    Compat {
        /// First main code
        a: String,

        /// Second main code
        b: String,
    },

    /// Parse a referral value or a share URL
    Ref {
        /// Raw `ref` value (e.g. SNFE) or a URL carrying `?ref=`
        value: String,
    },

    /// Print the result receipt for a full code
    Receipt {
        /// Full code, e.g. SNFE
        code: String,

        /// Friend's referral value or share URL
        #[arg(short, long = "ref")]
        referrer: Option<String>,

        /// Receipt date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a share link and one-line share text
    Share {
        /// Full code, e.g. SNFE
        code: String,

        /// Channel tag carried in the link
        #[arg(short, long, default_value = "link")]
        channel: String,

        /// Origin the link points at
        #[arg(long, env = "SOBI_ORIGIN", default_value = DEFAULT_ORIGIN)]
        origin: String,
    },

    /// Show the link-preview card text for a `code` value
    Og {
        /// Main code; anything else yields the generic card
        code: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the quiz interactively
    Quiz {
        /// Friend's referral value or share URL
        #[arg(short, long = "ref")]
        referrer: Option<String>,

        /// Receipt date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SOBI_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Show { code, json } => commands::show::run(&code, json),
        Commands::Derive { answers } => commands::derive::run(&answers),
        Commands::Compat { a, b } => commands::compat::run(&a, &b),
        Commands::Ref { value } => commands::referral::run(&value),
        Commands::Receipt {
            code,
            referrer,
            date,
            json,
        } => commands::receipt::run(&code, referrer.as_deref(), date, json),
        Commands::Share {
            code,
            channel,
            origin,
        } => commands::share::run(&code, &channel, &origin),
        Commands::Og { code, json } => commands::og::run(&code, json),
        Commands::Quiz { referrer, date } => commands::quiz::run(referrer.as_deref(), date),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
