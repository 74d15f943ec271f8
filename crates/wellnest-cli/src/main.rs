use chrono::{NaiveDate, Timelike};
use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "wellnest-cli", version, about = "Wellnest CLI")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Month calendar
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Journal entries and summaries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Mood tracking
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Overview figures
    Dashboard,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("WELLNEST_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let now = chrono::Local::now();
    let ctx = Context {
        today: cli.today.unwrap_or_else(|| now.date_naive()),
        hour: now.hour(),
    };

    let result = match cli.command {
        Commands::Calendar { action } => commands::calendar::run(&ctx, action),
        Commands::Task { action } => commands::task::run(&ctx, action),
        Commands::Journal { action } => commands::journal::run(&ctx, action),
        Commands::Mood { action } => commands::mood::run(&ctx, action),
        Commands::Dashboard => commands::dashboard::run(&ctx),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
