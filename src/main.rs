mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use coursecal_core::config::{CoursecalConfig, ExportSettings};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "coursecal")]
#[command(about = "Turn your enrolled course list into a calendar you can import")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an .ics calendar with every scheduled, in-person course
    Export {
        /// JSON array of course records ("-" for stdin)
        input: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// Print generic calendar events as JSON, for calendar APIs
    Events {
        /// JSON array of course records ("-" for stdin)
        input: PathBuf,

        #[command(flatten)]
        calendar: CalendarArgs,
    },
    /// List every course record, including online and unscheduled ones
    List {
        /// JSON array of course records ("-" for stdin)
        input: PathBuf,

        #[command(flatten)]
        calendar: CalendarArgs,
    },
}

/// Overrides for values from config.toml
#[derive(Args)]
struct CalendarArgs {
    /// Calendar name shown after import
    #[arg(long)]
    name: Option<String>,

    /// Time zone the schedule is written in (e.g. "America/Los_Angeles")
    #[arg(short, long)]
    timezone: Option<String>,

    /// Leave out X-WR-TIMEZONE and the VTIMEZONE block
    #[arg(long)]
    no_timezone: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            calendar,
        } => {
            let settings = resolve_settings(calendar)?;
            let records = input::read_records(&input)?;
            commands::export::run(&records, &settings, output.as_deref())
        }
        Commands::Events { input, calendar } => {
            let settings = resolve_settings(calendar)?;
            let records = input::read_records(&input)?;
            commands::events::run(&records, &settings)
        }
        Commands::List { input, calendar } => {
            let settings = resolve_settings(calendar)?;
            let records = input::read_records(&input)?;
            commands::list::run(&records, &settings)
        }
    }
}

fn resolve_settings(args: CalendarArgs) -> Result<ExportSettings> {
    let mut config = CoursecalConfig::load()?;

    if let Some(name) = args.name {
        config.calendar_name = name;
    }
    if let Some(timezone) = args.timezone {
        config.timezone = timezone;
    }
    if args.no_timezone {
        config.embed_timezone = false;
    }

    Ok(config.settings()?)
}
