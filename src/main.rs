mod calc;
mod cmd;
mod data;
mod ui;

use crate::cmd::Query;
use crate::data::{AppSettings, Country};
use crate::ui::theme::{is_random, Theme};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "holiday-tracker", about = "track which holidays have passed this year")]
struct Cli {
    /// Path to the data directory containing config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Calendar year to show (default: the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Country code or name (e.g. CA, canada, jp); overrides config.yaml
    #[arg(short, long)]
    country: Option<String>,

    /// Theme id (e.g. lofi-beige, galaxy, random); overrides config.yaml
    #[arg(short, long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data files with default settings
    Init,
    /// List holidays with their status
    List {
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
        /// Order by calendar date instead of table order
        #[arg(long)]
        sorted: bool,
    },
    /// Show completed count, year progress and the next holiday
    Summary,
    /// List recognized countries
    Countries,
    /// List available themes
    Themes,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    calc::validate_tables()?;

    // Resolve data_dir to an absolute path so file I/O is independent of later cwd changes.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    let stored = AppSettings::load()?;
    let settings = stored
        .clone()
        .with_overrides(cli.country.as_deref(), cli.theme.as_deref());

    if let Some(code) = settings.country.as_deref() {
        if Country::lookup(code).is_none() {
            warn!("unrecognized country '{}', showing the default holiday list", code);
        }
    }
    if !is_random(&settings.theme) && Theme::find(&settings.theme).is_none() {
        warn!("unknown theme '{}', using '{}'", settings.theme, Theme::default().id);
    }

    let today = calc::today();
    let query = Query {
        year: cli.year.unwrap_or_else(|| today.year()),
        country: settings.country.clone(),
        today,
    };

    match cli.command {
        None => {
            let theme = Theme::resolve(&settings.theme);
            cmd::root::run(&query, theme, stored)
        }
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::List { json, sorted }) => cmd::holidays::run(&query, json, sorted),
        Some(Commands::Summary) => cmd::summary::run(&query),
        Some(Commands::Countries) => cmd::countries::run(),
        Some(Commands::Themes) => cmd::themes::run(&settings.theme),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "settings: {}").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_global_flags_and_list() {
        let cli = Cli::try_parse_from([
            "holiday-tracker", "--year", "2025", "--country", "CANADA", "list", "--json",
        ])
        .unwrap();
        assert_eq!(cli.year, Some(2025));
        assert_eq!(cli.country.as_deref(), Some("CANADA"));
        assert!(matches!(cli.command, Some(Commands::List { json: true, sorted: false })));
    }

    #[test]
    fn test_cli_no_subcommand_opens_board() {
        let cli = Cli::try_parse_from(["holiday-tracker"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, PathBuf::from("./config"));
    }
}
