use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use commands::{add, clear, config, delete, history, summary, AppContext};
use watchtrack_config::{Config, PathManager};
use watchtrack_models::User;

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "watchtrack")]
#[command(about = "WatchTrack - Keep a running tally of watch time for Lior and Ethan")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a watch session (or a deduction with --subtract)
    #[command(long_about = "Record a watch session. Missing title, user and duration are prompted for when running in a terminal. Use --subtract to deduct time instead of adding it.")]
    Add {
        /// What was watched
        #[arg(long)]
        title: Option<String>,

        /// Who watched it (lior or ethan)
        #[arg(long)]
        user: Option<User>,

        /// Category, e.g. movie or show
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Date watched (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Hours watched
        #[arg(long)]
        hours: Option<u32>,

        /// Minutes watched
        #[arg(long)]
        minutes: Option<u32>,

        /// Deduct the duration instead of adding it
        #[arg(long, action = ArgAction::SetTrue)]
        subtract: bool,
    },
    /// Delete a session by id
    Delete {
        /// Session id as shown by `watchtrack history`
        id: String,
    },
    /// Delete every recorded session
    #[command(long_about = "Delete the whole watch history for both users. Asks for confirmation unless --yes is given.")]
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Show total watch time per user
    Summary,
    /// List recorded sessions, newest first
    History {
        /// Only show sessions for this user
        #[arg(long)]
        user: Option<User>,
    },
    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the config, data and log locations
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let paths = PathManager::default();
    let config_file = paths.config_file();
    let loaded = Config::load_or_default(&config_file);

    let log_file = match &loaded {
        Ok(config) if config.logging.file => Some(paths.log_file()),
        _ => None,
    };
    logging::init_logging(cli.verbose, cli.quiet, log_file.as_deref())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let config = loaded.map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })?;

    let output = output::Output::new(cli.output, cli.quiet);
    let ctx = AppContext::new(paths, config);

    match cli.command {
        Commands::Add {
            title,
            user,
            kind,
            date,
            hours,
            minutes,
            subtract,
        } => add::run_add(
            add::AddArgs { title, user, kind, date, hours, minutes, subtract },
            &ctx,
            &output,
        ),
        Commands::Delete { id } => delete::run_delete(&id, &ctx, &output),
        Commands::Clear { yes } => clear::run_clear(yes, &ctx, &output),
        Commands::Summary => summary::run_summary(&ctx, &output),
        Commands::History { user } => history::run_history(user, &ctx, &output),
        Commands::Config { cmd } => config::run_config(cmd.unwrap_or(ConfigCommands::Show), &ctx, &output),
    }
}
