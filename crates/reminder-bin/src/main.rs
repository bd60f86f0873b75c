//! Location reminders command-line entry point.

mod app;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reminder_config_and_utils::{init_logging, Config, Paths};

use crate::app::{AddArgs, App};

/// Location reminders command-line interface.
#[derive(Parser)]
#[command(name = "reminders")]
#[command(about = "Save places and get reminded when you get there")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error). Defaults to the configured level
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Base directory for config, database and logs. Defaults to ~/.location-reminders
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Also write JSONL logs under the base directory
    #[arg(long, global = true)]
    log_to_file: bool,

    /// Signed-in user id; commands are refused without one
    #[arg(long, env = "REMINDERS_USER", global = true)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every saved reminder
    List,
    /// Show one reminder
    Show {
        /// Reminder id
        id: String,
    },
    /// Validate and save a reminder, then print its geofence request
    Add(AddArgs),
    /// Delete every reminder
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = match cli.base_dir {
        Some(base) => Paths::with_base_dir(base),
        None => Paths::new()?,
    };
    paths.ensure_dirs()?;
    // First run leaves an editable config behind.
    if !paths.config_file().exists() {
        Config::default().save(&paths)?;
    }
    let config = Config::load(&paths)?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level, cli.log_to_file.then(|| paths.log_file()));

    let app = App::build(&paths, config, cli.user)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::List => app.list(&mut out).await,
        Commands::Show { id } => app.show(&id, &mut out).await,
        Commands::Add(args) => app.add(args, &mut out).await,
        Commands::Clear => app.clear(&mut out).await,
    }
}
