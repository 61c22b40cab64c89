use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_calendar_command, handle_event_command, handle_expense_command,
    handle_export_command, handle_history_command, handle_summary_command, EventCommands,
    ExpenseCommands, ExportFormat,
};
use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
use finance_tracker::logging::init_logging;
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal personal-finance tracker",
    long_about = "fintrack records expenses and calendar events, and shows spending \
                  totals by payment type, category and month, from the command line \
                  or an interactive dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Show spending totals
    Summary {
        /// Only count expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the calendar for a month
    #[command(alias = "cal")]
    Calendar {
        /// Month to show (YYYY-MM, default: current)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Calendar event management commands
    #[command(subcommand)]
    Event(EventCommands),

    /// Export data
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = init_logging(&paths, &settings.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            finance_tracker::tui::run_tui(&storage, settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            finance_tracker::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'fintrack expense add -d <description> -v <value> -p <pix|debit|credit>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.trace_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Default event color: {}", settings.default_event_color);
            println!("  Log level:           {}", settings.log_level);
        }
        Some(Commands::Summary { month }) => {
            handle_summary_command(&storage, &settings, month)?;
        }
        Some(Commands::Calendar { month }) => {
            handle_calendar_command(&storage, month)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Event(cmd)) => {
            handle_event_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(&storage, format, output, pretty)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        None => {
            println!("fintrack - Terminal personal-finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
