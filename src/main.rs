use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use finance_dashboard::cli::{handle_goal_command, handle_report_command, GoalCommands, ReportArgs};
use finance_dashboard::config::{DashboardPaths, Settings};
use finance_dashboard::logging::init_logging;
use finance_dashboard::storage::goals_store;

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Personal finance dashboard for spreadsheet exports",
    long_about = "findash loads a transaction spreadsheet (date, category, type, \
                  amount, description) and reports balances, spending by category, \
                  progress against monthly goals and a month-by-month overview."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a spreadsheet and show the dashboard
    Report(ReportArgs),

    /// Monthly goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Write default settings and an empty goals file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!(error = %e, "Command failed");
        return Err(e);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&paths, &settings, args)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finance dashboard at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let store = goals_store(&paths, &settings);
            if !store.path().exists() {
                store.save(&store.load())?;
            }

            println!("Initialization complete!");
            println!();
            println!("Goal categories:");
            for category in &settings.goal_categories {
                println!("  - {}", category);
            }
            println!();
            println!("Run 'findash goal set <CATEGORY> <AMOUNT>' to set a monthly goal.");
        }
        Some(Commands::Config) => {
            println!("Finance Dashboard Configuration");
            println!("==============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Goals file:     {}", paths.goals_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Goal categories: {}", settings.goal_categories.join(", "));
            println!("  Income label:    {}", settings.income_label);
            println!("  Expense label:   {}", settings.expense_label);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Cache TTL:       {}s", settings.cache_ttl_secs);
        }
        None => {
            println!("findash - Personal finance dashboard");
            println!();
            println!("Run 'findash --help' for usage information.");
            println!("Run 'findash report <FILE>' to analyze a spreadsheet.");
        }
    }

    Ok(())
}
