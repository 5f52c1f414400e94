use anyhow::Result;
use clap::{Parser, Subcommand};

use categories::cli::{handle_category_command, handle_entry_command};
use categories::config::{AppPaths, Settings};
use categories::logging::init_tracing;
use categories::storage::FileBlobStore;
use categories::store::{DataStore, STORAGE_KEY};

#[derive(Parser)]
#[command(
    name = "categories",
    version,
    about = "Track income and expenses by category",
    long_about = "Create named categories, attach dated income and expense entries \
                  to them, and see per-category totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(categories::cli::CategoryCommands),

    /// Entry management commands
    #[command(subcommand)]
    Entry(categories::cli::EntryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;

    let backend = FileBlobStore::new(paths.data_dir());
    let mut store = DataStore::open(backend);

    let result = match cli.command {
        Some(Commands::Category(cmd)) => handle_category_command(&mut store, &settings, cmd),
        Some(Commands::Entry(cmd)) => handle_entry_command(&mut store, &settings, cmd),
        Some(Commands::Config) => {
            println!("Categories Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", store.backend().path_for(STORAGE_KEY).display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default sort:    {}", settings.default_sort);
            Ok(())
        }
        None => {
            println!("Categories - track income and expenses by category");
            println!();
            println!("Run 'categories --help' for usage information.");
            Ok(())
        }
    };

    // Exit hook: anything a failed save left behind gets one more try
    if store.is_dirty() {
        store.flush();
    }

    Ok(result?)
}
