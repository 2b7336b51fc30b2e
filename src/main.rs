use anyhow::Result;
use cartwise::cli::{
    self,
    list::{OrderAction, ThemeArg},
    report::StatView,
};
use cartwise_grocery::AddInput;
use clap::{Parser, Subcommand};

/// cartwise - a grocery list that learns
#[derive(Parser)]
#[command(name = "cartwise")]
#[command(about = "Grocery list organizer with learned categories and restock hints", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item, emoji included ("Oat milk 🌾")
    Add {
        name: String,

        /// Category label (remembered for this item)
        #[arg(long)]
        category: Option<String>,

        /// Store label (remembered unless "Any Store"), see `cartwise stores`
        #[arg(long)]
        store: Option<String>,

        /// Add even if the item is already on the list
        #[arg(long)]
        force: bool,
    },
    /// Put an item in the cart
    Checkout { item: String },
    /// Take an item back out of the cart
    Uncheck { item: String },
    /// Finish the trip, moving the cart to history
    Complete,
    /// Change an item's category
    Category { item: String, category: String },
    /// Change an item's store, an empty value unassigns it
    Store { item: String, store: String },
    /// Remove an item
    Delete { item: String },
    /// Remove every item not in the cart or history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Reset purchase history, keeping items and learned preferences
    Refresh {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the list grouped by category
    List,
    /// Show preset stores and stores already in use
    Stores,
    /// Items that are due to be bought again
    Suggest,
    /// Items overdue or coming due
    Reminders,
    /// Purchase statistics
    Stats {
        #[arg(value_enum, default_value_t = StatView::Items)]
        view: StatView,
    },
    /// Show or change the category display order
    Order {
        #[command(subcommand)]
        action: Option<OrderAction>,
    },
    /// Show or set the theme
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cartwise::config::Config::load(cli.config.clone())?;
    config.validate()?;

    cartwise::observability::init_observability(
        "cartwise",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        command => run_command(config, command).await,
    }
}

#[tracing::instrument(skip(config, command))]
async fn run_command(config: cartwise::config::Config, command: Commands) -> Result<()> {
    let mut cmd = cli::open(&config).await?;

    match command {
        Commands::Add {
            name,
            category,
            store,
            force,
        } => {
            let input = AddInput {
                name,
                category,
                store,
                force,
            };
            cli::list::add(&mut cmd, input).await
        }
        Commands::Checkout { item } => cli::list::checkout(&mut cmd, &item).await,
        Commands::Uncheck { item } => cli::list::uncheck(&mut cmd, &item).await,
        Commands::Complete => cli::list::complete(&mut cmd).await,
        Commands::Category { item, category } => {
            cli::list::set_category(&mut cmd, &item, &category).await
        }
        Commands::Store { item, store } => cli::list::set_store(&mut cmd, &item, &store).await,
        Commands::Delete { item } => cli::list::delete(&mut cmd, &item).await,
        Commands::Clear { yes } => cli::list::clear(&mut cmd, yes).await,
        Commands::Refresh { yes } => cli::list::refresh(&mut cmd, yes).await,
        Commands::List => {
            cli::list::show(&cmd);
            Ok(())
        }
        Commands::Stores => {
            cli::list::stores(&cmd);
            Ok(())
        }
        Commands::Suggest => {
            cli::report::suggest(&cmd, &config.suggestions);
            Ok(())
        }
        Commands::Reminders => {
            cli::report::reminders(&cmd, &config.suggestions);
            Ok(())
        }
        Commands::Stats { view } => {
            cli::report::stats(&cmd, view, &config.suggestions);
            Ok(())
        }
        Commands::Order { action } => cli::list::order(&mut cmd, action).await,
        Commands::Theme { theme } => cli::list::theme(&mut cmd, theme).await,
        Commands::Migrate | Commands::Reset => Ok(()),
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: cartwise::config::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = cartwise::db::create_pool(&config.database.url, 1).await?;
    cartwise::db::migrate(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: cartwise::config::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if cartwise::db::drop_database(&config.database.url).await? {
        tracing::warn!("Dropped existing database: {}", config.database.url);
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
