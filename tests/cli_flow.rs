//! Drives the CLI handlers against a migrated sqlite database

use cartwise::{
    cli::{self, list::ThemeArg},
    config::Config,
    db,
};
use cartwise_db::SqliteStorage;
use cartwise_grocery::{AddInput, Command, ItemState, Theme};
use temp_dir::TempDir;

fn test_config(dir: &TempDir) -> anyhow::Result<Config> {
    let path = dir.path().join("cartwise.toml");
    let url = format!("sqlite:{}", dir.path().join("cartwise.db").display());
    std::fs::write(&path, format!("[database]\nurl = \"{url}\"\n"))?;

    Ok(Config::load(Some(path.to_string_lossy().into_owned()))?)
}

#[tokio::test]
async fn test_open_migrates_and_loads_empty_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir)?;

    let cmd = cli::open(&config).await?;

    assert!(cmd.items.is_empty());
    assert_eq!(cmd.theme, Theme::Light);

    Ok(())
}

#[tokio::test]
async fn test_handlers_round_trip_through_database() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir)?;

    let mut cmd = cli::open(&config).await?;
    cli::list::add(&mut cmd, AddInput::new("Bananas")).await?;
    cli::list::add(&mut cmd, AddInput::new("Whole milk 🥛").store("Costco")).await?;
    cli::list::checkout(&mut cmd, "banana").await?;
    cli::list::complete(&mut cmd).await?;
    cli::list::set_category(&mut cmd, "whole milk", "Frozen").await?;
    cli::list::theme(&mut cmd, Some(ThemeArg::Dark)).await?;

    let cmd = cli::open(&config).await?;
    let bananas = cmd
        .items
        .iter()
        .find(|i| i.key() == "banana")
        .expect("bananas saved");
    assert_eq!(bananas.state(), ItemState::History);
    assert_eq!(bananas.purchase_count, 1);

    let milk = cmd
        .items
        .iter()
        .find(|i| i.key() == "whole milk")
        .expect("milk saved");
    assert_eq!(milk.category, "Frozen");
    assert_eq!(milk.store, "Costco");
    assert_eq!(cmd.theme, Theme::Dark);

    Ok(())
}

#[tokio::test]
async fn test_unknown_item_is_an_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir)?;

    let mut cmd = cli::open(&config).await?;

    assert!(cli::list::checkout(&mut cmd, "nothing").await.is_err());
    assert!(cli::list::delete(&mut cmd, "nothing").await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_checkout_by_name_skips_history() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir)?;

    let mut cmd = cli::open(&config).await?;
    cli::list::add(&mut cmd, AddInput::new("Milk")).await?;
    cli::list::checkout(&mut cmd, "milk").await?;
    cli::list::complete(&mut cmd).await?;

    assert!(cli::list::checkout(&mut cmd, "milk").await.is_err());
    assert_eq!(cmd.cart().count(), 0);

    let milk = cmd.history().next().expect("milk in history");
    assert_eq!(milk.purchase_count, 1);
    assert_eq!(milk.purchase_dates.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_reset_drops_saved_list() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir)?;

    let mut cmd = cli::open(&config).await?;
    cli::list::add(&mut cmd, AddInput::new("Eggs")).await?;
    cmd.storage().0.close().await;

    assert!(db::drop_database(&config.database.url).await?);

    let pool = db::create_pool(&config.database.url, 1).await?;
    db::migrate(&pool).await?;
    let cmd = Command::load(SqliteStorage(pool)).await;

    assert!(cmd.items.is_empty());

    Ok(())
}
