use cartwise_grocery::{AddInput, AddOutcome, Command, ItemState, Theme};
use cartwise_shared::Storage;
use clap::{Subcommand, ValueEnum};

use super::{prompt, render, resolve, resolve_in};

#[derive(Subcommand, Debug, Clone)]
pub enum OrderAction {
    /// Move a category one place up
    Up { label: String },
    /// Move a category one place down
    Down { label: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

pub async fn add<S: Storage>(cmd: &mut Command<S>, input: AddInput) -> anyhow::Result<()> {
    match cmd.add(input).await {
        AddOutcome::Added(id) | AddOutcome::Reactivated(id) => {
            if let Some(item) = cmd.find(&id) {
                println!("Added {} to {}", item.name, item.category);
            }
        }
        AddOutcome::Duplicate(conflict) => {
            eprintln!("{}", conflict.message());
            eprintln!("Add anyway: {}", render::duplicate_hint(&conflict.force()));
        }
        AddOutcome::Rejected => {
            tracing::debug!("nothing to add");
        }
    }

    Ok(())
}

pub async fn checkout<S: Storage>(cmd: &mut Command<S>, query: &str) -> anyhow::Result<()> {
    let id = resolve_in(cmd, query, ItemState::Active)?;
    cmd.checkout(&id).await?;

    if let Some(item) = cmd.find(&id) {
        println!("🛒 {} is in the cart", item.name);
    }

    Ok(())
}

pub async fn uncheck<S: Storage>(cmd: &mut Command<S>, query: &str) -> anyhow::Result<()> {
    let id = resolve_in(cmd, query, ItemState::Cart)?;
    cmd.return_to_list(&id).await?;

    if let Some(item) = cmd.find(&id) {
        println!("{} is back on the list", item.name);
    }

    Ok(())
}

pub async fn complete<S: Storage>(cmd: &mut Command<S>) -> anyhow::Result<()> {
    match cmd.complete_trip().await {
        0 => println!("The cart is empty."),
        n => println!("Trip completed! {n} item(s) moved to history."),
    }

    Ok(())
}

pub async fn set_category<S: Storage>(
    cmd: &mut Command<S>,
    query: &str,
    category: &str,
) -> anyhow::Result<()> {
    let id = resolve(cmd, query, ItemState::Active)?;
    cmd.update_category(&id, category).await?;

    Ok(())
}

pub async fn set_store<S: Storage>(
    cmd: &mut Command<S>,
    query: &str,
    store: &str,
) -> anyhow::Result<()> {
    let id = resolve(cmd, query, ItemState::Active)?;
    cmd.update_store(&id, store).await?;

    Ok(())
}

pub async fn delete<S: Storage>(cmd: &mut Command<S>, query: &str) -> anyhow::Result<()> {
    let id = resolve(cmd, query, ItemState::Active)?;
    let item = cmd.delete_item(&id).await?;
    println!("Removed {}", item.name);

    Ok(())
}

pub async fn clear<S: Storage>(cmd: &mut Command<S>, yes: bool) -> anyhow::Result<()> {
    if !yes && !prompt::confirm("Remove all unchecked items from your list?")? {
        return Ok(());
    }

    let removed = cmd.clear_active().await;
    println!("List cleared, {removed} item(s) removed.");

    Ok(())
}

pub async fn refresh<S: Storage>(cmd: &mut Command<S>, yes: bool) -> anyhow::Result<()> {
    let question = "Start fresh? This clears your purchase history and statistics, \
        but keeps what was learned about your items.";
    if !yes && !prompt::confirm(question)? {
        return Ok(());
    }

    let refreshed = cmd.refresh_history().await;
    println!("Habits and statistics refreshed for {refreshed} item(s).");

    Ok(())
}

pub fn show<S: Storage>(cmd: &Command<S>) {
    print!("{}", render::list(cmd));
}

pub fn stores<S: Storage>(cmd: &Command<S>) {
    print!("{}", render::stores(cmd));
}

pub async fn order<S: Storage>(
    cmd: &mut Command<S>,
    action: Option<OrderAction>,
) -> anyhow::Result<()> {
    let moved = match &action {
        Some(OrderAction::Up { label }) => Some((label, cmd.move_category_up(label).await)),
        Some(OrderAction::Down { label }) => Some((label, cmd.move_category_down(label).await)),
        None => None,
    };

    if let Some((label, false)) = moved {
        eprintln!("{label} cannot move further");
    }

    print!("{}", render::order(&cmd.category_order));

    Ok(())
}

pub async fn theme<S: Storage>(
    cmd: &mut Command<S>,
    theme: Option<ThemeArg>,
) -> anyhow::Result<()> {
    if let Some(theme) = theme {
        cmd.set_theme(theme.into()).await;
    }

    println!("{}", cmd.theme);

    Ok(())
}
