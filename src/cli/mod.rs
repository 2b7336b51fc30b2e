use cartwise_db::SqliteStorage;
use cartwise_grocery::{Command, GroceryItem, GroceryList, ItemState, normalize};

use crate::config::Config;

pub mod list;
pub mod prompt;
pub mod render;
pub mod report;

/// Opens the configured database, migrating it first, and loads the list.
pub async fn open(config: &Config) -> anyhow::Result<Command<SqliteStorage>> {
    let pool =
        crate::db::create_pool(&config.database.url, config.database.max_connections).await?;
    crate::db::migrate(&pool).await?;

    Ok(Command::load(SqliteStorage(pool)).await)
}

fn by_name<'a>(list: &'a GroceryList, query: &str) -> impl Iterator<Item = &'a GroceryItem> {
    let key = normalize(query);

    list.items
        .iter()
        .filter(move |i| !key.is_empty() && i.key() == key)
}

/// Finds the item meant by `query`: an exact id, else a name with the same
/// normalized key, items in `prefer` state first.
pub fn resolve(list: &GroceryList, query: &str, prefer: ItemState) -> anyhow::Result<String> {
    if let Some(item) = list.find(query) {
        return Ok(item.id.to_owned());
    }

    let matches = by_name(list, query).collect::<Vec<_>>();

    match matches
        .iter()
        .find(|i| i.state() == prefer)
        .or_else(|| matches.first())
    {
        Some(item) => Ok(item.id.to_owned()),
        None => anyhow::bail!("No item matches \"{query}\""),
    }
}

/// Like [`resolve`], but a name only matches items in `state`.
pub fn resolve_in(list: &GroceryList, query: &str, state: ItemState) -> anyhow::Result<String> {
    if let Some(item) = list.find(query) {
        return Ok(item.id.to_owned());
    }

    match by_name(list, query).find(|i| i.state() == state) {
        Some(item) => Ok(item.id.to_owned()),
        None => match state {
            ItemState::Active => anyhow::bail!("\"{query}\" is not on the list"),
            ItemState::Cart => anyhow::bail!("\"{query}\" is not in the cart"),
            ItemState::History => anyhow::bail!("\"{query}\" is not in history"),
        },
    }
}
