use std::{path::PathBuf, str::FromStr};

use cartwise_db::SqliteStorage;
use cartwise_grocery::{AddInput, Command};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_storage(path: PathBuf) -> anyhow::Result<SqliteStorage> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    cartwise_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(SqliteStorage(pool))
}

#[allow(dead_code)]
pub async fn add_items(
    command: &mut Command<SqliteStorage>,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let name = name.into();
        let Some(id) = command.add(AddInput::new(&name)).await.id().map(str::to_owned) else {
            anyhow::bail!("{name} was not added");
        };
        ids.push(id);
    }

    Ok(ids)
}
