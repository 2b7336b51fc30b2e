use sqlx_migrator::{Info, Migrator, vec_box};

mod m0001;
mod storage;
pub mod table;

pub use storage::SqliteStorage;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec_box![m0001::Migration])?;

    Ok(migrator)
}
