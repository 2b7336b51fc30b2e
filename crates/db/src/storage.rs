use cartwise_shared::Storage;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::table::KvEntry;

/// [`Storage`] backed by the `kv_entry` table.
#[derive(Clone)]
pub struct SqliteStorage(pub SqlitePool);

#[async_trait::async_trait]
impl Storage for SqliteStorage {
    async fn get(&self, key: &str) -> cartwise_shared::Result<Option<String>> {
        let statement = Query::select()
            .column(KvEntry::Value)
            .from(KvEntry::Table)
            .and_where(Expr::col(KvEntry::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> cartwise_shared::Result<()> {
        let statement = Query::insert()
            .into_table(KvEntry::Table)
            .columns([KvEntry::Key, KvEntry::Value, KvEntry::UpdatedAt])
            .values_panic([
                key.into(),
                value.into(),
                chrono::Utc::now().timestamp().into(),
            ])
            .on_conflict(
                OnConflict::column(KvEntry::Key)
                    .update_columns([KvEntry::Value, KvEntry::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
