mod kv_entry;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "cartwise",
    "m0001",
    vec_box![],
    vec_box![kv_entry::CreateTable]
);
