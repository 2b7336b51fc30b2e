use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum KvEntry {
    Table,
    Key,
    Value,
    UpdatedAt,
}
