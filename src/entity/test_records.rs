use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Serialized as `{"id", "message", "timestamp"}`, lowercase field names with
/// an RFC 3339 timestamp. Clients keyed on `ID`/`Message`/`Timestamp` need
/// to switch to these names.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "test_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u32,
    #[sea_orm(column_type = "String(Some(255))")]
    pub message: String,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
