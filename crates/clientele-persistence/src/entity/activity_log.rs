//! Activity log entity
//!
//! One note/interaction tied to a client. The relation to `clients` is
//! declared but not enforced at the storage layer, so rows can outlive or
//! precede their client (accepted orphans).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_id: i64,
    /// Free text, e.g. "Created", "Updated", "Call", "Meeting"
    pub activity_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Defaults to insertion time; seed data backdates it explicitly
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
