//! Client entity
//!
//! One row per insured individual / policy holder. Only `name` is
//! constrained; every other attribute is stored as supplied. Policy dates
//! are ISO `YYYY-MM-DD` text and compare lexicographically.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,
    /// Messaging handle used to reach the client
    #[sea_orm(column_type = "Text", nullable)]
    pub wechat: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub policy_type: Option<String>,
    #[sea_orm(nullable)]
    pub coverage_amount: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub policy_start_date: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub policy_end_date: Option<String>,
    /// "Active" or "Expired"
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activity_log::Entity")]
    ActivityLog,
}

impl Related<super::activity_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
