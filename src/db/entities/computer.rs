use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::OsType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "watchman_computers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub watchman_group_id: String,
    /// External id assigned by the monitoring API, unique across customers.
    #[sea_orm(unique)]
    pub computer_id: String,
    /// Date the computer first reported in.
    pub date_reported: Date,
    /// Date of the most recent heartbeat.
    pub date_last_reported: Date,
    pub name: String,
    pub os_type: OsType,
    pub os_version: String,
    pub ram_gb: f64,
    pub hdd_capacity_gb: f64,
    pub hdd_usage_gb: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::WatchmanGroupId",
        to = "super::customer::Column::WatchmanGroupId",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Customer,
    #[sea_orm(has_many = "super::warning::Entity")]
    Warning,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::warning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
