use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "watchman_warnings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub watchman_group_id: String,
    pub computer_id: String,
    /// External id assigned by the monitoring API.
    pub warning_id: String,
    pub date_reported: Date,
    pub date_last_checked: Date,
    /// Null while the warning is still open. A warning resolves at most
    /// once and is immutable afterwards as far as reporting is concerned.
    #[sea_orm(nullable)]
    pub date_resolved: Option<Date>,
    pub name: String,
    pub details: String,
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
    #[sea_orm(
        belongs_to = "super::computer::Entity",
        from = "Column::ComputerId",
        to = "super::computer::Column::ComputerId",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Computer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::computer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Computer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
