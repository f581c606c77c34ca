use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Group identifier in the Watchman Monitoring API. Computers and
    /// warnings reference the customer through this column; exactly one
    /// customer exists per group id.
    #[sea_orm(unique, nullable)]
    pub watchman_group_id: Option<String>,
    #[sea_orm(unique, nullable)]
    pub repairshopr_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::computer::Entity")]
    Computer,
    #[sea_orm(has_many = "super::warning::Entity")]
    Warning,
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
}

impl Related<super::computer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Computer.def()
    }
}

impl Related<super::warning::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warning.def()
    }
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
