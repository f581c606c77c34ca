use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::enums::OsType;

/// Point-in-time copy of a computer's specs, taken when the owning report
/// was generated and never updated afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "computer_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub report_id: i32,
    /// Weak back-reference to the source computer; nulled out if the
    /// computer is later removed from the system.
    #[sea_orm(nullable)]
    pub computer_id: Option<String>,
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
        belongs_to = "super::report::Entity",
        from = "Column::ReportId",
        to = "super::report::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Report,
    #[sea_orm(
        belongs_to = "super::computer::Entity",
        from = "Column::ComputerId",
        to = "super::computer::Column::ComputerId",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Computer,
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::computer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Computer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
