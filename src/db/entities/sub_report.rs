use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Warning statistics for one calendar-month bucket of a report's range.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub report_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub num_warnings_unresolved_start: i32,
    pub num_warnings_unresolved_end: i32,
    pub num_warnings_created: i32,
    pub num_warnings_resolved: i32,
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
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
