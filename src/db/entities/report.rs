use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub date_generated: Date,
    /// OS census over the whole report range, one counter per OS type.
    pub num_mac_os: i32,
    pub num_windows_os: i32,
    pub num_linux_os: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Customer,
    #[sea_orm(has_many = "super::sub_report::Entity")]
    SubReport,
    #[sea_orm(has_many = "super::computer_report::Entity")]
    ComputerReport,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::sub_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubReport.def()
    }
}

impl Related<super::computer_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComputerReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
