//! SeaORM entities, one module per table.

pub mod computer;
pub mod computer_report;
pub mod customer;
pub mod report;
pub mod sub_report;
pub mod warning;

// Prelude module for easy importing of all entities and their related types
pub mod prelude {
    pub use super::customer::Entity as Customer;
    pub use super::customer::Model as CustomerModel;
    pub use super::customer::ActiveModel as CustomerActiveModel;
    pub use super::customer::Column as CustomerColumn;

    pub use super::computer::Entity as Computer;
    pub use super::computer::Model as ComputerModel;
    pub use super::computer::ActiveModel as ComputerActiveModel;
    pub use super::computer::Column as ComputerColumn;

    pub use super::warning::Entity as Warning;
    pub use super::warning::Model as WarningModel;
    pub use super::warning::ActiveModel as WarningActiveModel;
    pub use super::warning::Column as WarningColumn;

    pub use super::report::Entity as Report;
    pub use super::report::Model as ReportModel;
    pub use super::report::ActiveModel as ReportActiveModel;
    pub use super::report::Column as ReportColumn;

    pub use super::sub_report::Entity as SubReport;
    pub use super::sub_report::Model as SubReportModel;
    pub use super::sub_report::ActiveModel as SubReportActiveModel;
    pub use super::sub_report::Column as SubReportColumn;

    pub use super::computer_report::Entity as ComputerReport;
    pub use super::computer_report::Model as ComputerReportModel;
    pub use super::computer_report::ActiveModel as ComputerReportActiveModel;
    pub use super::computer_report::Column as ComputerReportColumn;
}
