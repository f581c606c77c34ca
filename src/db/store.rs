use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

use crate::db::entities::{computer, computer_report, customer, report, sub_report, warning};
use crate::db::enums::OsType;

// --- Report Store Abstraction ---

/// New-record inputs for one report-generation request. The whole graph is
/// persisted in a single transaction; ids are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub customer_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub date_generated: NaiveDate,
    pub num_mac_os: i32,
    pub num_windows_os: i32,
    pub num_linux_os: i32,
}

#[derive(Debug, Clone)]
pub struct NewSubReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_warnings_unresolved_start: i32,
    pub num_warnings_unresolved_end: i32,
    pub num_warnings_created: i32,
    pub num_warnings_resolved: i32,
}

#[derive(Debug, Clone)]
pub struct NewComputerReport {
    pub computer_id: Option<String>,
    pub name: String,
    pub os_type: OsType,
    pub os_version: String,
    pub ram_gb: f64,
    pub hdd_capacity_gb: f64,
    pub hdd_usage_gb: f64,
}

#[derive(Debug, Clone)]
pub struct NewReportGraph {
    pub report: NewReport,
    /// Must already be ordered ascending by bucket start date; the store
    /// persists sub-reports in the order given.
    pub sub_reports: Vec<NewSubReport>,
    pub computer_reports: Vec<NewComputerReport>,
}

/// The persisted result of one report-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGraph {
    pub report: report::Model,
    pub sub_reports: Vec<sub_report::Model>,
    pub computer_reports: Vec<computer_report::Model>,
}

/// Read and write access needed by the report engine, decoupled from any
/// specific storage backend. Reads return a best-effort snapshot of a
/// single customer's rows (read-committed versus the concurrent ingester);
/// both writes are all-or-nothing.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn find_customer(&self, customer_id: i32) -> Result<Option<customer::Model>, DbErr>;

    /// All computers belonging to the given watchman group, in id order.
    async fn computers_for_customer(&self, group_id: &str)
    -> Result<Vec<computer::Model>, DbErr>;

    /// All warnings belonging to the given watchman group, in id order.
    async fn warnings_for_customer(&self, group_id: &str) -> Result<Vec<warning::Model>, DbErr>;

    /// Persists a report with all its children in one transaction. A
    /// failure at any point leaves zero rows behind.
    async fn insert_report_graph(&self, graph: NewReportGraph) -> Result<ReportGraph, DbErr>;

    /// Deletes a report together with its sub-reports and computer reports
    /// in one transaction. Returns `false` if no such report exists.
    async fn delete_report(&self, report_id: i32) -> Result<bool, DbErr>;
}

#[async_trait]
impl ReportStore for DatabaseConnection {
    async fn find_customer(&self, customer_id: i32) -> Result<Option<customer::Model>, DbErr> {
        customer::Entity::find_by_id(customer_id).one(self).await
    }

    async fn computers_for_customer(
        &self,
        group_id: &str,
    ) -> Result<Vec<computer::Model>, DbErr> {
        computer::Entity::find()
            .filter(computer::Column::WatchmanGroupId.eq(group_id))
            .order_by_asc(computer::Column::Id)
            .all(self)
            .await
    }

    async fn warnings_for_customer(&self, group_id: &str) -> Result<Vec<warning::Model>, DbErr> {
        warning::Entity::find()
            .filter(warning::Column::WatchmanGroupId.eq(group_id))
            .order_by_asc(warning::Column::Id)
            .all(self)
            .await
    }

    async fn insert_report_graph(&self, graph: NewReportGraph) -> Result<ReportGraph, DbErr> {
        let txn = self.begin().await?;

        let new = graph.report;
        let report = report::ActiveModel {
            customer_id: Set(new.customer_id),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            date_generated: Set(new.date_generated),
            num_mac_os: Set(new.num_mac_os),
            num_windows_os: Set(new.num_windows_os),
            num_linux_os: Set(new.num_linux_os),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut sub_reports = Vec::with_capacity(graph.sub_reports.len());
        for sub in graph.sub_reports {
            let inserted = sub_report::ActiveModel {
                report_id: Set(report.id),
                start_date: Set(sub.start_date),
                end_date: Set(sub.end_date),
                num_warnings_unresolved_start: Set(sub.num_warnings_unresolved_start),
                num_warnings_unresolved_end: Set(sub.num_warnings_unresolved_end),
                num_warnings_created: Set(sub.num_warnings_created),
                num_warnings_resolved: Set(sub.num_warnings_resolved),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            sub_reports.push(inserted);
        }

        let mut computer_reports = Vec::with_capacity(graph.computer_reports.len());
        for snapshot in graph.computer_reports {
            let inserted = computer_report::ActiveModel {
                report_id: Set(report.id),
                computer_id: Set(snapshot.computer_id),
                name: Set(snapshot.name),
                os_type: Set(snapshot.os_type),
                os_version: Set(snapshot.os_version),
                ram_gb: Set(snapshot.ram_gb),
                hdd_capacity_gb: Set(snapshot.hdd_capacity_gb),
                hdd_usage_gb: Set(snapshot.hdd_usage_gb),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            computer_reports.push(inserted);
        }

        txn.commit().await?;
        Ok(ReportGraph {
            report,
            sub_reports,
            computer_reports,
        })
    }

    async fn delete_report(&self, report_id: i32) -> Result<bool, DbErr> {
        let txn = self.begin().await?;

        if report::Entity::find_by_id(report_id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        // Owned-aggregate deletion: children first, then the report itself,
        // without relying on database-level cascades.
        sub_report::Entity::delete_many()
            .filter(sub_report::Column::ReportId.eq(report_id))
            .exec(&txn)
            .await?;
        computer_report::Entity::delete_many()
            .filter(computer_report::Column::ReportId.eq(report_id))
            .exec(&txn)
            .await?;
        report::Entity::delete_by_id(report_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory `ReportStore` used by the engine's tests.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[derive(Default)]
    struct Tables {
        customers: Vec<customer::Model>,
        computers: Vec<computer::Model>,
        warnings: Vec<warning::Model>,
        reports: Vec<report::Model>,
        sub_reports: Vec<sub_report::Model>,
        computer_reports: Vec<computer_report::Model>,
        next_id: i32,
    }

    impl Tables {
        fn next_id(&mut self) -> i32 {
            self.next_id += 1;
            self.next_id
        }
    }

    #[derive(Default)]
    pub struct MemoryStore {
        tables: Mutex<Tables>,
        /// When set, `insert_report_graph` fails without touching any table.
        pub fail_writes: AtomicBool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_customer(&self, name: &str, watchman_group_id: Option<&str>) -> customer::Model {
            let mut tables = self.tables.lock().unwrap();
            let model = customer::Model {
                id: tables.next_id(),
                name: name.to_owned(),
                watchman_group_id: watchman_group_id.map(str::to_owned),
                repairshopr_id: None,
            };
            tables.customers.push(model.clone());
            model
        }

        pub fn add_computer(
            &self,
            group_id: &str,
            computer_id: &str,
            os_type: OsType,
            date_reported: NaiveDate,
            date_last_reported: NaiveDate,
        ) -> computer::Model {
            let mut tables = self.tables.lock().unwrap();
            let model = computer::Model {
                id: tables.next_id(),
                watchman_group_id: group_id.to_owned(),
                computer_id: computer_id.to_owned(),
                date_reported,
                date_last_reported,
                name: format!("computer {computer_id}"),
                os_type,
                os_version: "10.13.6".to_owned(),
                ram_gb: 8.0,
                hdd_capacity_gb: 250.0,
                hdd_usage_gb: 100.0,
            };
            tables.computers.push(model.clone());
            model
        }

        pub fn add_warning(
            &self,
            group_id: &str,
            computer_id: &str,
            date_reported: NaiveDate,
            date_resolved: Option<NaiveDate>,
        ) -> warning::Model {
            let mut tables = self.tables.lock().unwrap();
            let id = tables.next_id();
            let model = warning::Model {
                id,
                watchman_group_id: group_id.to_owned(),
                computer_id: computer_id.to_owned(),
                warning_id: format!("w_{id}"),
                date_reported,
                date_last_checked: date_resolved.unwrap_or(date_reported),
                date_resolved,
                name: "warning".to_owned(),
                details: "details".to_owned(),
            };
            tables.warnings.push(model.clone());
            model
        }

        /// Row counts for (reports, sub_reports, computer_reports).
        pub fn report_row_counts(&self) -> (usize, usize, usize) {
            let tables = self.tables.lock().unwrap();
            (
                tables.reports.len(),
                tables.sub_reports.len(),
                tables.computer_reports.len(),
            )
        }

        pub fn sub_reports_for(&self, report_id: i32) -> Vec<sub_report::Model> {
            let tables = self.tables.lock().unwrap();
            tables
                .sub_reports
                .iter()
                .filter(|s| s.report_id == report_id)
                .cloned()
                .collect()
        }

        pub fn computer_reports_for(&self, report_id: i32) -> Vec<computer_report::Model> {
            let tables = self.tables.lock().unwrap();
            tables
                .computer_reports
                .iter()
                .filter(|c| c.report_id == report_id)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl ReportStore for MemoryStore {
        async fn find_customer(&self, customer_id: i32) -> Result<Option<customer::Model>, DbErr> {
            let tables = self.tables.lock().unwrap();
            Ok(tables.customers.iter().find(|c| c.id == customer_id).cloned())
        }

        async fn computers_for_customer(
            &self,
            group_id: &str,
        ) -> Result<Vec<computer::Model>, DbErr> {
            let tables = self.tables.lock().unwrap();
            Ok(tables
                .computers
                .iter()
                .filter(|c| c.watchman_group_id == group_id)
                .cloned()
                .collect())
        }

        async fn warnings_for_customer(
            &self,
            group_id: &str,
        ) -> Result<Vec<warning::Model>, DbErr> {
            let tables = self.tables.lock().unwrap();
            Ok(tables
                .warnings
                .iter()
                .filter(|w| w.watchman_group_id == group_id)
                .cloned()
                .collect())
        }

        async fn insert_report_graph(&self, graph: NewReportGraph) -> Result<ReportGraph, DbErr> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DbErr::Custom("storage offline".to_owned()));
            }
            let mut tables = self.tables.lock().unwrap();

            let new = graph.report;
            let report = report::Model {
                id: tables.next_id(),
                customer_id: new.customer_id,
                start_date: new.start_date,
                end_date: new.end_date,
                date_generated: new.date_generated,
                num_mac_os: new.num_mac_os,
                num_windows_os: new.num_windows_os,
                num_linux_os: new.num_linux_os,
            };
            tables.reports.push(report.clone());

            let mut sub_reports = Vec::with_capacity(graph.sub_reports.len());
            for sub in graph.sub_reports {
                let model = sub_report::Model {
                    id: tables.next_id(),
                    report_id: report.id,
                    start_date: sub.start_date,
                    end_date: sub.end_date,
                    num_warnings_unresolved_start: sub.num_warnings_unresolved_start,
                    num_warnings_unresolved_end: sub.num_warnings_unresolved_end,
                    num_warnings_created: sub.num_warnings_created,
                    num_warnings_resolved: sub.num_warnings_resolved,
                };
                tables.sub_reports.push(model.clone());
                sub_reports.push(model);
            }

            let mut computer_reports = Vec::with_capacity(graph.computer_reports.len());
            for snapshot in graph.computer_reports {
                let model = computer_report::Model {
                    id: tables.next_id(),
                    report_id: report.id,
                    computer_id: snapshot.computer_id,
                    name: snapshot.name,
                    os_type: snapshot.os_type,
                    os_version: snapshot.os_version,
                    ram_gb: snapshot.ram_gb,
                    hdd_capacity_gb: snapshot.hdd_capacity_gb,
                    hdd_usage_gb: snapshot.hdd_usage_gb,
                };
                tables.computer_reports.push(model.clone());
                computer_reports.push(model);
            }

            Ok(ReportGraph {
                report,
                sub_reports,
                computer_reports,
            })
        }

        async fn delete_report(&self, report_id: i32) -> Result<bool, DbErr> {
            let mut tables = self.tables.lock().unwrap();
            if !tables.reports.iter().any(|r| r.id == report_id) {
                return Ok(false);
            }
            tables.sub_reports.retain(|s| s.report_id != report_id);
            tables.computer_reports.retain(|c| c.report_id != report_id);
            tables.reports.retain(|r| r.id != report_id);
            Ok(true)
        }
    }
}
