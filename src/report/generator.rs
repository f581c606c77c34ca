use chrono::NaiveDate;
use tracing::info;

use crate::db::entities::{computer, customer};
use crate::db::enums::OsType;
use crate::db::store::{
    NewComputerReport, NewReport, NewReportGraph, NewSubReport, ReportGraph, ReportStore,
};
use crate::error::ReportError;
use crate::report::validate::{ReportRequest, validate_request};
use crate::report::{calendar, stats};

/// Validates a create-report request and, if it passes, generates and
/// persists the report graph. Validation runs before any aggregation work;
/// a validation failure writes nothing.
pub async fn create_report<S: ReportStore>(
    store: &S,
    request: &ReportRequest,
    today: NaiveDate,
) -> Result<ReportGraph, ReportError> {
    let (customer, start_date, end_date) = validate_request(store, request, today).await?;
    generate_report(store, &customer, start_date, end_date, today).await
}

/// Assembles the Report → SubReport[] → ComputerReport[] graph for an
/// already validated request and persists it in one transaction.
///
/// The snapshot is read once up front; every counter below is computed
/// from that immutable snapshot, so a concurrent ingester run cannot make
/// the sub-reports disagree with the report header.
pub async fn generate_report<S: ReportStore>(
    store: &S,
    customer: &customer::Model,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> Result<ReportGraph, ReportError> {
    let (computers, warnings) = match customer.watchman_group_id.as_deref() {
        Some(group_id) => (
            store.computers_for_customer(group_id).await?,
            store.warnings_for_customer(group_id).await?,
        ),
        // A customer not linked to a watchman group has no monitoring data.
        None => (Vec::new(), Vec::new()),
    };

    let report = NewReport {
        customer_id: customer.id,
        start_date,
        end_date,
        date_generated: today,
        num_mac_os: stats::os_census(&computers, OsType::Mac, start_date, end_date),
        num_windows_os: stats::os_census(&computers, OsType::Windows, start_date, end_date),
        num_linux_os: stats::os_census(&computers, OsType::Linux, start_date, end_date),
    };

    // month_buckets returns buckets ascending by start date, and the store
    // persists them in that order.
    let sub_reports = calendar::month_buckets(start_date, end_date)
        .into_iter()
        .map(|(bucket_start, bucket_end)| NewSubReport {
            start_date: bucket_start,
            end_date: bucket_end,
            num_warnings_unresolved_start: stats::unresolved_at_start(&warnings, bucket_start),
            num_warnings_unresolved_end: stats::unresolved_at_end(&warnings, bucket_end),
            num_warnings_created: stats::created_in(&warnings, bucket_start, bucket_end),
            num_warnings_resolved: stats::resolved_in(&warnings, bucket_start, bucket_end),
        })
        .collect();

    // Inclusion here is deliberately looser than the census rule: last
    // reported on the start date is enough.
    let computer_reports = computers
        .iter()
        .filter(|c| c.date_last_reported >= start_date)
        .map(snapshot_computer)
        .collect();

    let graph = store
        .insert_report_graph(NewReportGraph {
            report,
            sub_reports,
            computer_reports,
        })
        .await?;

    info!(
        report_id = graph.report.id,
        customer_id = customer.id,
        sub_reports = graph.sub_reports.len(),
        computer_reports = graph.computer_reports.len(),
        "generated report"
    );
    Ok(graph)
}

/// Deletes a report and everything it owns; unknown ids are a `NotFound`.
pub async fn delete_report<S: ReportStore>(store: &S, report_id: i32) -> Result<(), ReportError> {
    if store.delete_report(report_id).await? {
        info!(report_id, "deleted report");
        Ok(())
    } else {
        Err(ReportError::NotFound(format!(
            "report {report_id} does not exist"
        )))
    }
}

fn snapshot_computer(computer: &computer::Model) -> NewComputerReport {
    NewComputerReport {
        computer_id: Some(computer.computer_id.clone()),
        name: computer.name.clone(),
        os_type: computer.os_type,
        os_version: computer.os_version.clone(),
        ram_gb: computer.ram_gb,
        hdd_capacity_gb: computer.hdd_capacity_gb,
        hdd_usage_gb: computer.hdd_usage_gb,
    }
}
