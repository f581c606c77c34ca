//! Whole-report summaries derived from the persisted sub-reports, used by
//! the rendering layer on top of a finished report.

use crate::db::entities::{report, sub_report};

/// Warnings still unresolved when the report period closes, taken from the
/// sub-report that ends on the report's end date.
pub fn unresolved_at_close(report: &report::Model, sub_reports: &[sub_report::Model]) -> i32 {
    sub_reports
        .iter()
        .find(|s| s.end_date == report.end_date)
        .map_or(0, |s| s.num_warnings_unresolved_end)
}

/// Warnings resolved over the whole report period.
pub fn total_resolved(sub_reports: &[sub_report::Model]) -> i32 {
    sub_reports.iter().map(|s| s.num_warnings_resolved).sum()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sub(start: &str, end: &str, unresolved_end: i32, resolved: i32) -> sub_report::Model {
        sub_report::Model {
            id: 0,
            report_id: 1,
            start_date: d(start),
            end_date: d(end),
            num_warnings_unresolved_start: 0,
            num_warnings_unresolved_end: unresolved_end,
            num_warnings_created: 0,
            num_warnings_resolved: resolved,
        }
    }

    fn report(start: &str, end: &str) -> report::Model {
        report::Model {
            id: 1,
            customer_id: 1,
            start_date: d(start),
            end_date: d(end),
            date_generated: d("2019-06-01"),
            num_mac_os: 0,
            num_windows_os: 0,
            num_linux_os: 0,
        }
    }

    #[test]
    fn close_count_comes_from_the_final_sub_report() {
        let report = report("2019-01-01", "2019-03-28");
        let subs = vec![
            sub("2019-01-01", "2019-01-31", 4, 1),
            sub("2019-02-01", "2019-02-28", 2, 3),
            sub("2019-03-01", "2019-03-28", 5, 2),
        ];
        assert_eq!(unresolved_at_close(&report, &subs), 5);
        assert_eq!(total_resolved(&subs), 6);
    }

    #[test]
    fn empty_graph_sums_to_zero() {
        let report = report("2019-01-01", "2019-01-31");
        assert_eq!(unresolved_at_close(&report, &[]), 0);
        assert_eq!(total_resolved(&[]), 0);
    }
}
