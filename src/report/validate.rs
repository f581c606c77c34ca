use chrono::NaiveDate;
use serde::Deserialize;

use crate::db::entities::customer;
use crate::db::store::ReportStore;
use crate::error::{FieldErrors, ReportError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Create-report request as received from the HTTP layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub customer: i32,
    pub start_date: String,
    pub end_date: String,
}

/// Checks a create-report request before any aggregation work starts.
///
/// All checks run independently and every applicable field error is
/// collected into one map; the date-order check only runs once both dates
/// parsed. On success returns the customer and the parsed range.
pub async fn validate_request<S: ReportStore>(
    store: &S,
    request: &ReportRequest,
    today: NaiveDate,
) -> Result<(customer::Model, NaiveDate, NaiveDate), ReportError> {
    let mut errors = FieldErrors::new();

    let customer = store.find_customer(request.customer).await?;
    if customer.is_none() {
        errors.push("customer", "customer not found");
    }

    let start_date = parse_report_date(&request.start_date, "start_date", today, &mut errors);
    let end_date = parse_report_date(&request.end_date, "end_date", today, &mut errors);
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.push("end_date", "end date is before start date");
        }
    }

    match (customer, start_date, end_date) {
        (Some(customer), Some(start), Some(end)) if errors.is_empty() => {
            Ok((customer, start, end))
        }
        _ => Err(ReportError::Validation(errors)),
    }
}

fn parse_report_date(
    raw: &str,
    field: &'static str,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => {
            if date > today {
                errors.push(field, "date is in the future");
            }
            Some(date)
        }
        Err(_) => {
            errors.push(field, "invalid date format, expected YYYY-MM-DD");
            None
        }
    }
}
