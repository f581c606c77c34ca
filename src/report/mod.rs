//! The report-generation engine: request validation, calendar-month
//! bucketing, warning/computer statistics, and assembly of the persisted
//! Report → SubReport → ComputerReport graph.

pub mod calendar;
pub mod generator;
pub mod stats;
pub mod summary;
pub mod validate;
