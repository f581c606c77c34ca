use std::env;

use chrono::Utc;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use mrgen::report::summary;
use mrgen::report::generator;
use mrgen::report::validate::ReportRequest;
use sea_orm::{ConnectOptions, Database};
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate and delete MRGen usage reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a report for a customer over a date range
    Generate {
        /// Customer id
        #[arg(long)]
        customer: i32,
        /// Range start, YYYY-MM-DD
        #[arg(long)]
        start_date: String,
        /// Range end, YYYY-MM-DD
        #[arg(long)]
        end_date: String,
    },
    /// Delete a report together with its sub-reports and computer reports
    Delete {
        /// Report id
        #[arg(long)]
        report: i32,
    },
}

fn init_logging() {
    // Log to a file: JSON format, daily rotation
    let file_appender = rolling::daily("logs", "reportd.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    // Log to stdout: human-readable format
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    // Default to `info,sea_orm=warn` if RUST_LOG is not set.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sea_orm=warn,sqlx::query=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging();
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file");
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(5);
    let db = Database::connect(opt)
        .await
        .expect("Failed to create database connection.");

    match cli.command {
        Command::Generate {
            customer,
            start_date,
            end_date,
        } => {
            let request = ReportRequest {
                customer,
                start_date,
                end_date,
            };
            match generator::create_report(&db, &request, Utc::now().date_naive()).await {
                Ok(graph) => {
                    info!(report_id = graph.report.id, "report generated");
                    println!(
                        "report {}: {} sub-reports, {} computer reports, {} warnings open at close, {} resolved in period",
                        graph.report.id,
                        graph.sub_reports.len(),
                        graph.computer_reports.len(),
                        summary::unresolved_at_close(&graph.report, &graph.sub_reports),
                        summary::total_resolved(&graph.sub_reports),
                    );
                }
                Err(err) => {
                    if let Some(fields) = err.field_errors() {
                        error!(%fields, "request rejected");
                        eprintln!("{}", serde_json::to_string_pretty(fields)?);
                    } else {
                        error!(%err, "report generation failed");
                    }
                    return Err(err.into());
                }
            }
        }
        Command::Delete { report } => {
            generator::delete_report(&db, report).await?;
            println!("deleted report {report}");
        }
    }

    Ok(())
}
