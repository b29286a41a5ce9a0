pub mod analyzer;
pub mod charts;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod server;
pub mod state;

use std::path::Path;

use analyzer::DateRange;
use config::DashboardConfig;
use error::AppError;
use parser::TicketTable;
use state::AppState;

/// Locate and parse the ticket export in `dir`, logging what was found.
pub fn load_ticket_table(dir: &Path, config: &DashboardConfig) -> Result<TicketTable, AppError> {
    let path = parser::locate_ticket_file(dir, &config.file_prefix)?;
    tracing::info!("loading tickets from {}", path.display());

    let table = parser::parse_csv(&path)?;
    let summary = table.summary();
    tracing::info!(
        rows = summary.total_rows,
        columns = table.columns.len(),
        first = summary.first_created.as_deref().unwrap_or("-"),
        last = summary.last_created.as_deref().unwrap_or("-"),
        duration_ms = table.parse_duration_ms,
        "ticket export parsed"
    );
    if !table.missing_optional_columns.is_empty() {
        tracing::warn!(
            "optional columns absent: {}",
            table.missing_optional_columns.join(", ")
        );
    }
    if table.undated_rows > 0 {
        tracing::warn!(
            "{} rows have no 'Created' value and will never match a date range",
            table.undated_rows
        );
    }
    if table.is_empty() {
        tracing::warn!("ticket export has no rows, charts will stay empty");
    }
    Ok(table)
}

/// Load the export from the working directory, then serve the dashboard.
pub async fn run() -> Result<(), AppError> {
    let config = DashboardConfig::default();
    let cwd = std::env::current_dir()?;
    let table = load_ticket_table(&cwd, &config)?;

    let default_range = DateRange::previous_month(chrono::Local::now().date_naive());
    tracing::info!(
        "default range {} to {}",
        default_range.start,
        default_range.end
    );

    server::serve(AppState::new(table, config, default_range)).await
}

// ─── E2E Integration Tests ──────────────────────────────────────────────────
