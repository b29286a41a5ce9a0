use std::sync::Arc;

use crate::analyzer::DateRange;
use crate::config::DashboardConfig;
use crate::parser::TicketTable;

/// Shared by every request. The table is loaded once at startup and only
/// ever read, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<TicketTable>,
    pub config: Arc<DashboardConfig>,
    /// Picker default, fixed when the process started.
    pub default_range: DateRange,
}

impl AppState {
    pub fn new(table: TicketTable, config: DashboardConfig, default_range: DateRange) -> Self {
        AppState {
            table: Arc::new(table),
            config: Arc::new(config),
            default_range,
        }
    }
}
