pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod stats;
pub mod temporal;

pub use aggregate::{aggregate, QueueReport, QueueTotal, ReportTotals};
pub use dashboard::{build_dashboard, DashboardView};
pub use filter::{derive_tickets, is_closed, split_queue, DerivedTicket};
pub use temporal::DateRange;
