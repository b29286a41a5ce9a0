pub mod columns;
pub mod deserializers;
pub mod locate;
pub mod pipeline;
pub mod types;

pub use locate::locate_ticket_file;
pub use pipeline::{parse_csv, parse_csv_reader};
pub use types::{TableSummary, TicketRow, TicketTable};
