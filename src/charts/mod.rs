pub mod builder;
pub mod figure;

pub use builder::{build_charts, DashboardCharts};
pub use figure::Figure;
