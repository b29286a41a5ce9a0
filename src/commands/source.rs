use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analyzer::DateRange;
use crate::parser::TableSummary;
use crate::state::AppState;

/// What was loaded at startup, for the page header.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub filename: Option<String>,
    pub columns: Vec<String>,
    pub missing_optional_columns: Vec<String>,
    pub default_range: DateRange,
    #[serde(flatten)]
    pub table: TableSummary,
}

pub async fn get_source_summary(State(state): State<AppState>) -> Json<SourceSummary> {
    let table = &state.table;
    Json(SourceSummary {
        filename: table
            .source
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string),
        columns: table.columns.clone(),
        missing_optional_columns: table.missing_optional_columns.clone(),
        default_range: state.default_range,
        table: table.summary(),
    })
}
