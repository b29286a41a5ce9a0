use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::analyzer::dashboard::{build_dashboard, DashboardView};
use crate::analyzer::DateRange;
use crate::error::AppError;
use crate::parser::deserializers::parse_iso_date;
use crate::state::AppState;

/// `?start=YYYY-MM-DD&end=YYYY-MM-DD`; either bound may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Missing or blank bounds fall back to the startup default range.
pub fn resolve_range(query: &DashboardQuery, default: DateRange) -> Result<DateRange, AppError> {
    let pick = |raw: &Option<String>, fallback| match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(fallback),
        Some(s) => parse_iso_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    };
    Ok(DateRange::new(
        pick(&query.start, default.start)?,
        pick(&query.end, default.end)?,
    ))
}

/// Returns the three charts and the scalar totals for the requested window.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let range = resolve_range(&query, state.default_range)?;
    Ok(Json(build_dashboard(&state.table, range, &state.config)))
}
