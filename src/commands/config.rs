use axum::extract::State;
use axum::Json;

use crate::config::DashboardConfig;
use crate::state::AppState;

pub async fn get_config(State(state): State<AppState>) -> Json<DashboardConfig> {
    Json(state.config.as_ref().clone())
}
