use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::commands;
use crate::error::AppError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/dashboard", get(commands::dashboard::get_dashboard))
        .route("/api/source", get(commands::source::get_source_summary))
        .route("/api/config", get(commands::config::get_config))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Serve until Ctrl-C.
pub async fn serve(state: AppState) -> Result<(), AppError> {
    let address = state.config.listen_address;
    let app = create_router(state);
    let listener = TcpListener::bind(address).await?;

    tracing::info!("dashboard available at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::DateRange;
    use crate::config::DashboardConfig;
    use crate::parser::parse_csv_reader;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use tower::ServiceExt;

    const CSV: &str = "Queue,Created,State,Accounted time\n\
Support::Network,2024-03-05 09:12:00,open,30\n\
Support::DB,2024-03-10 14:00:00,Closed,20\n";

    fn app() -> Router {
        let table = parse_csv_reader(CSV.as_bytes()).unwrap();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        );
        create_router(AppState::new(table, DashboardConfig::default(), range))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_dashboard_route_reads_query_range() {
        let (status, body) = get_json("/api/dashboard?start=2024-03-01&end=2024-03-31").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["range"]["start"], "2024-03-01");
        assert_eq!(body["derivedRows"], 2);
        assert_eq!(body["totals"]["percentClosed"], 50);
        for slot in ["barSubQueues", "pieMainQueues", "pieSubQueues"] {
            assert!(body["charts"][slot]["data"].is_array(), "missing chart {slot}");
        }
    }

    #[tokio::test]
    async fn test_dashboard_route_defaults_to_state_range() {
        let (status, body) = get_json("/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["range"]["end"], "2024-02-29");
        assert_eq!(body["derivedRows"], 0);
    }

    #[tokio::test]
    async fn test_dashboard_route_rejects_bad_date() {
        let (status, body) = get_json("/api/dashboard?start=15/02/2024").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("15/02/2024"));
    }

    #[tokio::test]
    async fn test_source_and_config_routes() {
        let (status, source) = get_json("/api/source").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(source["totalRows"], 2);

        let (status, config) = get_json("/api/config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(config["filePrefix"], "Ticket_List");
    }

    #[tokio::test]
    async fn test_index_route_serves_page() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_index_has_three_chart_slots() {
        for id in ["bar-chart", "pie-main-queues", "pie-sub-queues", "date-start", "date-end"] {
            assert!(
                INDEX_HTML.contains(&format!("id=\"{id}\"")),
                "index.html should contain element #{id}"
            );
        }
        assert!(INDEX_HTML.contains("/api/dashboard"));
    }

    #[tokio::test]
    async fn test_healthz() {
        assert_eq!(healthz().await, "ok");
    }
}
