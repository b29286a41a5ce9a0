use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No file matching '{prefix}*' in {}", .dir.display())]
    TicketFileNotFound { prefix: String, dir: PathBuf },

    #[error("Several files match '{prefix}*', keep only one: {}", .candidates.join(", "))]
    AmbiguousTicketFile {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Empty file or no header row")]
    EmptyFile,

    #[error("Line {line}: unparseable 'Created' timestamp {value:?}")]
    InvalidTimestamp { line: usize, value: String },

    #[error("Line {line}: column '{column}' is not numeric: {value:?}")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            axum::Json(serde_json::json!({ "error": self })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_message() {
        let err = AppError::MissingColumns(vec!["Queue".into(), "State".into()]);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            "Missing required columns: Queue, State"
        );
    }

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = AppError::AmbiguousTicketFile {
            prefix: "Ticket_List".into(),
            candidates: vec!["Ticket_List_a.csv".into(), "Ticket_List_b.csv".into()],
        };
        assert_eq!(
            err.to_string(),
            "Several files match 'Ticket_List*', keep only one: Ticket_List_a.csv, Ticket_List_b.csv"
        );
    }

    #[test]
    fn test_invalid_date_is_bad_request() {
        let response = AppError::InvalidDate("2024-02-30".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_server_errors() {
        let response = AppError::EmptyFile.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
