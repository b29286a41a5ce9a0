use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Runtime settings for the report. Defaults mirror the monthly ticket
/// review: `Ticket_List*` export, `Main::Sub` queue naming, AIM and Cloud
/// left out of the time allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub file_prefix: String,
    pub queue_delimiter: String,
    pub excluded_main_queues: Vec<String>,
    /// Case-insensitive marker in `State` that flags a ticket as still open.
    pub open_marker: String,
    pub listen_address: SocketAddr,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            file_prefix: "Ticket_List".into(),
            queue_delimiter: "::".into(),
            excluded_main_queues: vec!["AIM".into(), "Cloud".into()],
            open_marker: "open".into(),
            listen_address: SocketAddr::from(([127, 0, 0, 1], 8050)),
        }
    }
}

impl DashboardConfig {
    pub fn is_excluded(&self, main_queue: &str) -> bool {
        self.excluded_main_queues.iter().any(|q| q == main_queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let config = DashboardConfig::default();
        assert!(config.is_excluded("AIM"));
        assert!(config.is_excluded("Cloud"));
        assert!(!config.is_excluded("Support"));
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        let config = DashboardConfig::default();
        assert!(!config.is_excluded("aim"));
        assert!(!config.is_excluded("CLOUD"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(DashboardConfig::default()).unwrap();
        assert_eq!(json["filePrefix"], "Ticket_List");
        assert_eq!(json["listenAddress"], "127.0.0.1:8050");
        assert_eq!(json["excludedMainQueues"][1], "Cloud");
    }
}
