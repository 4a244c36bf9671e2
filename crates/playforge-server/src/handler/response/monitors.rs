//! Response types for health monitoring routes.

use jiff::Timestamp;
use serde::Serialize;

/// Response body for the health check route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Fixed "ok" marker; the route only responds when the process serves.
    pub status: &'static str,

    /// Time the check was answered.
    pub timestamp: Timestamp,

    /// Number of games generated since startup.
    pub games_generated: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_camel_case() {
        let status = HealthStatus {
            status: "ok",
            timestamp: Timestamp::now(),
            games_generated: 3,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["gamesGenerated"], 3);
        assert!(json.get("timestamp").is_some());
    }
}
