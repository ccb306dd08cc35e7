//! Response models for the status service.

use serde::Serialize;

// ---

/// Human-readable application title.
pub const SERVICE_TITLE: &str = "Kenya Farm IoT";

/// Message returned by `GET /`.
pub const ROOT_MESSAGE: &str = "Kenya Farm IoT API";

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootStatus {
    // ---
    pub message: &'static str,
    pub status: &'static str,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    // ---
    pub status: &'static str,
}

impl RootStatus {
    // ---
    pub fn running() -> Self {
        RootStatus {
            message: ROOT_MESSAGE,
            status: "running",
        }
    }
}

impl HealthStatus {
    // ---
    pub fn healthy() -> Self {
        HealthStatus { status: "healthy" }
    }
}

/// Application identity, logged once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    // ---
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    // ---
    pub fn current() -> Self {
        ServiceInfo {
            title: SERVICE_TITLE,
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_root_status_body() {
        // ---
        let body = serde_json::to_string(&RootStatus::running()).unwrap();
        assert_eq!(body, r#"{"message":"Kenya Farm IoT API","status":"running"}"#);
    }

    #[test]
    fn test_health_status_body() {
        // ---
        let body = serde_json::to_string(&HealthStatus::healthy()).unwrap();
        assert_eq!(body, r#"{"status":"healthy"}"#);
    }

    #[test]
    fn test_values_are_stable() {
        // ---
        assert_eq!(RootStatus::running(), RootStatus::running());
        assert_eq!(HealthStatus::healthy(), HealthStatus::healthy());
    }

    #[test]
    fn test_service_info() {
        // ---
        let info = ServiceInfo::current();

        assert_eq!(info.title, "Kenya Farm IoT");
        assert_eq!(
            info.description,
            "Smart farming and agricultural monitoring API"
        );
        assert_eq!(info.version, "0.1.0");
    }
}
