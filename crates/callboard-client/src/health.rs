// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use callboard_core::{CallboardError, HealthApi, HealthReport, HealthStatus};

use crate::gateway::ApiClient;
use crate::request::ApiRequest;

pub fn check_request() -> ApiRequest {
    ApiRequest::get("/health")
}

/// Interprets a health body from a 2xx response.
pub fn interpret(report: &HealthReport) -> HealthStatus {
    if report.status.eq_ignore_ascii_case("healthy") {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded(describe(report))
    }
}

fn describe(report: &HealthReport) -> String {
    match &report.database {
        Some(db) => format!("status {}, database {}", report.status, db),
        None => format!("status {}", report.status),
    }
}

#[async_trait]
impl HealthApi for ApiClient {
    async fn check(&self) -> Result<HealthStatus, CallboardError> {
        match self.execute::<HealthReport>(check_request()).await {
            Ok(report) => Ok(interpret(&report)),
            // The backend answers 503 with its own health body when a dependency is down.
            Err(CallboardError::Server { status: 503, message }) => {
                let reason = serde_json::from_str::<HealthReport>(&message)
                    .map(|report| describe(&report))
                    .unwrap_or(message);
                Ok(HealthStatus::Unhealthy(reason))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::anonymous_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn non_healthy_status_is_degraded() {
        let report = HealthReport {
            status: "starting".into(),
            database: Some("connected".into()),
        };
        assert_eq!(
            interpret(&report),
            HealthStatus::Degraded("status starting, database connected".into())
        );
    }

    #[tokio::test]
    async fn healthy_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "healthy",
                "database": "connected"
            })))
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        assert_eq!(client.check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn service_unavailable_is_unhealthy_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/health"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "detail": "database disconnected"
            })))
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        assert_eq!(
            client.check().await.unwrap(),
            HealthStatus::Unhealthy("database disconnected".into())
        );
    }

    #[tokio::test]
    async fn unhealthy_health_body_is_summarized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/health"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "status": "unhealthy",
                "database": "disconnected"
            })))
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        assert_eq!(
            client.check().await.unwrap(),
            HealthStatus::Unhealthy("status unhealthy, database disconnected".into())
        );
    }

    #[tokio::test]
    async fn other_server_errors_propagate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let err = client.check().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
