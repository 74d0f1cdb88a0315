// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call and conversation accessors.

use async_trait::async_trait;
use callboard_core::{
    Call, CallListResponse, CallboardError, CallsApi, Conversation, OutboundCallReceipt,
    OutboundCallRequest,
};
use tracing::info;
use uuid::Uuid;

use crate::gateway::ApiClient;
use crate::request::ApiRequest;

/// Largest page the backend will serve.
pub const MAX_PAGE_SIZE: u32 = 100;

/// `GET /calls?page=&page_size=`
pub fn list_request(page: u32, page_size: u32) -> Result<ApiRequest, CallboardError> {
    if page == 0 {
        return Err(CallboardError::Validation("page numbers start at 1".into()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(CallboardError::Validation(format!(
            "page size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    Ok(ApiRequest::get("/calls")
        .query("page", page)
        .query("page_size", page_size))
}

pub fn get_request(id: Uuid) -> ApiRequest {
    ApiRequest::get(format!("/calls/{id}"))
}

pub fn conversation_request(call_id: Uuid) -> ApiRequest {
    ApiRequest::get(format!("/calls/{call_id}/conversation"))
}

/// `POST /calls/outbound`
pub fn outbound_request(request: &OutboundCallRequest) -> Result<ApiRequest, CallboardError> {
    request.validate()?;
    let body = serde_json::to_value(request)
        .map_err(|e| CallboardError::Internal(format!("failed to encode outbound call: {e}")))?;
    Ok(ApiRequest::post("/calls/outbound").json(body))
}

#[async_trait]
impl CallsApi for ApiClient {
    async fn list_calls(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CallListResponse, CallboardError> {
        self.execute(list_request(page, page_size)?).await
    }

    async fn get_call(&self, id: Uuid) -> Result<Call, CallboardError> {
        self.execute(get_request(id)).await
    }

    async fn make_outbound_call(
        &self,
        request: &OutboundCallRequest,
    ) -> Result<OutboundCallReceipt, CallboardError> {
        let receipt: OutboundCallReceipt = self.execute(outbound_request(request)?).await?;
        info!(call_id = %receipt.call_id, status = %receipt.status, "outbound call placed");
        Ok(receipt)
    }

    async fn get_conversation(&self, call_id: Uuid) -> Result<Conversation, CallboardError> {
        self.execute(conversation_request(call_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{anonymous_client, call_json, signed_in_client};
    use callboard_core::FailureKind;
    use reqwest::Method;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CALL_ID: &str = "6f1c2a4e-8f7b-4c39-9a53-0c3f4a1e2b7d";

    #[test]
    fn list_request_carries_pagination() {
        let request = list_request(3, 20).unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/calls");
        assert_eq!(
            request.query,
            vec![("page", "3".to_string()), ("page_size", "20".to_string())]
        );
    }

    #[test]
    fn list_request_rejects_out_of_range_values() {
        assert!(list_request(0, 20).is_err());
        assert!(list_request(1, 0).is_err());
        assert!(list_request(1, MAX_PAGE_SIZE + 1).is_err());
        assert!(list_request(1, MAX_PAGE_SIZE).is_ok());
    }

    #[test]
    fn conversation_path_is_nested_under_call() {
        let id: Uuid = CALL_ID.parse().unwrap();
        assert_eq!(
            conversation_request(id).path,
            format!("/calls/{CALL_ID}/conversation")
        );
    }

    #[tokio::test]
    async fn list_calls_decodes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/calls"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [call_json(CALL_ID)],
                "total": 21,
                "page": 2,
                "page_size": 20
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let page = client.list_calls(2, 20).await.unwrap();
        assert_eq!(page.total, 21);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.to_string(), CALL_ID);
    }

    #[tokio::test]
    async fn invalid_page_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let err = client.list_calls(0, 20).await.unwrap_err();
        assert!(matches!(err, CallboardError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_call_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/calls/{CALL_ID}")))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"detail": "Call not found"})),
            )
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let err = client.get_call(CALL_ID.parse().unwrap()).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(err.user_message(), "Call not found");
    }

    #[tokio::test]
    async fn conversation_is_fetched_with_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/calls/{CALL_ID}/conversation")))
            .and(header("authorization", "Bearer op-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1d7e6a0c-2b3f-4e5d-9c8b-7a6f5e4d3c2b",
                "call_id": CALL_ID,
                "messages": [
                    {"role": "assistant", "content": "Buenos días", "timestamp": "2026-03-01T10:15:01"},
                    {"role": "user", "content": "Hola", "timestamp": "2026-03-01T10:15:04"}
                ],
                "summary": "Reserva",
                "intent": "booking",
                "sentiment": "positive",
                "metadata": null,
                "created_at": "2026-03-01T10:17:00",
                "updated_at": "2026-03-01T10:17:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_in_client(&server.uri(), "op-token");
        let conversation = client
            .get_conversation(CALL_ID.parse().unwrap())
            .await
            .unwrap();
        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.messages[0].content, "Buenos días");
        assert_eq!(conversation.intent.as_deref(), Some("booking"));
    }

    #[tokio::test]
    async fn outbound_call_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/calls/outbound"))
            .and(body_json(serde_json::json!({
                "to_number": "+34600111222",
                "message": "Le llamamos para confirmar su cita."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "call_sid": "CAabc",
                "call_id": CALL_ID,
                "status": "initiated"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let receipt = client
            .make_outbound_call(&OutboundCallRequest {
                to_number: "+34600111222".into(),
                from_number: None,
                message: Some("Le llamamos para confirmar su cita.".into()),
            })
            .await
            .unwrap();
        assert_eq!(receipt.call_sid, "CAabc");
        assert_eq!(receipt.status, "initiated");
    }

    #[tokio::test]
    async fn outbound_call_without_destination_is_rejected_locally() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let err = client
            .make_outbound_call(&OutboundCallRequest {
                to_number: String::new(),
                from_number: None,
                message: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Client);
    }
}
