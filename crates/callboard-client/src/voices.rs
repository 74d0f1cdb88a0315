// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice profile accessors.

use async_trait::async_trait;
use callboard_core::{
    CallboardError, VoiceDeletion, VoiceProfile, VoiceTestRequest, VoiceTestResult, VoiceUpload,
    VoicesApi,
};
use uuid::Uuid;

use crate::gateway::ApiClient;
use crate::request::ApiRequest;

pub fn list_request() -> ApiRequest {
    ApiRequest::get("/voices")
}

pub fn get_request(id: Uuid) -> ApiRequest {
    ApiRequest::get(format!("/voices/{id}"))
}

/// `POST /voices/clone` as `multipart/form-data`.
pub fn create_request(upload: &VoiceUpload) -> Result<ApiRequest, CallboardError> {
    upload.validate()?;
    Ok(ApiRequest::post("/voices/clone").multipart(upload.clone()))
}

/// `POST /voices/{id}/test`
pub fn test_request(id: Uuid, text: &str) -> Result<ApiRequest, CallboardError> {
    let body = VoiceTestRequest {
        text: text.to_string(),
    };
    body.validate()?;
    Ok(ApiRequest::post(format!("/voices/{id}/test"))
        .json(serde_json::json!({ "text": body.text })))
}

pub fn delete_request(id: Uuid) -> ApiRequest {
    ApiRequest::delete(format!("/voices/{id}"))
}

#[async_trait]
impl VoicesApi for ApiClient {
    async fn list_voices(&self) -> Result<Vec<VoiceProfile>, CallboardError> {
        self.execute(list_request()).await
    }

    async fn get_voice(&self, id: Uuid) -> Result<VoiceProfile, CallboardError> {
        self.execute(get_request(id)).await
    }

    async fn create_voice(&self, upload: &VoiceUpload) -> Result<VoiceProfile, CallboardError> {
        self.execute(create_request(upload)?).await
    }

    async fn test_voice(&self, id: Uuid, text: &str) -> Result<VoiceTestResult, CallboardError> {
        self.execute(test_request(id, text)?).await
    }

    async fn delete_voice(&self, id: Uuid) -> Result<VoiceDeletion, CallboardError> {
        self.execute(delete_request(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestBody;
    use crate::test_support::{anonymous_client, voice_json};
    use callboard_core::{AudioSample, FailureKind};
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use tracing_test::traced_test;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VOICE_ID: &str = "0b8d2c9e-3f4a-4b5c-8d7e-9f0a1b2c3d4e";

    fn upload(files: Vec<AudioSample>) -> VoiceUpload {
        VoiceUpload {
            name: "Recepción".into(),
            description: Some("Voz cálida".into()),
            files,
        }
    }

    fn mp3(name: &str) -> AudioSample {
        AudioSample {
            file_name: name.into(),
            content_type: Some("audio/mpeg".into()),
            bytes: b"ID3 sample frames".to_vec(),
        }
    }

    #[test]
    fn create_request_is_multipart() {
        let request = create_request(&upload(vec![mp3("a.mp3")])).unwrap();
        assert_eq!(request.path, "/voices/clone");
        assert!(matches!(request.body, RequestBody::Multipart(_)));
    }

    #[test]
    fn create_request_requires_a_file() {
        let err = create_request(&upload(vec![])).unwrap_err();
        assert!(matches!(err, CallboardError::Validation(_)));
    }

    #[test]
    fn test_request_rejects_empty_text() {
        let id: Uuid = VOICE_ID.parse().unwrap();
        assert!(test_request(id, "").is_err());
        assert!(test_request(id, "Hola").is_ok());
    }

    #[tokio::test]
    async fn list_voices_decodes_profiles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/voices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([voice_json(VOICE_ID, "Recepción")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let voices = client.list_voices().await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].name, "Recepción");
    }

    #[tokio::test]
    #[traced_test]
    async fn create_voice_uploads_form_fields_and_files() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/voices/clone"))
            .and(body_string_contains("name=\"name\""))
            .and(body_string_contains("name=\"description\""))
            .and(body_string_contains("filename=\"a.mp3\""))
            .and(body_string_contains("filename=\"b.wav\""))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(voice_json(VOICE_ID, "Recepción")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let mut wav = mp3("b.wav");
        wav.content_type = Some("audio/wav".into());
        let profile = client
            .create_voice(&upload(vec![mp3("a.mp3"), wav]))
            .await
            .unwrap();
        assert_eq!(profile.id.to_string(), VOICE_ID);

        let requests = server.received_requests().await.expect("recording enabled");
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(
            content_type.starts_with("multipart/form-data"),
            "got: {content_type}"
        );
        assert!(!logs_contain("voice profile created"));
    }

    #[tokio::test]
    async fn create_voice_surfaces_backend_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/voices/clone"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": "Unsupported audio format"
            })))
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let err = client.create_voice(&upload(vec![mp3("a.mp3")])).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Client);
        assert_eq!(err.user_message(), "Unsupported audio format");
    }

    #[tokio::test]
    async fn test_voice_posts_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/api/v1/voices/{VOICE_ID}/test")))
            .and(body_json(serde_json::json!({"text": "Hola, ¿en qué puedo ayudarle?"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audio_url": "/tmp/test_audio/out.mp3",
                "duration_seconds": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let result = client
            .test_voice(VOICE_ID.parse().unwrap(), "Hola, ¿en qué puedo ayudarle?")
            .await
            .unwrap();
        assert_eq!(result.audio_url, "/tmp/test_audio/out.mp3");
        assert!(result.duration_seconds.is_none());
    }

    #[tokio::test]
    async fn delete_voice_uses_delete_method() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/v1/voices/{VOICE_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "deleted",
                "id": VOICE_ID
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = anonymous_client(&server.uri());
        let deletion = client.delete_voice(VOICE_ID.parse().unwrap()).await.unwrap();
        assert_eq!(deletion.status, "deleted");
    }
}
