// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local checks mirroring the backend's request validation.
//!
//! A request that fails here is never sent.

use crate::error::CallboardError;
use crate::types::{OutboundCallRequest, VoiceTestRequest, VoiceUpload};

/// Longest voice profile name the backend accepts.
pub const MAX_VOICE_NAME_CHARS: usize = 100;

/// Longest text the backend will synthesize in a voice test.
pub const MAX_TEST_TEXT_CHARS: usize = 1000;

impl VoiceUpload {
    /// Name must be 1..=100 characters and at least one named audio file attached.
    pub fn validate(&self) -> Result<(), CallboardError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            return Err(CallboardError::Validation(
                "voice name must not be empty".to_string(),
            ));
        }
        if self.name.chars().count() > MAX_VOICE_NAME_CHARS {
            return Err(CallboardError::Validation(format!(
                "voice name must be at most {MAX_VOICE_NAME_CHARS} characters"
            )));
        }
        if self.files.is_empty() {
            return Err(CallboardError::Validation(
                "at least one audio file is required".to_string(),
            ));
        }
        if let Some(unnamed) = self.files.iter().position(|f| f.file_name.trim().is_empty()) {
            return Err(CallboardError::Validation(format!(
                "audio file #{} has no file name",
                unnamed + 1
            )));
        }
        Ok(())
    }
}

impl VoiceTestRequest {
    /// Text must be 1..=1000 characters.
    pub fn validate(&self) -> Result<(), CallboardError> {
        if self.text.trim().is_empty() {
            return Err(CallboardError::Validation(
                "test text must not be empty".to_string(),
            ));
        }
        if self.text.chars().count() > MAX_TEST_TEXT_CHARS {
            return Err(CallboardError::Validation(format!(
                "test text must be at most {MAX_TEST_TEXT_CHARS} characters"
            )));
        }
        Ok(())
    }
}

impl OutboundCallRequest {
    pub fn validate(&self) -> Result<(), CallboardError> {
        if self.to_number.trim().is_empty() {
            return Err(CallboardError::Validation(
                "destination number must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioSample;

    fn sample(name: &str) -> AudioSample {
        AudioSample {
            file_name: name.to_string(),
            content_type: Some("audio/mpeg".to_string()),
            bytes: vec![0xff, 0xfb, 0x90],
        }
    }

    fn upload(name: &str, files: Vec<AudioSample>) -> VoiceUpload {
        VoiceUpload {
            name: name.to_string(),
            description: None,
            files,
        }
    }

    #[test]
    fn valid_upload_passes() {
        assert!(upload("Recepción", vec![sample("a.mp3")]).validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = upload("  ", vec![sample("a.mp3")]).validate().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let name: String = "ñ".repeat(MAX_VOICE_NAME_CHARS);
        assert!(upload(&name, vec![sample("a.mp3")]).validate().is_ok());
        let name: String = "ñ".repeat(MAX_VOICE_NAME_CHARS + 1);
        assert!(upload(&name, vec![sample("a.mp3")]).validate().is_err());
    }

    #[test]
    fn upload_without_files_is_rejected() {
        let err = upload("Ventas", vec![]).validate().unwrap_err();
        assert_eq!(err.user_message(), "at least one audio file is required");
    }

    #[test]
    fn unnamed_file_is_rejected() {
        let err = upload("Ventas", vec![sample("a.mp3"), sample("")])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_text_bounds() {
        let ok = VoiceTestRequest {
            text: "Hola, ¿en qué puedo ayudarle?".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = VoiceTestRequest { text: String::new() };
        assert!(empty.validate().is_err());

        let long = VoiceTestRequest {
            text: "a".repeat(MAX_TEST_TEXT_CHARS + 1),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn outbound_requires_destination() {
        let request = OutboundCallRequest {
            to_number: " ".to_string(),
            from_number: None,
            message: None,
        };
        assert!(request.validate().is_err());
    }
}
