// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reads audio samples from disk for voice cloning.

use std::path::Path;

use callboard_core::{AudioSample, CallboardError};

/// MIME type by file extension; `None` for unknown extensions.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "m4a" => Some("audio/mp4"),
        "ogg" | "oga" => Some("audio/ogg"),
        "flac" => Some("audio/flac"),
        "webm" => Some("audio/webm"),
        _ => None,
    }
}

pub async fn read_sample(path: &Path) -> Result<AudioSample, CallboardError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CallboardError::Validation(format!("`{}` is not a file path", path.display()))
        })?
        .to_string();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        CallboardError::Validation(format!("cannot read `{}`: {e}", path.display()))
    })?;
    if bytes.is_empty() {
        return Err(CallboardError::Validation(format!(
            "`{}` is empty",
            path.display()
        )));
    }
    Ok(AudioSample {
        file_name,
        content_type: content_type_for(path).map(str::to_string),
        bytes,
    })
}

/// Reads every path, failing on the first unreadable file.
pub async fn read_samples<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<AudioSample>, CallboardError> {
    let mut samples = Vec::with_capacity(paths.len());
    for path in paths {
        samples.push(read_sample(path.as_ref()).await?);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn known_extensions_map_to_audio_types() {
        assert_eq!(content_type_for(Path::new("a.MP3")), Some("audio/mpeg"));
        assert_eq!(content_type_for(Path::new("dir/b.wav")), Some("audio/wav"));
        assert_eq!(content_type_for(Path::new("notes.txt")), None);
        assert_eq!(content_type_for(Path::new("noext")), None);
    }

    #[tokio::test]
    async fn reads_files_with_names_and_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("muestra.mp3");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0xff, 0xfb, 0x90])
            .unwrap();

        let samples = read_samples(&[&path]).await.unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].file_name, "muestra.mp3");
        assert_eq!(samples[0].content_type.as_deref(), Some("audio/mpeg"));
        assert_eq!(samples[0].bytes, vec![0xff, 0xfb, 0x90]);
    }

    #[tokio::test]
    async fn missing_file_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_sample(&dir.path().join("missing.wav")).await.unwrap_err();
        assert!(matches!(err, CallboardError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        let err = read_sample(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }
}
