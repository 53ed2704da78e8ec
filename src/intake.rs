//! File intake: validate a candidate file and encode it for transport.
//!
//! The native picker and window drag-and-drop both converge here. A file is
//! accepted only when its declared content type (from the extension, or
//! magic-byte sniffing for extensionless drops) is an image type; accepted
//! files are read whole and base64-encoded with no data-URL prefix.

use crate::ai::mime;
use crate::models::SelectedImage;
use crate::{Error, Result};
use base64::Engine as _;
use std::path::Path;
use std::sync::Arc;

/// Warning shown when a non-image file is selected or dropped.
pub const NOT_AN_IMAGE_MESSAGE: &str = "Please upload an image file.";

pub async fn load_image(path: impl AsRef<Path>) -> Result<SelectedImage> {
    let path = path.as_ref();

    let declared = mime::mime_from_path(path);

    let bytes = tokio::fs::read(path).await?;

    // Fall back to sniffing so a valid image dropped without an extension
    // still loads; everything else is rejected.
    let mime_type = match declared.or_else(|| mime::detect_image_mime(&bytes)) {
        Some(m) => m,
        None => {
            tracing::warn!("Rejected non-image file: {}", path.display());
            return Err(Error::UnsupportedFile(NOT_AN_IMAGE_MESSAGE.to_string()));
        }
    };

    let base64_data = base64::engine::general_purpose::STANDARD.encode(&bytes);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!(
        "Loaded {} ({}, {} bytes)",
        file_name,
        mime_type,
        bytes.len()
    );

    Ok(SelectedImage {
        path: path.to_path_buf(),
        file_name,
        bytes: Arc::new(bytes),
        base64_data,
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 PNG, same fixture shape the mock client returns.
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0x99, 0x63, 0xF8,
        0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25, 0x00, 0xBC, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[tokio::test]
    async fn test_load_image_round_trips_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        tokio::fs::write(&path, TINY_PNG).await.unwrap();

        let image = load_image(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.file_name, "pixel.png");
        assert!(!image.base64_data.contains(','));
        assert!(!image.base64_data.starts_with("data:"));

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&image.base64_data)
            .unwrap();
        assert_eq!(decoded, TINY_PNG);
    }

    #[tokio::test]
    async fn test_jpeg_extension_declares_jpeg_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.jpg");
        tokio::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00])
            .await
            .unwrap();

        let image = load_image(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        tokio::fs::write(&path, b"just some notes").await.unwrap();

        let err = load_image(&path).await.unwrap_err();
        match err {
            Error::UnsupportedFile(message) => assert_eq!(message, NOT_AN_IMAGE_MESSAGE),
            other => panic!("expected UnsupportedFile, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extensionless_image_is_sniffed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropped");
        tokio::fs::write(&path, TINY_PNG).await.unwrap();

        let image = load_image(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("ghost.png")).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_data_url_splits_back_to_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        tokio::fs::write(&path, TINY_PNG).await.unwrap();

        let image = load_image(&path).await.unwrap();
        let url = image.data_url();
        let body = url.split_once(',').unwrap().1;
        assert_eq!(body, image.base64_data);
    }
}
