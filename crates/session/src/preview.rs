//! Image preview for grid rows.
//!
//! A one-shot async read of a local file into memory, rendered as a data URL.
//! The result never feeds validation beyond the image being present.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use entrygrid_products::ImageRef;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image {0} is empty")]
    Empty(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub image: ImageRef,
    pub data_url: String,
}

/// Media type guessed from the file extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn data_url(image: &ImageRef) -> String {
    format!("data:{};base64,{}", image.media_type, STANDARD.encode(&image.bytes))
}

pub async fn read_image_preview(path: impl AsRef<Path>) -> Result<ImagePreview, PreviewError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| PreviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(PreviewError::Empty(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let image = ImageRef::new(file_name, media_type_for(path), bytes);
    tracing::debug!(file = %image.file_name, bytes = image.len(), "image preview loaded");

    Ok(ImagePreview {
        data_url: data_url(&image),
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use entrygrid_core::EntryId;

    fn temp_file(ext: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("entrygrid-{}.{ext}", EntryId::new()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn media_type_follows_extension() {
        assert_eq!(media_type_for(Path::new("a.PNG")), "image/png");
        assert_eq!(media_type_for(Path::new("b.jpeg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn data_url_encodes_bytes() {
        let image = ImageRef::new("x.gif", "image/gif", b"hi".to_vec());
        assert_eq!(data_url(&image), "data:image/gif;base64,aGk=");
    }

    #[tokio::test]
    async fn reads_file_into_preview() {
        let path = temp_file("png", &[0x89, b'P', b'N', b'G']);
        let preview = read_image_preview(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(preview.image.media_type, "image/png");
        assert_eq!(preview.image.len(), 4);
        assert!(preview.data_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let path = temp_file("jpg", &[]);
        let err = read_image_preview(&path).await.unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, PreviewError::Empty(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = read_image_preview("/no/such/image.png").await.unwrap_err();
        assert!(matches!(err, PreviewError::Io { .. }));
    }
}
