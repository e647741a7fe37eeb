//! Template Preview Loader
//!
//! Fetches and decodes one template image per highlighted cell. Local reads
//! stay inside `public_dir` and every source is size-checked before it is
//! buffered.

use anyhow::{Context, Result};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use std::path::{Component, Path, PathBuf};
use tokio::sync::mpsc;

use crate::api::TemplateClient;
use crate::log_debug;
use crate::logic::catalog::{is_absolute_url, placeholder_url};
use crate::model::types::TemplateRecord;

/// Largest image we are willing to decode for a preview
const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub byte_size: u64,
    /// The URL that was actually rendered
    pub source_url: String,
    /// Whether the template's own image failed and the placeholder is shown
    pub is_placeholder: bool,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        message: String,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { message } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("message", message)
                .finish(),
        }
    }
}

/// A finished preview load for one template of one gallery activation
pub struct PreviewUpdate {
    pub generation: u64,
    pub template_id: u32,
    pub state: ImagePreviewState,
}

/// Resolves template URLs to image bytes
///
/// Root-relative URLs are read from `public_dir` when one is configured,
/// otherwise fetched from the site.
#[derive(Clone, Debug)]
pub struct ImageFetcher {
    client: TemplateClient,
    public_dir: Option<PathBuf>,
}

impl ImageFetcher {
    pub fn new(client: TemplateClient, public_dir: Option<PathBuf>) -> Self {
        Self { client, public_dir }
    }

    /// Local file backing a root-relative URL, if served from disk
    ///
    /// Paths that would leave `public_dir` (`..`, drive prefixes) are an
    /// error, so the caller falls through to the placeholder.
    pub fn local_path(&self, url: &str) -> Result<Option<PathBuf>> {
        if is_absolute_url(url) {
            return Ok(None);
        }
        let Some(dir) = self.public_dir.as_ref() else {
            return Ok(None);
        };

        let relative = Path::new(url.trim_start_matches('/'));
        let contained = !relative.as_os_str().is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !contained {
            anyhow::bail!("Image path escapes public directory: {}", url);
        }

        Ok(Some(dir.join(relative)))
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        match self.local_path(url)? {
            Some(path) => {
                // Check file size before reading anything
                let metadata = tokio::fs::metadata(&path)
                    .await
                    .with_context(|| format!("Failed to read image {}", path.display()))?;
                if metadata.len() > MAX_IMAGE_BYTES as u64 {
                    anyhow::bail!(
                        "Image too large ({}) - max 20 MB",
                        crate::utils::format_bytes(metadata.len())
                    );
                }
                tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("Failed to read image {}", path.display()))
            }
            None => self.client.get_image_bytes(url, MAX_IMAGE_BYTES).await,
        }
    }
}

async fn decode_for_terminal(
    bytes: Vec<u8>,
    picker: Picker,
) -> Result<(StatefulProtocol, (u32, u32))> {
    let img = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .context("Image decode task failed")?
        .context("Failed to decode image")?;

    let dimensions = (img.width(), img.height());

    // Pre-downscale so protocol encoding stays fast on huge sources
    let font_size = picker.font_size();
    let max_width = 120 * font_size.0 as u32;
    let max_height = 40 * font_size.1 as u32;
    let img = if img.width() > max_width || img.height() > max_height {
        log_debug(&format!(
            "Pre-downscaling {}x{} to fit {}x{}",
            img.width(),
            img.height(),
            max_width,
            max_height
        ));
        img.resize(max_width, max_height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let protocol = picker.new_resize_protocol(img);
    Ok((protocol, dimensions))
}

async fn load_one(
    fetcher: &ImageFetcher,
    picker: &Picker,
    url: &str,
) -> Result<(StatefulProtocol, ImageMetadata)> {
    let bytes = fetcher.fetch(url).await?;
    let byte_size = bytes.len() as u64;
    let (protocol, dimensions) = decode_for_terminal(bytes, picker.clone()).await?;
    Ok((
        protocol,
        ImageMetadata {
            dimensions: Some(dimensions),
            byte_size,
            source_url: url.to_string(),
            is_placeholder: false,
        },
    ))
}

/// Load the template's image, falling back to its placeholder once
pub async fn load_preview(
    fetcher: &ImageFetcher,
    picker: &Picker,
    record: &TemplateRecord,
) -> ImagePreviewState {
    match load_one(fetcher, picker, &record.url).await {
        Ok((protocol, metadata)) => return ImagePreviewState::Ready { protocol, metadata },
        Err(e) => {
            log_debug(&format!(
                "Template image failed to load: {} ({:#})",
                record.url, e
            ));
        }
    }

    let placeholder = placeholder_url(record.id);
    match load_one(fetcher, picker, &placeholder).await {
        Ok((protocol, mut metadata)) => {
            metadata.is_placeholder = true;
            ImagePreviewState::Ready { protocol, metadata }
        }
        Err(e) => {
            log_debug(&format!("Placeholder failed too: {} ({:#})", placeholder, e));
            ImagePreviewState::Failed {
                message: crate::logic::errors::format_error_message(&e),
            }
        }
    }
}

/// Spawn an independent preview load for one grid cell
pub fn spawn_preview_load(
    fetcher: ImageFetcher,
    picker: Picker,
    generation: u64,
    record: TemplateRecord,
    tx: mpsc::UnboundedSender<PreviewUpdate>,
) {
    tokio::spawn(async move {
        log_debug(&format!("Background: Loading preview {}", record.url));
        let state = load_preview(&fetcher, &picker, &record).await;
        let _ = tx.send(PreviewUpdate {
            generation,
            template_id: record.id,
            state,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::catalog::resolve_template_url;
    use std::time::Duration;

    fn fetcher(public_dir: Option<&str>) -> ImageFetcher {
        let client = TemplateClient::new(
            "http://localhost:5173".to_string(),
            "/images.json".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        ImageFetcher::new(client, public_dir.map(PathBuf::from))
    }

    #[test]
    fn test_local_path_for_root_relative() {
        let f = fetcher(Some("/srv/public"));
        assert_eq!(
            f.local_path("/drake.png").unwrap(),
            Some(PathBuf::from("/srv/public/drake.png"))
        );
        assert_eq!(
            f.local_path("/memes/drake.png").unwrap(),
            Some(PathBuf::from("/srv/public/memes/drake.png"))
        );
    }

    #[test]
    fn test_local_path_rejects_parent_segments() {
        let f = fetcher(Some("/srv/public"));
        let url = resolve_template_url("../../etc/secret.png");
        assert!(f.local_path(&url).is_err());
        assert!(f.local_path("/memes/../../secret.png").is_err());
        assert!(f.local_path("/./drake.png").is_err());
        assert!(f.local_path("/").is_err());
    }

    #[test]
    fn test_absolute_urls_never_local() {
        let f = fetcher(Some("/srv/public"));
        assert_eq!(f.local_path("https://images.pexels.com/x.jpeg").unwrap(), None);
    }

    #[test]
    fn test_no_public_dir_means_remote() {
        assert_eq!(fetcher(None).local_path("/drake.png").unwrap(), None);
    }

    #[tokio::test]
    async fn test_escaping_path_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        std::fs::create_dir(&public).unwrap();
        std::fs::write(dir.path().join("secret.png"), b"not yours").unwrap();

        let f = fetcher(public.to_str());
        assert!(f.fetch("/../secret.png").await.is_err());
    }

    #[tokio::test]
    async fn test_oversized_local_file_rejected_before_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        // Sparse file: reports the size without using the disk
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_IMAGE_BYTES as u64 + 1).unwrap();

        let f = fetcher(dir.path().to_str());
        let err = f.fetch("/huge.png").await.unwrap_err();
        assert!(err.to_string().contains("too large"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_small_local_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("drake.png"), b"png bytes").unwrap();

        let f = fetcher(dir.path().to_str());
        assert_eq!(f.fetch("/drake.png").await.unwrap(), b"png bytes");
    }

    #[tokio::test]
    async fn test_missing_local_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let f = fetcher(dir.path().to_str());
        assert!(f.fetch("/nope.png").await.is_err());
    }
}
