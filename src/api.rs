//! Template Site Client
//!
//! HTTP access to the site that serves `images.json` and the template
//! images themselves.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::logic::catalog::is_absolute_url;

/// HTTP client for the site that serves the manifest and template images
#[derive(Clone, Debug)]
pub struct TemplateClient {
    client: Client,
    base_url: String,
    manifest_path: String,
}

impl TemplateClient {
    pub fn new(base_url: String, manifest_path: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            manifest_path,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the manifest (`{base_url}/images.json` by default)
    pub fn manifest_url(&self) -> String {
        if is_absolute_url(&self.manifest_path) {
            return self.manifest_path.clone();
        }
        format!(
            "{}/{}",
            self.base_url,
            self.manifest_path.trim_start_matches('/')
        )
    }

    /// Fetch the manifest: a JSON array of image filenames
    ///
    /// Non-2xx statuses and bodies that are not a string array are errors.
    pub async fn get_manifest(&self) -> Result<Vec<String>> {
        let url = self.manifest_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch manifest {}", url))?
            .error_for_status()
            .with_context(|| format!("Manifest request failed {}", url))?;

        let files: Vec<String> = response
            .json()
            .await
            .context("Manifest is not a JSON array of filenames")?;

        Ok(files)
    }

    /// Full URL for a template image
    ///
    /// Absolute URLs pass through (protocol-relative ones get `https:`).
    /// Root-relative paths are joined to the base URL with each path segment
    /// percent-encoded, so names like `success kid.png` survive.
    pub fn asset_url(&self, url: &str) -> String {
        if url.starts_with("//") {
            return format!("https:{}", url);
        }
        if is_absolute_url(url) {
            return url.to_string();
        }

        let encoded: Vec<String> = url
            .trim_start_matches('/')
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.base_url, encoded.join("/"))
    }

    /// Download the raw bytes of a template image
    ///
    /// Fails without buffering the rest of the body once more than
    /// `max_bytes` would be needed.
    pub async fn get_image_bytes(&self, url: &str, max_bytes: usize) -> Result<Vec<u8>> {
        let full_url = self.asset_url(url);
        let mut response = self
            .client
            .get(&full_url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch image {}", full_url))?
            .error_for_status()
            .with_context(|| format!("Image request failed {}", full_url))?;

        if let Some(length) = response.content_length() {
            if length > max_bytes as u64 {
                anyhow::bail!(
                    "Image too large ({}) - max {}",
                    crate::utils::format_bytes(length),
                    crate::utils::format_bytes(max_bytes as u64)
                );
            }
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .with_context(|| format!("Failed to read image body {}", full_url))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                anyhow::bail!(
                    "Image too large (over {}) {}",
                    crate::utils::format_bytes(max_bytes as u64),
                    full_url
                );
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str, manifest: &str) -> TemplateClient {
        TemplateClient::new(base.to_string(), manifest.to_string(), Duration::from_secs(1))
            .unwrap()
    }

    #[test]
    fn test_manifest_url_joins_base() {
        assert_eq!(
            client("http://localhost:5173/", "/images.json").manifest_url(),
            "http://localhost:5173/images.json"
        );
        assert_eq!(
            client("http://localhost:5173", "images.json").manifest_url(),
            "http://localhost:5173/images.json"
        );
    }

    #[test]
    fn test_manifest_url_absolute_override() {
        assert_eq!(
            client("http://localhost", "https://cdn.example/images.json").manifest_url(),
            "https://cdn.example/images.json"
        );
    }

    #[test]
    fn test_asset_url_encodes_segments() {
        let c = client("http://localhost:5173", "/images.json");
        assert_eq!(c.asset_url("/drake.png"), "http://localhost:5173/drake.png");
        assert_eq!(
            c.asset_url("/memes/success kid.png"),
            "http://localhost:5173/memes/success%20kid.png"
        );
    }

    #[test]
    fn test_asset_url_absolute_passthrough() {
        let c = client("http://localhost:5173", "/images.json");
        assert_eq!(
            c.asset_url("https://images.pexels.com/photos/1.jpeg?w=400"),
            "https://images.pexels.com/photos/1.jpeg?w=400"
        );
        assert_eq!(c.asset_url("//cdn.example/a.png"), "https://cdn.example/a.png");
    }

    /// Serve one fixed response on a local port, return the base URL
    async fn serve_once(response: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.ok();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_image_over_limit_by_content_length() {
        let body = "x".repeat(64);
        let base = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ))
        .await;

        let err = client(&base, "/images.json")
            .get_image_bytes("/big.png", 16)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("too large"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_image_over_limit_without_content_length() {
        // Chunked body, so the size is only known while reading
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n\
             20\r\nxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx\r\n0\r\n\r\n"
                .to_string(),
        )
        .await;

        let err = client(&base, "/images.json")
            .get_image_bytes("/big.png", 16)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("too large"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_image_within_limit() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 4\r\nConnection: close\r\n\r\nabcd".to_string(),
        )
        .await;

        let bytes = client(&base, "/images.json")
            .get_image_bytes("/small.png", 16)
            .await
            .unwrap();
        assert_eq!(bytes, b"abcd");
    }
}
