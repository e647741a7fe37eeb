//! Catalog Loader
//!
//! One load per gallery activation: the manifest (or a local directory
//! scan), falling back to the built-in template list on any failure.

use anyhow::Result;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::TemplateClient;
use crate::log_debug;
use crate::logic::{catalog, errors};
use crate::manifest;
use crate::model::types::{Catalog, CatalogSource};

/// Where the primary catalog comes from
#[derive(Clone, Debug)]
pub enum CatalogOrigin {
    /// `GET {base_url}/images.json`
    Remote(TemplateClient),
    /// Scan a local directory of images
    Directory(PathBuf),
}

impl CatalogOrigin {
    /// Human-readable location for the status bar
    pub fn describe(&self) -> String {
        match self {
            CatalogOrigin::Remote(client) => client.manifest_url(),
            CatalogOrigin::Directory(dir) => dir.display().to_string(),
        }
    }
}

/// Result of one load, tagged with the activation that requested it
#[derive(Debug)]
pub struct CatalogLoaded {
    pub generation: u64,
    pub catalog: Catalog,
}

async fn load_primary(origin: &CatalogOrigin) -> Result<Catalog> {
    match origin {
        CatalogOrigin::Remote(client) => {
            let files = client.get_manifest().await?;
            Ok(Catalog {
                templates: catalog::records_from_manifest(&files),
                source: CatalogSource::Manifest,
            })
        }
        CatalogOrigin::Directory(dir) => {
            let dir = dir.clone();
            let files = tokio::task::spawn_blocking(move || manifest::scan_image_files(&dir))
                .await??;
            Ok(Catalog {
                templates: catalog::records_from_discovery(files),
                source: CatalogSource::Discovered,
            })
        }
    }
}

/// Load the catalog: one attempt at the primary source, then the built-in list
///
/// Never fails; a failed primary load resolves to the fallback list so the
/// gallery always has something to show.
pub async fn load_catalog(origin: &CatalogOrigin) -> Catalog {
    match load_primary(origin).await {
        Ok(loaded) => {
            log_debug(&format!(
                "Loaded {} templates from {}",
                loaded.templates.len(),
                loaded.source.label()
            ));
            loaded
        }
        Err(e) => {
            let error_type = errors::classify_error(&e);
            let message = errors::format_error_message(&e);
            log_debug(&format!(
                "Catalog load failed ({}): {:#}, using fallback templates",
                error_type.describe(),
                e
            ));
            Catalog {
                templates: catalog::fallback_templates(),
                source: CatalogSource::Fallback {
                    error_type,
                    message,
                },
            }
        }
    }
}

/// Spawn the single load for one gallery activation
///
/// The handle lets the caller abort the load when the page is left; the
/// generation tag lets it discard a result that raced the abort.
pub fn spawn_catalog_load(
    origin: CatalogOrigin,
    generation: u64,
    tx: mpsc::UnboundedSender<CatalogLoaded>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let catalog = load_catalog(&origin).await;
        if tx.send(CatalogLoaded { generation, catalog }).is_err() {
            log_debug(&format!(
                "Catalog load {} finished after receiver closed",
                generation
            ));
        }
    })
}
