//! Catalog construction
//!
//! Pure functions that turn manifest entries (plain filenames) into
//! `TemplateRecord`s, plus the built-in fallback list used when no
//! manifest can be loaded.

use anyhow::{Context, Result};

use super::category::categorize;
use crate::model::types::{Category, TemplateRecord};

/// Recognized image extensions (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Base photo id used to derive per-template placeholder images
const PLACEHOLDER_PHOTO_BASE: u32 = 220453;

/// Split off a recognized image extension
///
/// Returns the stem when `filename` ends in `.png`, `.jpg`, `.jpeg`, `.gif`
/// or `.webp` (any case), otherwise `None`.
fn split_image_extension(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
        .then_some(stem)
}

/// Check whether a filename carries a recognized image extension
///
/// # Examples
/// ```
/// use memegallery::logic::catalog::has_image_extension;
///
/// assert!(has_image_extension("a.png"));
/// assert!(has_image_extension("c.JPG"));
/// assert!(!has_image_extension("b.txt"));
/// assert!(!has_image_extension("png"));
/// ```
pub fn has_image_extension(filename: &str) -> bool {
    split_image_extension(filename).is_some()
}

/// Derive a display name from a manifest filename
///
/// Strips a trailing image extension and turns `-` and `_` into spaces.
///
/// # Examples
/// ```
/// use memegallery::logic::catalog::name_from_filename;
///
/// assert_eq!(name_from_filename("Drake-Pointing.png"), "Drake Pointing");
/// assert_eq!(name_from_filename("success_kid.jpg"), "success kid");
/// assert_eq!(name_from_filename("notes.txt"), "notes.txt");
/// ```
pub fn name_from_filename(filename: &str) -> String {
    let stem = split_image_extension(filename).unwrap_or(filename);
    stem.replace(['-', '_'], " ")
}

/// Whether a string is an absolute network URL (including protocol-relative)
pub fn is_absolute_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// Resolve the image URL for a manifest entry
///
/// Absolute URLs pass through; everything else becomes root-relative.
///
/// # Examples
/// ```
/// use memegallery::logic::catalog::resolve_template_url;
///
/// assert_eq!(resolve_template_url("drake.png"), "/drake.png");
/// assert_eq!(resolve_template_url("/drake.png"), "/drake.png");
/// assert_eq!(
///     resolve_template_url("https://cdn.example/drake.png"),
///     "https://cdn.example/drake.png"
/// );
/// ```
pub fn resolve_template_url(filename: &str) -> String {
    if is_absolute_url(filename) || filename.starts_with('/') {
        filename.to_string()
    } else {
        format!("/{}", filename)
    }
}

/// Parse a manifest body: a JSON array of filename strings
pub fn parse_manifest(body: &str) -> Result<Vec<String>> {
    serde_json::from_str(body).context("Manifest is not a JSON array of filenames")
}

/// Map manifest entries to templates, ids assigned 1.. in manifest order
pub fn records_from_manifest(filenames: &[String]) -> Vec<TemplateRecord> {
    filenames
        .iter()
        .enumerate()
        .map(|(index, filename)| TemplateRecord {
            id: index as u32 + 1,
            name: name_from_filename(filename),
            url: resolve_template_url(filename),
            category: categorize(filename),
        })
        .collect()
}

/// Map files found by a local directory scan to templates
///
/// Names keep their separators and stop at the first `.`. Files are sorted
/// so ids do not depend on directory listing order.
pub fn records_from_discovery(mut filenames: Vec<String>) -> Vec<TemplateRecord> {
    filenames.sort();
    filenames
        .into_iter()
        .enumerate()
        .map(|(index, filename)| TemplateRecord {
            id: index as u32 + 1,
            name: filename
                .split('.')
                .next()
                .unwrap_or(filename.as_str())
                .to_string(),
            url: resolve_template_url(&filename),
            category: categorize(&filename),
        })
        .collect()
}

/// Distinct categories in first-seen order
///
/// Always computed over the unfiltered catalog so the shortcut row does not
/// shrink while searching.
pub fn distinct_categories(templates: &[TemplateRecord]) -> Vec<Category> {
    let mut seen = Vec::new();
    for template in templates {
        if !seen.contains(&template.category) {
            seen.push(template.category);
        }
    }
    seen
}

/// Placeholder image for a template whose own image failed to load
///
/// # Examples
/// ```
/// use memegallery::logic::catalog::placeholder_url;
///
/// assert_eq!(
///     placeholder_url(1),
///     "https://images.pexels.com/photos/220454/pexels-photo-220454.jpeg?auto=compress&cs=tinysrgb&w=400"
/// );
/// ```
pub fn placeholder_url(template_id: u32) -> String {
    let photo = PLACEHOLDER_PHOTO_BASE + template_id.max(1);
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
    )
}

fn pexels(photo: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{}.jpeg?auto=compress&cs=tinysrgb&w=400",
        photo
    )
}

/// Built-in templates used when the manifest is unavailable
pub fn fallback_templates() -> Vec<TemplateRecord> {
    use Category::{Animals, People};

    let entries: [(&str, &str, Category); 24] = [
        ("Drake Pointing", "220453/pexels-photo-220453", People),
        ("Success Kid", "1545743/pexels-photo-1545743", People),
        ("Thinking Face", "3779432/pexels-photo-3779432", People),
        ("Surprised Cat", "45201/kitty-cat-kitten-pet-45201", Animals),
        ("Serious Dog", "58997/pexels-photo-58997", Animals),
        ("Confused Person", "3771118/pexels-photo-3771118", People),
        ("Happy Baby", "1648375/pexels-photo-1648375", People),
        ("Office Worker", "3182773/pexels-photo-3182773", People),
        ("Laughing Person", "1239291/pexels-photo-1239291", People),
        ("Shocked Face", "1181690/pexels-photo-1181690", People),
        ("Thumbs Up", "1181686/pexels-photo-1181686", People),
        ("Facepalm", "3777931/pexels-photo-3777931", People),
        ("Celebration", "1587927/pexels-photo-1587927", People),
        ("Pointing", "3184291/pexels-photo-3184291", People),
        ("Winking", "1181519/pexels-photo-1181519", People),
        ("Cute Puppy", "1108099/pexels-photo-1108099", Animals),
        ("Funny Cat", "104827/cat-pet-animal-domestic-104827", Animals),
        ("Business Person", "2182970/pexels-photo-2182970", People),
        ("Excited Person", "1043471/pexels-photo-1043471", People),
        ("Sleepy Cat", "416160/pexels-photo-416160", Animals),
        ("Surprised Person", "1040881/pexels-photo-1040881", People),
        ("Happy Dog", "1805164/pexels-photo-1805164", Animals),
        ("Thinking Person", "3771069/pexels-photo-3771069", People),
        ("Grumpy Cat", "617278/pexels-photo-617278", Animals),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(index, (name, photo, category))| TemplateRecord {
            id: index as u32 + 1,
            name: name.to_string(),
            url: pexels(photo),
            category: *category,
        })
        .collect()
}
