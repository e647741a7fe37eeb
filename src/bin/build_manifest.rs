//! Build step: regenerate `public/images.json` from the images in `public/`.
//!
//! Takes no arguments. Exits non-zero if the directory cannot be read or the
//! manifest cannot be written.

use anyhow::Result;
use std::path::Path;

use memegallery::manifest::{write_manifest, MANIFEST_FILE_NAME};

const PUBLIC_DIR: &str = "public";

fn main() -> Result<()> {
    let public_dir = Path::new(PUBLIC_DIR);
    let output = public_dir.join(MANIFEST_FILE_NAME);

    let count = write_manifest(public_dir, &output)?;

    println!("✅ {} generated with {} images", MANIFEST_FILE_NAME, count);
    Ok(())
}
