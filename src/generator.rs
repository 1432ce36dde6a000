use anyhow::{Context, Result, bail, ensure};
use image::ImageFormat;
use log::{debug, info};
use std::{fs, path::PathBuf};

use crate::{
    config::GeneratorConfig,
    font::{Face, resolve_face},
    icon::{icon_file_name, render_icon},
};

/// Renders every configured size into `out_dir`, returning the written paths
/// in the order of `config.sizes`.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    ensure!(!config.sizes.is_empty(), "No icon sizes configured");
    if let Some(size) = config.sizes.iter().find(|size| **size == 0) {
        bail!("Invalid icon size: {size}");
    }

    println!("Generating PWA icons...");

    debug!("Writing icons to {}", config.out_dir.display());
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("Failed to create {}", config.out_dir.display()))?;

    let face = resolve_face(&config.font);
    if let Face::Outline(_) = face {
        info!("Rendering with outline font");
    }

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = render_icon(size, &config.style, &face);
        let path = config.out_dir.join(icon_file_name(size));
        icon.save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Created {}", path.display());
        written.push(path);
    }

    println!("\nAll icons generated successfully!");
    println!("Icons are ready for PWA use.");
    Ok(written)
}
