use ab_glyph::{Font, FontArc, FontVec, PxScale};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::config::FontSource;

#[derive(Debug)]
pub enum FontError {
    NotFound(String),
    ReadError(std::io::Error),
    InvalidFont(String),
    UnsupportedPlatform,
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::NotFound(path) => write!(f, "Font file not found: {path}"),
            FontError::ReadError(err) => write!(f, "Failed to read font file: {err}"),
            FontError::InvalidFont(path) => write!(f, "Unsupported font data: {path}"),
            FontError::UnsupportedPlatform => write!(f, "Platform not supported"),
        }
    }
}

impl std::error::Error for FontError {}

/// A typeface the icon text can be drawn with.
#[derive(Clone)]
pub enum Face {
    Outline(FontArc),
    Builtin,
}

impl Face {
    pub fn at(&self, px: u32) -> FontHandle {
        FontHandle {
            face: self.clone(),
            px,
        }
    }
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Outline(_) => f.write_str("Outline"),
            Face::Builtin => f.write_str("Builtin"),
        }
    }
}

/// A face at a pixel size.
#[derive(Debug, Clone)]
pub struct FontHandle {
    pub face: Face,
    pub px: u32,
}

/// Scale at which one em of `font` spans `px` pixels.
///
/// `PxScale` measures the line height (ascent - descent), which is larger
/// than the em for most faces.
pub fn em_scale(font: &FontArc, px: u32) -> PxScale {
    let height = font.height_unscaled();
    let units_per_em = font.units_per_em().unwrap_or(height);
    PxScale::from(px as f32 * height / units_per_em)
}

/// Loads the configured outline font, falling back to the built-in glyphs.
pub fn resolve_face(source: &FontSource) -> Face {
    let loaded = match source {
        FontSource::Builtin => return Face::Builtin,
        FontSource::File(path) => load_font(path),
        FontSource::System => load_system_font(),
    };

    match loaded {
        Ok(font) => Face::Outline(font),
        Err(err @ FontError::NotFound(_))
        | Err(err @ FontError::ReadError(_))
        | Err(err @ FontError::InvalidFont(_))
        | Err(err @ FontError::UnsupportedPlatform) => {
            info!("Using built-in font: {err}");
            Face::Builtin
        }
    }
}

pub fn load_font(path: &Path) -> Result<FontArc, FontError> {
    if !path.is_file() {
        return Err(FontError::NotFound(path.display().to_string()));
    }
    let font_data = std::fs::read(path).map_err(FontError::ReadError)?;
    // Collections (.ttc) hold several faces; the first is the regular one.
    let font = FontVec::try_from_vec_and_index(font_data, 0)
        .map_err(|_| FontError::InvalidFont(path.display().to_string()))?;
    debug!("Loaded font {}", path.display());
    Ok(FontArc::new(font))
}

#[cfg(target_os = "macos")]
fn platform_font_paths() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/HelveticaNeue.ttc",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(target_os = "windows")]
fn platform_font_paths() -> Vec<PathBuf> {
    let system_path = std::env::var("SYSTEMROOT").unwrap_or("C:\\Windows".to_string());
    ["arial.ttf", "segoeui.ttf", "tahoma.ttf"]
        .into_iter()
        .map(|name| PathBuf::from(format!("{system_path}\\Fonts\\{name}")))
        .collect()
}

#[cfg(target_os = "linux")]
fn platform_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn platform_font_paths() -> Vec<PathBuf> {
    Vec::new()
}

/// Platform candidates first, then sans faces in the user's font directory.
pub fn system_font_candidates() -> Vec<PathBuf> {
    let mut candidates = platform_font_paths();
    if let Some(user_fonts) = dirs::font_dir() {
        for name in ["Helvetica.ttc", "Arial.ttf", "DejaVuSans.ttf", "LiberationSans-Regular.ttf"] {
            candidates.push(user_fonts.join(name));
        }
    }
    candidates
}

fn load_system_font() -> Result<FontArc, FontError> {
    let candidates = system_font_candidates();
    if candidates.is_empty() {
        return Err(FontError::UnsupportedPlatform);
    }

    let mut last_err = None;
    for font_path in &candidates {
        match load_font(font_path) {
            Ok(font) => return Ok(font),
            Err(FontError::NotFound(_)) => continue,
            Err(err) => {
                debug!("Skipping {}: {err}", font_path.display());
                last_err = Some(err);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| FontError::NotFound("No system sans font found".to_string())))
}
