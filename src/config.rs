use image::Rgb;
use std::path::PathBuf;

/// Icon sizes a PWA manifest asks for.
pub const PWA_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

pub const BACKGROUND: Rgb<u8> = Rgb([0x2c, 0x3e, 0x50]);
pub const MAIN_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
pub const ACCENT_COLOR: Rgb<u8> = Rgb([0xd4, 0xa5, 0x74]);

/// Where the outline font comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSource {
    /// Search the platform font directories.
    #[default]
    System,
    /// Load this font file (TTF, OTF or the first face of a TTC).
    File(PathBuf),
    /// Skip outline fonts and use the compiled-in glyphs.
    Builtin,
}

/// Colors, glyphs and proportions of a single icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub background: Rgb<u8>,
    pub main_text: String,
    pub main_color: Rgb<u8>,
    /// Main font size as a fraction of the icon size.
    pub main_scale: f32,
    /// Upward shift of the main glyph as a fraction of the icon size.
    pub main_nudge: f32,
    pub subtitle_text: String,
    pub subtitle_color: Rgb<u8>,
    pub subtitle_scale: f32,
    /// Icons smaller than this get no subtitle.
    pub subtitle_min_size: u32,
    /// Pixels between the main glyph's ink box and the subtitle.
    pub subtitle_gap: u32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            main_text: "T".to_string(),
            main_color: MAIN_COLOR,
            main_scale: 0.4,
            main_nudge: 0.05,
            subtitle_text: "AI".to_string(),
            subtitle_color: ACCENT_COLOR,
            subtitle_scale: 0.08,
            subtitle_min_size: 144,
            subtitle_gap: 5,
        }
    }
}

impl IconStyle {
    pub fn main_px(&self, size: u32) -> u32 {
        scaled_px(size, self.main_scale)
    }

    pub fn subtitle_px(&self, size: u32) -> u32 {
        scaled_px(size, self.subtitle_scale)
    }

    pub fn has_subtitle(&self, size: u32) -> bool {
        size >= self.subtitle_min_size && !self.subtitle_text.is_empty()
    }
}

fn scaled_px(size: u32, scale: f32) -> u32 {
    (size as f32 * scale).round().max(0.0) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub font: FontSource,
    pub style: IconStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("icons"),
            sizes: PWA_SIZES.to_vec(),
            font: FontSource::System,
            style: IconStyle::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration writing into `out_dir`.
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }
}
