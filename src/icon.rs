use image::RgbImage;

use crate::{config::IconStyle, font::Face, text::TextLayout};

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// Offset that centers `extent` on a canvas of `size`, rounding down.
fn centered(size: u32, extent: u32) -> i32 {
    (size as i32 - extent as i32).div_euclid(2)
}

/// Renders one square icon: background, the centered main glyph nudged upward,
/// and the subtitle just below it on large enough icons.
pub fn render_icon(size: u32, style: &IconStyle, face: &Face) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, style.background);

    let main = TextLayout::new(&style.main_text, &face.at(style.main_px(size)));
    let x = centered(size, main.width());
    let nudge = (size as f32 * style.main_nudge) as i32;
    let y = centered(size, main.height()) - nudge;
    main.draw(&mut img, x, y, style.main_color);

    if style.has_subtitle(size) {
        let subtitle = TextLayout::new(&style.subtitle_text, &face.at(style.subtitle_px(size)));
        let sub_x = centered(size, subtitle.width());
        let sub_y = y + main.height() as i32 + style.subtitle_gap as i32;
        subtitle.draw(&mut img, sub_x, sub_y, style.subtitle_color);
    }

    img
}
