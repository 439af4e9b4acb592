//! SVG document assembly.

use std::fmt::Write as _;

use crate::config::CaptchaOptions;
use crate::layout::GlyphPath;

/// Round a coordinate to two decimal places to bound output size.
pub(crate) fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Compose the final document: background rectangle, then noise strokes,
/// then one filled path per character. Noise sits beneath the text.
pub fn render_document(
    options: &CaptchaOptions,
    glyphs: &[GlyphPath],
    noise: &[String],
) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = options.width,
        h = options.height
    );

    let _ = write!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        options.background
    );

    for d in noise {
        let _ = write!(
            svg,
            r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
            d, options.noise_colour, options.noise_width
        );
    }

    for glyph in glyphs {
        match glyph.rotation {
            Some(rotation) => {
                let _ = write!(
                    svg,
                    r#"<path d="{}" fill="{}" transform="rotate({} {} {})"/>"#,
                    glyph.data,
                    options.font_colour,
                    round2(rotation.degrees),
                    round2(rotation.cx),
                    round2(rotation.cy)
                );
            }
            None => {
                let _ = write!(
                    svg,
                    r#"<path d="{}" fill="{}"/>"#,
                    glyph.data, options.font_colour
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
