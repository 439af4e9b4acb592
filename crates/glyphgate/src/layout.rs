//! Glyph layout: advance accumulation, scale-to-fit, centering, rotation.
//!
//! Two modes. Straight layout uses one font and a fixed inter-character
//! gap. Messy layout re-samples the font per character and rotates each
//! glyph around its midpoint on the shared baseline.

use rand::Rng;

use crate::config::CaptchaOptions;
use crate::constants::{FIT_MARGIN, GLYPH_GAP, MAX_ROTATION_DEG};
use crate::error::CaptchaError;
use crate::font::GlyphFont;

/// One positioned character: path data plus an optional rotation
#[derive(Debug, Clone)]
pub struct GlyphPath {
    pub data: String,
    pub rotation: Option<Rotation>,
}

/// Rotation in degrees around a pivot point
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    pub degrees: f32,
    pub cx: f32,
    pub cy: f32,
}

/// Lay out `text` inside the canvas, one path per character.
pub fn layout_text<F: GlyphFont>(
    options: &CaptchaOptions,
    text: &str,
    fonts: &[F],
) -> Result<Vec<GlyphPath>, CaptchaError> {
    if fonts.is_empty() {
        return Err(CaptchaError::Config(
            "at least one font resource is required".to_string(),
        ));
    }

    if options.messy {
        layout_messy(options, text, fonts)
    } else {
        layout_straight(options, text, fonts)
    }
}

/// Advance width in pixels at `font_size`
fn scaled_advance<F: GlyphFont>(font: &F, ch: char, font_size: f32) -> Result<f32, CaptchaError> {
    Ok(font.advance_width(ch)? as f32 * font_size / font.units_per_em() as f32)
}

/// Shrink-only fit factor; zero-width text needs no scaling.
fn fit_scale(natural: f32, available: f32) -> f32 {
    if natural <= 0.0 {
        return 1.0;
    }
    (available / natural).min(1.0)
}

fn baseline(options: &CaptchaOptions) -> f32 {
    options.height / 2.0 + options.font_size / 3.0
}

fn layout_straight<F: GlyphFont>(
    options: &CaptchaOptions,
    text: &str,
    fonts: &[F],
) -> Result<Vec<GlyphPath>, CaptchaError> {
    let font = &fonts[0];
    let chars: Vec<char> = text.chars().collect();

    let mut advances = Vec::with_capacity(chars.len());
    let mut natural = 0.0;
    for &ch in &chars {
        let advance = scaled_advance(font, ch, options.font_size)?;
        natural += advance;
        advances.push(advance);
    }
    if !chars.is_empty() {
        natural += GLYPH_GAP * (chars.len() - 1) as f32;
    }

    let scale = fit_scale(natural, options.width - FIT_MARGIN);
    let mut x = (options.width - natural * scale) / 2.0;
    let y = baseline(options);

    let mut paths = Vec::with_capacity(chars.len());
    for (&ch, &advance) in chars.iter().zip(&advances) {
        let data = font.glyph_path(ch, x, y, options.font_size * scale)?;
        paths.push(GlyphPath {
            data,
            rotation: None,
        });
        x += advance * scale + GLYPH_GAP * scale;
    }
    Ok(paths)
}

fn layout_messy<F: GlyphFont>(
    options: &CaptchaOptions,
    text: &str,
    fonts: &[F],
) -> Result<Vec<GlyphPath>, CaptchaError> {
    let mut rng = rand::rng();

    // Width pass: random font per character, no gap.
    let mut natural = 0.0;
    for ch in text.chars() {
        let font = &fonts[rng.random_range(0..fonts.len())];
        natural += scaled_advance(font, ch, options.font_size)?;
    }

    let scale = fit_scale(natural, options.width);
    let mut x = (options.width - natural * scale) / 2.0;
    let y = baseline(options);

    let mut paths = Vec::with_capacity(text.len());
    for ch in text.chars() {
        // The font is re-sampled here, independent of the width pass: a
        // glyph may render from a different face than the one measured.
        let font = &fonts[rng.random_range(0..fonts.len())];
        let advance = scaled_advance(font, ch, options.font_size)? * scale;
        let data = font.glyph_path(ch, x, y, options.font_size * scale)?;
        let degrees = rng.random_range(-MAX_ROTATION_DEG..MAX_ROTATION_DEG);
        paths.push(GlyphPath {
            data,
            rotation: Some(Rotation {
                degrees,
                cx: x + advance / 2.0,
                cy: y,
            }),
        });
        x += advance;
    }
    Ok(paths)
}
