//! Shared test support: a synthetic font face with fixed metrics.

use glyphgate::{CaptchaError, GlyphFont};

pub struct BoxFont {
    pub name: &'static str,
    pub advance: u16,
}

impl Default for BoxFont {
    fn default() -> Self {
        Self {
            name: "box",
            advance: 600,
        }
    }
}

impl GlyphFont for BoxFont {
    fn name(&self) -> &str {
        self.name
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn advance_width(&self, ch: char) -> Result<u16, CaptchaError> {
        if ch.is_ascii_alphanumeric() {
            Ok(self.advance)
        } else {
            Err(CaptchaError::MissingGlyph {
                character: ch,
                font: self.name.to_string(),
            })
        }
    }

    fn glyph_path(&self, ch: char, x: f32, y: f32, px_size: f32) -> Result<String, CaptchaError> {
        let advance = self.advance_width(ch)?;
        let w = advance as f32 * px_size / 1000.0;
        let h = px_size * 0.7;
        Ok(format!(
            "M{} {}L{} {}L{} {}L{} {}Z",
            x,
            y,
            x + w,
            y,
            x + w,
            y - h,
            x,
            y - h
        ))
    }
}
