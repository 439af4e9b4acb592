//! Font resources: async loading, glyph metrics, and outline-to-path
//! conversion.
//!
//! Parsing is delegated to `ttf-parser`; this module owns the boundary the
//! layout engine sees. Metrics stay in font design units so callers can
//! apply the `font_size / units_per_em` conversion themselves.

use std::fmt::Write as _;
use std::path::PathBuf;

use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::error::CaptchaError;
use crate::svg::round2;

/// Glyph access the layout engine needs from a font resource.
///
/// A face that cannot map a requested character must report
/// [`CaptchaError::MissingGlyph`], never substitute another glyph.
pub trait GlyphFont {
    /// Identifier used in error messages
    fn name(&self) -> &str;

    /// The face's design-unit scale
    fn units_per_em(&self) -> u16;

    /// Horizontal advance for `ch` in design units
    fn advance_width(&self, ch: char) -> Result<u16, CaptchaError>;

    /// SVG path data for `ch`, baseline origin at `(x, y)`, scaled so the
    /// em square maps to `px_size` pixels
    fn glyph_path(&self, ch: char, x: f32, y: f32, px_size: f32) -> Result<String, CaptchaError>;
}

/// Raw font files resolved from disk.
///
/// Loading is the generator's only suspension point; any unreadable file
/// aborts the whole set.
#[derive(Debug)]
pub struct FontSet {
    blobs: Vec<(String, Vec<u8>)>,
}

impl FontSet {
    /// Read every configured font file.
    pub async fn load(paths: &[PathBuf]) -> Result<Self, CaptchaError> {
        if paths.is_empty() {
            return Err(CaptchaError::Config(
                "at least one font file is required".to_string(),
            ));
        }

        let mut blobs = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path.display().to_string();
            let data = tokio::fs::read(path)
                .await
                .map_err(|e| CaptchaError::FontLoad {
                    path: name.clone(),
                    reason: e.to_string(),
                })?;
            blobs.push((name, data));
        }

        Ok(Self { blobs })
    }

    /// Parse every loaded blob into a face.
    pub fn faces(&self) -> Result<Vec<FontFace<'_>>, CaptchaError> {
        self.blobs
            .iter()
            .map(|(name, data)| FontFace::parse(name, data))
            .collect()
    }
}

/// A parsed font face backed by `ttf-parser`
#[derive(Debug)]
pub struct FontFace<'a> {
    name: &'a str,
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse a face from raw font bytes.
    pub fn parse(name: &'a str, data: &'a [u8]) -> Result<Self, CaptchaError> {
        let face = Face::parse(data, 0).map_err(|e| CaptchaError::FontLoad {
            path: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { name, face })
    }

    fn glyph_id(&self, ch: char) -> Result<GlyphId, CaptchaError> {
        self.face
            .glyph_index(ch)
            .ok_or_else(|| CaptchaError::MissingGlyph {
                character: ch,
                font: self.name.to_string(),
            })
    }
}

impl GlyphFont for FontFace<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    fn advance_width(&self, ch: char) -> Result<u16, CaptchaError> {
        let id = self.glyph_id(ch)?;
        Ok(self.face.glyph_hor_advance(id).unwrap_or(0))
    }

    fn glyph_path(&self, ch: char, x: f32, y: f32, px_size: f32) -> Result<String, CaptchaError> {
        let id = self.glyph_id(ch)?;
        let scale = px_size / self.face.units_per_em() as f32;
        let mut sink = SvgPathSink::new(x, y, scale);
        // Blank glyphs (space and friends) have no outline; an empty path
        // is correct for them.
        let _ = self.face.outline_glyph(id, &mut sink);
        Ok(sink.finish())
    }
}

/// Outline sink writing SVG path commands.
///
/// Font outlines are y-up around the baseline; SVG is y-down, so vertical
/// coordinates flip around the origin.
struct SvgPathSink {
    d: String,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl SvgPathSink {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self {
            d: String::new(),
            origin_x,
            origin_y,
            scale,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (
            round2(self.origin_x + x * self.scale),
            round2(self.origin_y - y * self.scale),
        )
    }

    fn finish(self) -> String {
        self.d
    }
}

impl OutlineBuilder for SvgPathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        let _ = write!(self.d, "M{x} {y}");
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        let _ = write!(self.d, "L{x} {y}");
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        let _ = write!(self.d, "Q{x1} {y1} {x} {y}");
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        let _ = write!(self.d, "C{x1} {y1} {x2} {y2} {x} {y}");
    }

    fn close(&mut self) {
        self.d.push('Z');
    }
}

#[cfg(test)]
pub(crate) mod test_font {
    //! Synthetic font for layout tests: fixed advance, box outlines.

    use super::GlyphFont;
    use crate::error::CaptchaError;

    pub(crate) struct StubFont {
        pub name: &'static str,
        pub advance: u16,
    }

    impl Default for StubFont {
        fn default() -> Self {
            Self {
                name: "stub",
                advance: 600,
            }
        }
    }

    impl GlyphFont for StubFont {
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

        fn glyph_path(
            &self,
            ch: char,
            x: f32,
            y: f32,
            px_size: f32,
        ) -> Result<String, CaptchaError> {
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
}
