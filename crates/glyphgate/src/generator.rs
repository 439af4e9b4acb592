//! Challenge generation.

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::charset::active_alphabet;
use crate::config::CaptchaOptions;
use crate::constants::KEY_RANDOM_LEN;
use crate::error::CaptchaError;
use crate::font::{FontSet, GlyphFont};
use crate::layout::layout_text;
use crate::noise::generate_noise;
use crate::random::random_token;
use crate::svg::render_document;

/// A rendered challenge: verification key, expected answer, SVG markup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub key: String,
    pub text: String,
    pub svg: String,
}

impl Challenge {
    /// The SVG wrapped as a `data:` URI, ready for an `<img>` src.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(&self.svg))
    }
}

/// Challenge generator.
///
/// Holds the fixed options plus the last generated key/answer pair, which
/// [`store_captcha`](CaptchaGenerator::store_captcha) consumes. Each
/// `generate` call overwrites the previous pair; callers needing concurrent
/// challenges use separate instances.
#[derive(Debug)]
pub struct CaptchaGenerator {
    options: CaptchaOptions,
    alphabet: Vec<char>,
    pub(crate) last_key: Option<String>,
    pub(crate) last_answer: Option<String>,
}

impl CaptchaGenerator {
    /// Build a generator, resolving the active alphabet up front.
    pub fn new(options: CaptchaOptions) -> Result<Self, CaptchaError> {
        if options.size == 0 {
            return Err(CaptchaError::Config(
                "challenge size must be at least 1".to_string(),
            ));
        }
        if options.font_files.is_empty() {
            return Err(CaptchaError::Config(
                "at least one font file is required".to_string(),
            ));
        }
        let alphabet = active_alphabet(options.preset, &options.ignore_chars)?;

        Ok(Self {
            options,
            alphabet,
            last_key: None,
            last_answer: None,
        })
    }

    pub fn options(&self) -> &CaptchaOptions {
        &self.options
    }

    /// Generate a new challenge, loading the configured font files.
    ///
    /// Font loading is the only await point; if any file fails to load or
    /// parse, no partial image is produced.
    pub async fn generate(&mut self) -> Result<Challenge, CaptchaError> {
        let fonts = FontSet::load(&self.options.font_files).await?;
        let faces = fonts.faces()?;
        self.generate_with_fonts(&faces)
    }

    /// Generate a new challenge from already-resolved font faces.
    ///
    /// Entry point for callers with embedded font bytes or pooled faces.
    pub fn generate_with_fonts<F: GlyphFont>(
        &mut self,
        fonts: &[F],
    ) -> Result<Challenge, CaptchaError> {
        let text = self.random_text();
        let glyphs = layout_text(&self.options, &text, fonts)?;
        let noise = generate_noise(&self.options);
        let svg = render_document(&self.options, &glyphs, &noise);
        let key = issue_key();

        tracing::debug!(
            key = %key,
            size = self.options.size,
            messy = self.options.messy,
            "generated captcha challenge"
        );

        self.last_key = Some(key.clone());
        self.last_answer = Some(text.clone());

        Ok(Challenge { key, text, svg })
    }

    /// `size` characters drawn uniformly, with replacement, from the
    /// active alphabet.
    fn random_text(&self) -> String {
        let mut rng = rand::rng();
        (0..self.options.size)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}

/// Random token plus a hex millisecond timestamp, biasing against
/// collisions across rapid successive calls. Practically unique, not a
/// cryptographic token; deployments needing unpredictability should derive
/// keys from a CSPRNG instead.
fn issue_key() -> String {
    format!(
        "{}{:x}",
        random_token(KEY_RANDOM_LEN),
        chrono::Utc::now().timestamp_millis()
    )
}
