//! Challenge configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::charset::CharPreset;
use crate::constants::{
    DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_NOISE, DEFAULT_NOISE_WIDTH,
    DEFAULT_SIZE, DEFAULT_WIDTH,
};
use crate::random::random_color;

/// Options for one generator instance, fixed at construction.
///
/// Color fields left unset are drawn once by [`random_color`] and then stay
/// fixed for the instance's lifetime. Unknown keys in deserialized input are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptchaOptions {
    /// Challenge length in characters
    #[serde(default = "default_size")]
    pub size: usize,

    /// Characters excluded from the active alphabet
    #[serde(default)]
    pub ignore_chars: String,

    /// Number of noise strokes drawn beneath the text
    #[serde(default = "default_noise")]
    pub noise: usize,

    /// Background fill color
    #[serde(default = "crate::random::random_color")]
    pub background: String,

    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: f32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: f32,

    /// Font size in pixels, before scale-to-fit
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Character preset the alphabet is drawn from
    #[serde(default)]
    pub preset: CharPreset,

    /// Font files, tried in order; must be non-empty
    #[serde(default = "default_font_files")]
    pub font_files: Vec<PathBuf>,

    /// Glyph fill color
    #[serde(default = "crate::random::random_color")]
    pub font_colour: String,

    /// Noise stroke color
    #[serde(default = "crate::random::random_color")]
    pub noise_colour: String,

    /// Noise stroke width
    #[serde(default = "default_noise_width")]
    pub noise_width: f32,

    /// Per-character random rotation and font choice
    #[serde(default = "default_messy")]
    pub messy: bool,
}

impl Default for CaptchaOptions {
    fn default() -> Self {
        Self {
            size: default_size(),
            ignore_chars: String::new(),
            noise: default_noise(),
            background: random_color(),
            width: default_width(),
            height: default_height(),
            font_size: default_font_size(),
            preset: CharPreset::default(),
            font_files: default_font_files(),
            font_colour: random_color(),
            noise_colour: random_color(),
            noise_width: default_noise_width(),
            messy: default_messy(),
        }
    }
}

// Default value functions
fn default_size() -> usize { DEFAULT_SIZE }
fn default_noise() -> usize { DEFAULT_NOISE }
fn default_width() -> f32 { DEFAULT_WIDTH }
fn default_height() -> f32 { DEFAULT_HEIGHT }
fn default_font_size() -> f32 { DEFAULT_FONT_SIZE }
fn default_noise_width() -> f32 { DEFAULT_NOISE_WIDTH }
fn default_messy() -> bool { true }

fn default_font_files() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_FONT_PATH)]
}
