//! Shared constants: character tables, layout tuning, defaults.

/// Uppercase preset characters
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase preset characters
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit preset characters
pub const NUMBERS: &str = "0123456789";

/// Upper + lower
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Upper + digits
pub const UPPER_ALPHANUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lower + digits
pub const LOWER_ALPHANUM: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Full alphanumeric union, the fallback alphabet
pub const ALL_ALPHANUM: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default challenge length
pub const DEFAULT_SIZE: usize = 4;

/// Default number of noise strokes
pub const DEFAULT_NOISE: usize = 3;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: f32 = 200.0;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: f32 = 80.0;

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 56.0;

/// Default noise stroke width
pub const DEFAULT_NOISE_WIDTH: f32 = 2.0;

/// Default font file used when the caller configures none
pub const DEFAULT_FONT_PATH: &str = "assets/fonts/DejaVuSans.ttf";

/// Inter-character gap in straight layout, before scaling
pub const GLYPH_GAP: f32 = 2.0;

/// Horizontal inset kept free when shrinking straight text to fit
pub const FIT_MARGIN: f32 = 10.0;

/// Rotation bound for messy layout, degrees either side of upright
pub const MAX_ROTATION_DEG: f32 = 25.0;

/// Random characters in a verification key, ahead of the timestamp part
pub const KEY_RANDOM_LEN: usize = 8;

/// Store key prefixes
pub mod store_keys {
    /// Challenge answer: captcha:{key}
    pub const CAPTCHA_PREFIX: &str = "captcha:";
}
