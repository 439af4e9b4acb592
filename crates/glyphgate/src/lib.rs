//! # Glyphgate
//!
//! SVG CAPTCHA engine: randomized challenge text laid out as vector glyph
//! paths, composited with wavy noise strokes into a self-contained SVG
//! document, plus keyed store/verify against a pluggable key-value backend.
//!
//! ## Modules
//! - `charset` - character presets and the active alphabet
//! - `config` - per-generator options
//! - `font` - font loading and glyph outline access
//! - `layout` - straight and messy glyph layout
//! - `noise` - wavy distortion strokes
//! - `svg` - document assembly
//! - `generator` / `verifier` - challenge lifecycle
//! - `store` - storage collaborators (in-memory, Redis)
//!
//! ```no_run
//! use glyphgate::{CaptchaGenerator, CaptchaOptions, MemoryStore};
//!
//! # async fn demo() -> Result<(), glyphgate::CaptchaError> {
//! let mut generator = CaptchaGenerator::new(CaptchaOptions::default())?;
//! let challenge = generator.generate().await?;
//!
//! let store = MemoryStore::new();
//! generator.store_captcha(60, &store).await?;
//! let ok = generator
//!     .verify_captcha("user input", &challenge.key, &store)
//!     .await?;
//! # let _ = ok;
//! # Ok(())
//! # }
//! ```

pub mod charset;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod generator;
pub mod layout;
pub mod noise;
pub mod random;
pub mod store;
pub mod svg;
pub mod verifier;

pub use charset::CharPreset;
pub use config::CaptchaOptions;
pub use error::CaptchaError;
pub use font::{FontFace, FontSet, GlyphFont};
pub use generator::{CaptchaGenerator, Challenge};
pub use layout::{GlyphPath, Rotation};
pub use store::{CaptchaStore, MemoryStore, RedisStore};
