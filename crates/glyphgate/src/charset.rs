//! Character presets and the active challenge alphabet.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALL_ALPHANUM, LETTERS, LOWER, LOWER_ALPHANUM, NUMBERS, UPPER, UPPER_ALPHANUM,
};
use crate::error::CaptchaError;

/// Named character sets a challenge can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharPreset {
    Upper,
    Lower,
    Numbers,
    Letters,
    UpperAlphanum,
    LowerAlphanum,
    #[default]
    All,
}

impl CharPreset {
    /// The preset's character table
    pub fn chars(self) -> &'static str {
        match self {
            Self::Upper => UPPER,
            Self::Lower => LOWER,
            Self::Numbers => NUMBERS,
            Self::Letters => LETTERS,
            Self::UpperAlphanum => UPPER_ALPHANUM,
            Self::LowerAlphanum => LOWER_ALPHANUM,
            Self::All => ALL_ALPHANUM,
        }
    }
}

impl FromStr for CharPreset {
    type Err = ();

    /// Unrecognized names resolve to the full alphanumeric union.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "numbers" => Ok(Self::Numbers),
            "letters" => Ok(Self::Letters),
            "upper-alphanum" => Ok(Self::UpperAlphanum),
            "lower-alphanum" => Ok(Self::LowerAlphanum),
            _ => Ok(Self::All),
        }
    }
}

/// Preset expansion minus the ignore-list, order preserved.
///
/// An empty result is a fatal configuration error: generation has no
/// alphabet to sample from.
pub fn active_alphabet(preset: CharPreset, ignore: &str) -> Result<Vec<char>, CaptchaError> {
    let alphabet: Vec<char> = preset
        .chars()
        .chars()
        .filter(|c| !ignore.contains(*c))
        .collect();

    if alphabet.is_empty() {
        return Err(CaptchaError::Config(format!(
            "preset {preset:?} is empty after removing ignored characters"
        )));
    }
    Ok(alphabet)
}
