//! Uniform random helpers shared across the engine.

use rand::Rng;

/// Uniform integer in `[min, max)`. Callers must not pass `max <= min`.
pub fn random_int(min: i32, max: i32) -> i32 {
    rand::rng().random_range(min..max)
}

/// Uniform RGB color literal, each channel in `[0, 255)`.
pub fn random_color() -> String {
    let mut rng = rand::rng();
    format!(
        "rgb({},{},{})",
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255)
    )
}

/// Uniform alphanumeric token of `len` characters.
pub fn random_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..36u8);
            if idx < 10 {
                (b'0' + idx) as char
            } else {
                (b'A' + idx - 10) as char
            }
        })
        .collect()
}
