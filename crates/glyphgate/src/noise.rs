//! Wavy distortion strokes drawn beneath the challenge text.

use std::fmt::Write as _;

use crate::config::CaptchaOptions;
use crate::random::random_int;
use crate::svg::round2;

/// Produce `options.noise` stroke paths, each spanning the canvas left to
/// right as a piecewise quadratic curve. Purely decorative and
/// non-deterministic.
pub fn generate_noise(options: &CaptchaOptions) -> Vec<String> {
    (0..options.noise)
        .map(|_| noise_path(options.width, options.height))
        .collect()
}

fn noise_path(width: f32, height: f32) -> String {
    let start_y = random_int(0, height as i32);
    let segments = random_int(2, 5);
    let step = width / segments as f32;

    let mut d = format!("M0 {start_y}");
    for i in 1..=segments {
        let cx = round2(step * (i as f32 - 0.5));
        let cy = random_int(0, height as i32);
        let x = round2(step * i as f32);
        let y = random_int(0, height as i32);
        let _ = write!(d, "Q{cx} {cy} {x} {y}");
    }
    d
}
