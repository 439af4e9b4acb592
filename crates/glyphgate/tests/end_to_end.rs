//! End-to-end scenarios: generate, render, store, verify.

mod common;

use common::BoxFont;
use glyphgate::{CaptchaGenerator, CaptchaOptions, CharPreset, MemoryStore};

fn glyph_path_count(svg: &str) -> usize {
    svg.matches("<path ").count() - noise_path_count(svg)
}

fn noise_path_count(svg: &str) -> usize {
    svg.matches(r#"fill="none""#).count()
}

#[test]
fn six_digit_challenge_renders_six_paths_and_no_noise() {
    let mut generator = CaptchaGenerator::new(CaptchaOptions {
        size: 6,
        preset: CharPreset::Numbers,
        noise: 0,
        ..CaptchaOptions::default()
    })
    .unwrap();

    let challenge = generator.generate_with_fonts(&[BoxFont::default()]).unwrap();

    assert_eq!(challenge.text.len(), 6);
    assert!(challenge.text.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(glyph_path_count(&challenge.svg), 6);
    assert_eq!(noise_path_count(&challenge.svg), 0);
    assert!(challenge.svg.contains("<rect"));
}

#[test]
fn noise_paths_match_configured_count() {
    let mut generator = CaptchaGenerator::new(CaptchaOptions {
        size: 4,
        noise: 5,
        ..CaptchaOptions::default()
    })
    .unwrap();

    let challenge = generator.generate_with_fonts(&[BoxFont::default()]).unwrap();
    assert_eq!(noise_path_count(&challenge.svg), 5);
    assert_eq!(glyph_path_count(&challenge.svg), 4);
}

#[test]
fn ignored_digits_never_appear_across_generations() {
    let mut generator = CaptchaGenerator::new(CaptchaOptions {
        size: 10,
        preset: CharPreset::All,
        ignore_chars: "0123456789".to_string(),
        ..CaptchaOptions::default()
    })
    .unwrap();

    let fonts = [BoxFont::default()];
    for _ in 0..200 {
        let challenge = generator.generate_with_fonts(&fonts).unwrap();
        assert!(challenge.text.chars().all(|c| !c.is_ascii_digit()));
    }
}

#[test]
fn messy_mode_rotates_every_glyph() {
    let mut generator = CaptchaGenerator::new(CaptchaOptions {
        size: 5,
        noise: 0,
        messy: true,
        ..CaptchaOptions::default()
    })
    .unwrap();

    let challenge = generator.generate_with_fonts(&[BoxFont::default()]).unwrap();
    assert_eq!(challenge.svg.matches("rotate(").count(), 5);
}

#[test]
fn straight_mode_has_no_rotations() {
    let mut generator = CaptchaGenerator::new(CaptchaOptions {
        size: 5,
        noise: 0,
        messy: false,
        ..CaptchaOptions::default()
    })
    .unwrap();

    let challenge = generator.generate_with_fonts(&[BoxFont::default()]).unwrap();
    assert_eq!(challenge.svg.matches("rotate(").count(), 0);
}

#[tokio::test]
async fn generate_store_verify_roundtrip() {
    let mut generator = CaptchaGenerator::new(CaptchaOptions::default()).unwrap();
    let challenge = generator.generate_with_fonts(&[BoxFont::default()]).unwrap();

    let store = MemoryStore::new();
    generator.store_captcha(60, &store).await.unwrap();

    assert!(
        generator
            .verify_captcha(&challenge.text, &challenge.key, &store)
            .await
            .unwrap()
    );
    assert!(
        !generator
            .verify_captcha("WRONG", &challenge.key, &store)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn store_before_generate_fails() {
    let generator = CaptchaGenerator::new(CaptchaOptions::default()).unwrap();
    let store = MemoryStore::new();
    assert!(generator.store_captcha(60, &store).await.is_err());
}

#[test]
fn multiple_fonts_in_messy_mode() {
    let fonts = [
        BoxFont {
            name: "narrow",
            advance: 450,
        },
        BoxFont {
            name: "wide",
            advance: 800,
        },
    ];
    let mut generator = CaptchaGenerator::new(CaptchaOptions {
        size: 6,
        noise: 0,
        messy: true,
        ..CaptchaOptions::default()
    })
    .unwrap();

    let challenge = generator.generate_with_fonts(&fonts).unwrap();
    assert_eq!(glyph_path_count(&challenge.svg), 6);
}
