// Host-side tests for web constants and page settings parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod settings {
    include!("../src/settings.rs");
}

use constants::*;
use pin_core::{FieldDistribution, HoverDuringDrag, Palette, PinConfig};
use settings::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn drawing_constants_are_sane() {
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(WHEEL_PAGE_PX > WHEEL_LINE_PX);
    assert!(MIN_STAR_PX > 0.0);
    assert!(GLOW_RADIUS_FACTOR > 1.0);
    assert!(CONNECTOR_WIDTH_PX > 0.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, MODULE_ID, SLOTS_ID, RESET_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn parses_distribution_aliases() {
    assert_eq!(parse_distribution("random"), Some(FieldDistribution::RandomVolume));
    assert_eq!(
        parse_distribution(" Fibonacci-Sphere "),
        Some(FieldDistribution::FibonacciSphere)
    );
    assert_eq!(parse_distribution("spiral"), None);
}

#[test]
fn parses_hover_policy() {
    assert_eq!(parse_hover_policy("track"), Some(HoverDuringDrag::Track));
    assert_eq!(parse_hover_policy("SUSPEND"), Some(HoverDuringDrag::Suspend));
    assert_eq!(parse_hover_policy("maybe"), None);
}

#[test]
fn apply_setting_overrides_and_rejects() {
    let mut config = PinConfig::default();
    assert!(apply_setting(&mut config, "data-star-count", "64"));
    assert!(apply_setting(&mut config, "data-seed", "7"));
    assert!(apply_setting(&mut config, "data-palette", "ember"));
    assert_eq!(config.star_count, 64);
    assert_eq!(config.seed, 7);
    assert_eq!(config.palette, Palette::ember());

    assert!(!apply_setting(&mut config, "data-star-count", "0"));
    assert!(!apply_setting(&mut config, "data-star-count", "many"));
    assert!(!apply_setting(&mut config, "data-unknown", "1"));
    assert_eq!(config.star_count, 64);
    assert!(config.validate().is_ok());
}

#[test]
fn every_setting_key_is_handled() {
    let samples = ["10", "3", "random", "aurora", "track"];
    for (key, value) in SETTING_KEYS.iter().zip(samples) {
        let mut config = PinConfig::default();
        assert!(apply_setting(&mut config, key, value), "{key}");
    }
}
