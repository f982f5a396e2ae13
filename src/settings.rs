use pin_core::{FieldDistribution, HoverDuringDrag, Palette, PinConfig};

// Page-level overrides read from `data-*` attributes on the canvas.
// Unknown or malformed values keep the default.

pub fn parse_distribution(value: &str) -> Option<FieldDistribution> {
    match value.trim().to_ascii_lowercase().as_str() {
        "random" | "random-volume" | "volume" => Some(FieldDistribution::RandomVolume),
        "fibonacci" | "fibonacci-sphere" | "sphere" => Some(FieldDistribution::FibonacciSphere),
        _ => None,
    }
}

pub fn parse_palette(value: &str) -> Option<Palette> {
    match value.trim().to_ascii_lowercase().as_str() {
        "aurora" => Some(Palette::aurora()),
        "ember" => Some(Palette::ember()),
        _ => None,
    }
}

pub fn parse_hover_policy(value: &str) -> Option<HoverDuringDrag> {
    match value.trim().to_ascii_lowercase().as_str() {
        "suspend" | "off" => Some(HoverDuringDrag::Suspend),
        "track" | "on" => Some(HoverDuringDrag::Track),
        _ => None,
    }
}

/// Apply one `data-*` attribute to `config`. Returns false if it was ignored.
pub fn apply_setting(config: &mut PinConfig, key: &str, value: &str) -> bool {
    match key {
        "data-star-count" => match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => {
                config.star_count = n;
                true
            }
            _ => false,
        },
        "data-seed" => match value.trim().parse::<u64>() {
            Ok(seed) => {
                config.seed = seed;
                true
            }
            Err(_) => false,
        },
        "data-distribution" => parse_distribution(value)
            .map(|d| config.distribution = d)
            .is_some(),
        "data-palette" => parse_palette(value).map(|p| config.palette = p).is_some(),
        "data-hover-during-drag" => parse_hover_policy(value)
            .map(|p| config.hover_during_drag = p)
            .is_some(),
        _ => false,
    }
}

pub const SETTING_KEYS: [&str; 5] = [
    "data-star-count",
    "data-seed",
    "data-distribution",
    "data-palette",
    "data-hover-during-drag",
];
