//! Tunable parameters for a constellation PIN module.
//!
//! The two experimental variants of the selector differed only in star
//! count, field distribution and palette; all of those are fields here so a
//! host picks a variant by configuration instead of by code.

use crate::constants::*;
use thiserror::Error;

/// How star positions are laid out inside the field sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldDistribution {
    /// Radius, inclination and azimuth all drawn at random.
    RandomVolume,
    /// Evenly spaced golden-angle spiral on the sphere surface.
    #[default]
    FibonacciSphere,
}

/// Whether hover picking keeps running while the pointer is pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverDuringDrag {
    /// A press suspends hover; the highlight is left untouched until release.
    #[default]
    Suspend,
    /// Hover keeps tracking the pointer during a drag.
    Track,
}

/// Colour choices for every visual state. Colours are linear RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Hue band (degrees) for ordinary stars.
    pub hue_range: (f32, f32),
    pub saturation_range: (f32, f32),
    pub lightness_range: (f32, f32),
    /// Probability that a star gets a warm hue instead.
    pub warm_probability: f32,
    pub warm_hue_range: (f32, f32),
    pub hover: [f32; 3],
    pub selected: [f32; 3],
    pub flash: [f32; 3],
    pub connector: [f32; 3],
}

impl Palette {
    /// Blue/cyan field with gold selections.
    pub fn aurora() -> Self {
        Self {
            hue_range: (185.0, 230.0),
            saturation_range: (0.55, 0.9),
            lightness_range: (0.6, 0.85),
            warm_probability: 0.06,
            warm_hue_range: (25.0, 50.0),
            hover: [0.55, 0.95, 1.0],
            selected: [1.0, 0.82, 0.3],
            flash: [1.0, 1.0, 1.0],
            connector: [0.95, 0.75, 0.35],
        }
    }

    /// Cooler field with magenta selections.
    pub fn ember() -> Self {
        Self {
            hue_range: (200.0, 250.0),
            saturation_range: (0.4, 0.75),
            lightness_range: (0.55, 0.8),
            warm_probability: 0.12,
            warm_hue_range: (10.0, 35.0),
            hover: [1.0, 1.0, 1.0],
            selected: [1.0, 0.35, 0.75],
            flash: [0.4, 1.0, 0.6],
            connector: [0.85, 0.4, 0.9],
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::aurora()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub initial_azimuth: f32,
    pub initial_polar: f32,
    pub initial_radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub polar_epsilon: f32,
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
    /// Time constant of the exponential approach to the target pose; 0 disables smoothing.
    pub damping_tau_sec: f32,
    pub fovy_radians: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_azimuth: 0.0,
            initial_polar: std::f32::consts::FRAC_PI_2,
            initial_radius: CAMERA_INITIAL_RADIUS,
            min_radius: CAMERA_MIN_RADIUS,
            max_radius: CAMERA_MAX_RADIUS,
            polar_epsilon: POLAR_EPSILON,
            rotate_sensitivity: ROTATE_SENSITIVITY,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            damping_tau_sec: CAMERA_DAMPING_TAU_SEC,
            fovy_radians: CAMERA_FOVY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinConfig {
    pub star_count: usize,
    pub field_radius: f32,
    pub seed: u64,
    pub distribution: FieldDistribution,
    pub pin_length: usize,
    pub palette: Palette,
    pub camera: CameraConfig,
    pub star_radius: f32,
    pub drag_threshold_px: f32,
    pub hover_during_drag: HoverDuringDrag,
    pub hover_scale: f32,
    pub selected_scale: f32,
    pub pulse_freq: f32,
    pub pulse_amplitude: f32,
    pub pulse_tau_sec: f32,
    pub flash_duration_sec: f64,
    pub fade_duration_sec: f64,
    pub finish_delay_sec: f64,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            field_radius: DEFAULT_FIELD_RADIUS,
            seed: DEFAULT_SEED,
            distribution: FieldDistribution::default(),
            pin_length: PIN_LENGTH,
            palette: Palette::default(),
            camera: CameraConfig::default(),
            star_radius: STAR_RADIUS,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            hover_during_drag: HoverDuringDrag::default(),
            hover_scale: HOVER_SCALE,
            selected_scale: SELECTED_SCALE,
            pulse_freq: PULSE_FREQ,
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_tau_sec: PULSE_TAU_SEC,
            flash_duration_sec: FLASH_DURATION_SEC,
            fade_duration_sec: FADE_DURATION_SEC,
            finish_delay_sec: FINISH_DELAY_SEC,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("star count must be at least 1")]
    NoStars,
    #[error("field radius must be positive, got {0}")]
    FieldRadius(f32),
    #[error("PIN length must be at least 1")]
    EmptyPin,
    #[error("radius band [{min}, {max}] is empty or non-positive")]
    RadiusBand { min: f32, max: f32 },
    #[error("polar epsilon {0} must lie in (0, PI/2)")]
    PolarEpsilon(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

impl PinConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 {
            return Err(ConfigError::NoStars);
        }
        if !(self.field_radius > 0.0) {
            return Err(ConfigError::FieldRadius(self.field_radius));
        }
        if self.pin_length == 0 {
            return Err(ConfigError::EmptyPin);
        }
        let cam = &self.camera;
        if !(cam.min_radius > 0.0 && cam.min_radius <= cam.max_radius) {
            return Err(ConfigError::RadiusBand {
                min: cam.min_radius,
                max: cam.max_radius,
            });
        }
        if !(cam.polar_epsilon > 0.0 && cam.polar_epsilon < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::PolarEpsilon(cam.polar_epsilon));
        }
        positive("rotate_sensitivity", cam.rotate_sensitivity as f64)?;
        positive("zoom_sensitivity", cam.zoom_sensitivity as f64)?;
        positive("fovy_radians", cam.fovy_radians as f64)?;
        non_negative("damping_tau_sec", cam.damping_tau_sec as f64)?;
        positive("star_radius", self.star_radius as f64)?;
        non_negative("drag_threshold_px", self.drag_threshold_px as f64)?;
        positive("hover_scale", self.hover_scale as f64)?;
        positive("selected_scale", self.selected_scale as f64)?;
        non_negative("pulse_amplitude", self.pulse_amplitude as f64)?;
        non_negative("pulse_tau_sec", self.pulse_tau_sec as f64)?;
        positive("flash_duration_sec", self.flash_duration_sec)?;
        positive("fade_duration_sec", self.fade_duration_sec)?;
        non_negative("finish_delay_sec", self.finish_delay_sec)?;
        Ok(())
    }
}
