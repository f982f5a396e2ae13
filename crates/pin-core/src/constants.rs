use glam::Vec3;

// Shared visual/interaction tuning constants used by both web and native frontends.

// Scene layout
pub const LOOK_AT: Vec3 = Vec3::ZERO; // the orbit camera always looks at the field centre
pub const DEFAULT_FIELD_RADIUS: f32 = 5.0;
pub const DEFAULT_STAR_COUNT: usize = 220;
pub const DEFAULT_SEED: u64 = 42;

// PIN
pub const PIN_LENGTH: usize = 6;
pub const PIN_FILLED: char = '*';
pub const PIN_EMPTY: char = '_';

// Star sizing
pub const STAR_RADIUS: f32 = 0.09; // geometric radius at scale 1.0, also the pick radius
pub const BASE_SCALE_JITTER: f32 = 0.35; // base scale in [1 - j/2, 1 + j/2]
pub const BASE_OPACITY_MIN: f32 = 0.55;
pub const HOVER_SCALE: f32 = 1.6;
pub const SELECTED_SCALE: f32 = 1.8;

// Idle pulsation
pub const PULSE_FREQ: f32 = 1.7; // radians per second
pub const PULSE_AMPLITUDE: f32 = 0.18;
pub const PULSE_TAU_SEC: f32 = 0.12; // smoothing time constant toward the pulse target

// Camera
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_INITIAL_RADIUS: f32 = 9.0;
pub const CAMERA_MIN_RADIUS: f32 = 3.0;
pub const CAMERA_MAX_RADIUS: f32 = 14.0;
pub const POLAR_EPSILON: f32 = 0.05; // keeps polar inside (eps, PI - eps)
pub const ROTATE_SENSITIVITY: f32 = 0.005; // radians per pixel
pub const ZOOM_SENSITIVITY: f32 = 0.01; // radius units per wheel unit
pub const CAMERA_DAMPING_TAU_SEC: f32 = 0.08;

// Interaction
pub const DRAG_THRESHOLD_PX: f32 = 5.0; // net movement beyond this turns a press into a drag

// Timings (seconds)
pub const FLASH_DURATION_SEC: f64 = 0.6;
pub const FADE_DURATION_SEC: f64 = 1.2;
pub const FINISH_DELAY_SEC: f64 = 0.3;

// Background
pub const CLEAR_COLOR: [f32; 4] = [0.01, 0.015, 0.035, 1.0];
