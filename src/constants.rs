// DOM hooks and presentation constants for the web frontend.

// Element ids the host page provides
pub const CANVAS_ID: &str = "pin-canvas";
pub const MODULE_ID: &str = "pin-module"; // container faded/hidden with the module
pub const SLOTS_ID: &str = "pin-slots"; // text display of filled/empty slots
pub const RESET_ID: &str = "pin-reset";

// Optional callbacks looked up on `window`
pub const ON_COMMITTED: &str = "onConstellationCommitted";
pub const ON_RESET: &str = "onConstellationReset";
pub const ON_FINISHED: &str = "onConstellationFinished";

// Wheel normalization (DOM_DELTA_LINE / DOM_DELTA_PAGE to pixels)
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 400.0;

// Star drawing
pub const MIN_STAR_PX: f64 = 0.75; // never draw a star smaller than this
pub const GLOW_RADIUS_FACTOR: f64 = 2.6; // halo radius relative to the core
pub const CONNECTOR_WIDTH_PX: f64 = 1.5;
