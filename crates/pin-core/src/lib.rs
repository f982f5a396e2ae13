//! Constellation PIN core: pick an ordered sequence of stars in a navigable
//! 3D field and export the result as a standalone signature.
//!
//! Nothing here touches a window, canvas or GPU; hosts inject a [`Renderer`]
//! and forward input events.

pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod hover;
pub mod module;
pub mod picking;
pub mod render;
pub mod resources;
pub mod selection;
pub mod signature;
pub mod timer;

pub use camera::{Camera, CameraPose, OrbitController};
pub use config::{CameraConfig, ConfigError, FieldDistribution, HoverDuringDrag, Palette, PinConfig};
pub use constants::*;
pub use field::{EntityId, PointEntity, PointField, Visual};
pub use hover::{HoverHighlighter, HoverRecord};
pub use module::{ConstellationPin, LoopControl, PinEvent};
pub use picking::{pick, pixel_to_ndc, ray_from_ndc, ray_sphere, PickHit, Ray};
pub use render::{Frame, LineVertex, Renderer, StarInstance};
pub use resources::{ResourceId, ResourceKind, ResourceLedger};
pub use selection::{ModulePhase, Rejection, SelectOutcome, SelectionMachine};
pub use signature::{ConnectorSegment, Signature, SignatureStar};
pub use timer::{TimerKind, Timers};
