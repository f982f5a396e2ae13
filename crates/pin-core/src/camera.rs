//! Orbit camera: pointer drags rotate around the field centre, the wheel
//! moves in and out. Input mutates a target pose; the rendered pose eases
//! toward it once per tick.

use crate::config::CameraConfig;
use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR, LOOK_AT};
use crate::field::spherical_to_cartesian;
use glam::{Mat4, Vec2, Vec3};

/// Spherical camera placement around the look-at origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub azimuth: f32,
    /// Angle from +Y; kept away from the poles.
    pub polar: f32,
    pub radius: f32,
}

impl CameraPose {
    #[inline]
    pub fn eye(&self) -> Vec3 {
        LOOK_AT + spherical_to_cartesian(self.radius, self.polar, self.azimuth)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    limits: CameraConfig,
    target: CameraPose,
    current: CameraPose,
    dragging: bool,
    anchor: Vec2,
    aspect: f32,
}

impl OrbitController {
    pub fn new(limits: CameraConfig) -> Self {
        let mut pose = CameraPose {
            azimuth: limits.initial_azimuth,
            polar: limits.initial_polar,
            radius: limits.initial_radius,
        };
        clamp_pose(&mut pose, &limits);
        Self {
            limits,
            target: pose,
            current: pose,
            dragging: false,
            anchor: Vec2::ZERO,
            aspect: 1.0,
        }
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.anchor = pointer;
    }

    pub fn update_drag(&mut self, pointer: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = pointer - self.anchor;
        self.target.azimuth -= delta.x * self.limits.rotate_sensitivity;
        self.target.polar -= delta.y * self.limits.rotate_sensitivity;
        clamp_pose(&mut self.target, &self.limits);
        self.anchor = pointer;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        if !wheel_delta.is_finite() {
            return;
        }
        self.target.radius += wheel_delta * self.limits.zoom_sensitivity;
        clamp_pose(&mut self.target, &self.limits);
    }

    /// The pose being rendered (and picked against).
    #[inline]
    pub fn current_pose(&self) -> CameraPose {
        self.current
    }

    /// The pose input is steering toward.
    #[inline]
    pub fn target_pose(&self) -> CameraPose {
        self.target
    }

    /// Advance smoothing by `dt_sec`.
    pub fn step(&mut self, dt_sec: f32) {
        let tau = self.limits.damping_tau_sec;
        let alpha = if tau <= 0.0 {
            1.0
        } else {
            1.0 - (-dt_sec.max(0.0) / tau).exp()
        };
        self.current.azimuth += (self.target.azimuth - self.current.azimuth) * alpha;
        self.current.polar += (self.target.polar - self.current.polar) * alpha;
        self.current.radius += (self.target.radius - self.current.radius) * alpha;
        clamp_pose(&mut self.current, &self.limits);
    }

    /// Jump the rendered pose to the target.
    pub fn settle(&mut self) {
        self.current = self.target;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.current.eye(),
            target: LOOK_AT,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: self.limits.fovy_radians,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

fn clamp_pose(pose: &mut CameraPose, limits: &CameraConfig) {
    let eps = limits.polar_epsilon;
    pose.polar = pose.polar.clamp(eps, std::f32::consts::PI - eps);
    pose.radius = pose.radius.clamp(limits.min_radius, limits.max_radius);
}
