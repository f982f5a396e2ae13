//! The constellation PIN module: wires the field, camera, picking, hover and
//! selection together behind a host-facing event API.
//!
//! Hosts forward pointer/wheel/resize input, call [`ConstellationPin::tick`]
//! once per animation frame while it returns [`LoopControl::Continue`], and
//! call [`ConstellationPin::advance`] at [`ConstellationPin::next_deadline`]
//! when no frame loop is running. Outbound notifications are pushed into the
//! caller's `out` vector.

use crate::camera::OrbitController;
use crate::config::{ConfigError, HoverDuringDrag, PinConfig};
use crate::constants::CLEAR_COLOR;
use crate::field::{EntityId, PointField};
use crate::hover::{HoverHighlighter, HoverRecord, HoverStyle};
use crate::picking::{pick, pixel_to_ndc};
use crate::render::{Frame, LineVertex, Renderer, StarInstance};
use crate::resources::ResourceLedger;
use crate::selection::{ModulePhase, SelectOutcome, SelectionMachine, SelectionStyle};
use crate::signature::{ConnectorSegment, Signature};
use crate::timer::{TimerKind, Timers};
use glam::{Vec2, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub enum PinEvent {
    /// The slot display changed (`*` filled, `_` empty).
    DisplayChanged(String),
    /// A user reset was accepted; emitted ahead of the cleared display.
    ResetRequested,
    /// A full sequence was committed. Emitted exactly once per module.
    SelectionCommitted(Signature),
    /// Fade-out finished; the host may unmount the module.
    ModuleFinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[derive(Clone, Copy, Debug, Default)]
struct PointerState {
    /// Where the current press started, if the pointer is down.
    press: Option<Vec2>,
    /// Latest known pointer position over the surface.
    last: Option<Vec2>,
}

pub struct ConstellationPin {
    config: PinConfig,
    ledger: ResourceLedger,
    field: PointField,
    orbit: OrbitController,
    hover: HoverHighlighter,
    selection: SelectionMachine,
    timers: Timers,
    pointer: PointerState,
    viewport: Option<Vec2>,
    clock: f64,
    last_tick: Option<f64>,
    fade_started: Option<f64>,
    opacity: f32,
    visible: bool,
    finished: bool,
    disposed: bool,
    stars_buf: Vec<StarInstance>,
    lines_buf: Vec<LineVertex>,
}

impl ConstellationPin {
    pub fn new(config: PinConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ledger = ResourceLedger::new();
        let field = PointField::generate(&config, &mut ledger);
        Ok(Self::assemble(config, ledger, field))
    }

    /// Build a module over a hand-placed field instead of a generated one.
    pub fn with_positions(config: PinConfig, positions: &[Vec3]) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ledger = ResourceLedger::new();
        let field = PointField::from_positions(positions, &mut ledger);
        Ok(Self::assemble(config, ledger, field))
    }

    fn assemble(config: PinConfig, ledger: ResourceLedger, field: PointField) -> Self {
        let style = SelectionStyle {
            selected_color: config.palette.selected,
            selected_scale: config.selected_scale,
            connector_color: config.palette.connector,
            flash_color: config.palette.flash,
        };
        let star_count = field.len();
        Self {
            orbit: OrbitController::new(config.camera.clone()),
            selection: SelectionMachine::new(config.pin_length, style),
            config,
            ledger,
            field,
            hover: HoverHighlighter::default(),
            timers: Timers::default(),
            pointer: PointerState::default(),
            viewport: None,
            clock: 0.0,
            last_tick: None,
            fade_started: None,
            opacity: 1.0,
            visible: true,
            finished: false,
            disposed: false,
            stars_buf: Vec::with_capacity(star_count),
            lines_buf: Vec::new(),
        }
    }

    // ---------------- Lifecycle ----------------

    /// The surface exists and has a size: start accepting input.
    pub fn scene_ready(&mut self, width: f32, height: f32, out: &mut Vec<PinEvent>) {
        if self.disposed {
            return;
        }
        self.set_viewport(width, height);
        if self.selection.mark_ready() {
            out.push(PinEvent::DisplayChanged(self.pin_display()));
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.disposed || self.phase() == ModulePhase::Initializing {
            return;
        }
        self.set_viewport(width, height);
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.viewport = Some(Vec2::new(width, height));
            self.orbit.set_viewport(width, height);
        }
    }

    /// Release every star and connector and stop all timers. Idempotent.
    pub fn dispose(&mut self, renderer: &mut impl Renderer) {
        if !self.disposed {
            self.timers.cancel_all();
            self.hover.forget();
            self.selection.dispose(&mut self.ledger);
            self.field.dispose(&mut self.ledger);
            self.disposed = true;
            self.visible = false;
            log::info!("[phase] module disposed");
        }
        for id in self.ledger.drain_released() {
            renderer.release(id);
        }
    }

    // ---------------- Input ----------------

    pub fn pointer_down(&mut self, pos: Vec2) {
        if !self.is_looping() {
            return;
        }
        self.pointer.press = Some(pos);
        self.pointer.last = Some(pos);
        self.orbit.begin_drag(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if !self.is_looping() {
            return;
        }
        self.pointer.last = Some(pos);
        if self.orbit.is_dragging() {
            self.orbit.update_drag(pos);
        }
    }

    /// End of a press. Short presses are clicks resolved at `pos`; anything
    /// that travelled past the drag threshold only ends the orbit drag.
    pub fn pointer_up(&mut self, pos: Vec2, out: &mut Vec<PinEvent>) {
        let Some(press) = self.pointer.press.take() else {
            return;
        };
        self.orbit.end_drag();
        if self.disposed {
            return;
        }
        self.pointer.last = Some(pos);
        if press.distance(pos) > self.config.drag_threshold_px {
            log::debug!("[camera] drag ended");
            return;
        }
        self.click(pos, out);
    }

    /// The press was lost (released outside the surface, or cancelled by the
    /// platform): end any drag without resolving a click.
    pub fn pointer_cancel(&mut self) {
        if self.pointer.press.take().is_some() {
            log::debug!("[camera] press cancelled");
        }
        self.orbit.end_drag();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.last = None;
    }

    pub fn wheel(&mut self, delta: f32) {
        if self.is_looping() {
            self.orbit.zoom(delta);
        }
    }

    /// User-initiated reset. Ignored outside the active phase.
    pub fn reset(&mut self, out: &mut Vec<PinEvent>) -> bool {
        if !self.reset_enabled() {
            log::debug!("[select] reset ignored in {:?}", self.phase());
            return false;
        }
        out.push(PinEvent::ResetRequested);
        self.selection.reset(&mut self.field, &mut self.ledger);
        self.hover.clear(&mut self.field);
        self.timers.cancel_all();
        out.push(PinEvent::DisplayChanged(self.pin_display()));
        true
    }

    fn click(&mut self, pos: Vec2, out: &mut Vec<PinEvent>) {
        if self.phase() != ModulePhase::Active {
            return;
        }
        let Some(hit) = self.pick_at(pos) else {
            log::debug!("[select] click missed");
            return;
        };
        match self
            .selection
            .select(hit, &mut self.field, &mut self.ledger)
        {
            SelectOutcome::Rejected(reason) => {
                log::debug!("[select] star {} ignored: {:?}", hit.0, reason);
            }
            SelectOutcome::Accepted(_) => {
                self.after_select(hit, out);
            }
            SelectOutcome::Completed => {
                self.after_select(hit, out);
                let due = self.clock + self.config.flash_duration_sec;
                self.timers.schedule(TimerKind::FlashEnd, due);
            }
        }
    }

    fn after_select(&mut self, id: EntityId, out: &mut Vec<PinEvent>) {
        if self.hover.hovered() == Some(id) {
            self.hover.forget();
        }
        out.push(PinEvent::DisplayChanged(self.pin_display()));
    }

    fn pick_at(&self, pos: Vec2) -> Option<EntityId> {
        let ndc = pixel_to_ndc(pos, self.viewport?)?;
        pick(ndc, &self.orbit.camera(), &self.field, self.config.star_radius).map(|h| h.id)
    }

    // ---------------- Time ----------------

    /// Fire every one-shot timer due at `now`.
    pub fn advance(&mut self, now: f64, out: &mut Vec<PinEvent>) {
        if self.disposed {
            return;
        }
        self.clock = self.clock.max(now);
        while let Some(kind) = self.timers.pop_due(now) {
            self.fire(kind, now, out);
        }
    }

    fn fire(&mut self, kind: TimerKind, now: f64, out: &mut Vec<PinEvent>) {
        match kind {
            TimerKind::FlashEnd => {
                self.selection.end_flash(&mut self.field);
                if let Some(signature) = self.selection.export(&self.field) {
                    out.push(PinEvent::SelectionCommitted(signature));
                    self.fade_started = Some(now);
                    self.timers
                        .schedule(TimerKind::FadeEnd, now + self.config.fade_duration_sec);
                }
            }
            TimerKind::FadeEnd => {
                if self.selection.begin_fade_out() {
                    self.visible = false;
                    self.opacity = 0.0;
                    self.hover.clear(&mut self.field);
                    self.timers
                        .schedule(TimerKind::Finish, now + self.config.finish_delay_sec);
                    log::info!("[loop] module hidden, frame loop stopping");
                }
            }
            TimerKind::Finish => {
                if !self.finished && self.phase() == ModulePhase::FadingOut {
                    self.finished = true;
                    out.push(PinEvent::ModuleFinished);
                }
            }
        }
    }

    /// One animation frame: timers, idle pulse, camera easing, hover, draw.
    pub fn tick(
        &mut self,
        now: f64,
        renderer: &mut impl Renderer,
        out: &mut Vec<PinEvent>,
    ) -> LoopControl {
        if self.disposed {
            return LoopControl::Stop;
        }
        self.advance(now, out);
        if !self.is_looping() {
            return LoopControl::Stop;
        }
        let dt = self
            .last_tick
            .map(|t| (now - t).max(0.0) as f32)
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        self.pulse(now, dt);
        self.orbit.step(dt);
        self.update_hover();
        if let Some(start) = self.fade_started {
            let t = ((now - start) / self.config.fade_duration_sec) as f32;
            self.opacity = (1.0 - t).clamp(0.0, 1.0);
        }
        self.submit(now, renderer);
        LoopControl::Continue
    }

    fn pulse(&mut self, now: f64, dt: f32) {
        let tau = self.config.pulse_tau_sec;
        let alpha = if tau <= 0.0 {
            1.0
        } else {
            1.0 - (-dt / tau).exp()
        };
        let freq = self.config.pulse_freq as f64;
        let amp = self.config.pulse_amplitude;
        for e in self.field.iter_mut() {
            if e.selected {
                continue;
            }
            let wave = (now * freq + e.phase as f64).sin() as f32;
            let target = e.visual.scale * (1.0 + wave * amp);
            e.render_scale += (target - e.render_scale) * alpha;
        }
    }

    fn update_hover(&mut self) {
        if self.phase() != ModulePhase::Active {
            return;
        }
        if self.orbit.is_dragging() && self.config.hover_during_drag == HoverDuringDrag::Suspend {
            return;
        }
        let hit = self.pointer.last.and_then(|p| self.pick_at(p));
        let style = HoverStyle {
            color: self.config.palette.hover,
            scale: self.config.hover_scale,
        };
        self.hover.update(hit, &mut self.field, style);
    }

    fn submit(&mut self, now: f64, renderer: &mut impl Renderer) {
        for id in self.ledger.drain_released() {
            renderer.release(id);
        }
        let module_alpha = self.opacity;
        let star_radius = self.config.star_radius;
        self.stars_buf.clear();
        self.stars_buf.extend(self.field.iter().map(|e| {
            let [r, g, b] = e.visual.color;
            StarInstance {
                pos: e.position().to_array(),
                radius: star_radius * e.render_scale,
                color: [r, g, b, e.visual.opacity * module_alpha],
            }
        }));
        self.lines_buf.clear();
        for seg in self.selection.connectors() {
            let [r, g, b] = seg.color;
            let color = [r, g, b, module_alpha];
            for p in [seg.from, seg.to] {
                self.lines_buf.push(LineVertex {
                    pos: p.to_array(),
                    _pad: 0.0,
                    color,
                });
            }
        }
        let camera = self.orbit.camera();
        renderer.draw(&Frame {
            camera: &camera,
            stars: &self.stars_buf,
            lines: &self.lines_buf,
            clear_color: CLEAR_COLOR,
            time_sec: now,
        });
    }

    // ---------------- Queries ----------------

    #[inline]
    pub fn phase(&self) -> ModulePhase {
        self.selection.phase()
    }

    /// The frame loop should run in these phases only.
    #[inline]
    pub fn is_looping(&self) -> bool {
        !self.disposed
            && matches!(
                self.phase(),
                ModulePhase::Active | ModulePhase::SuccessFlash
            )
    }

    #[inline]
    pub fn reset_enabled(&self) -> bool {
        !self.disposed && self.phase() == ModulePhase::Active
    }

    pub fn pin_display(&self) -> String {
        self.selection.pin_display()
    }

    pub fn sequence(&self) -> &[EntityId] {
        self.selection.sequence()
    }

    pub fn selection(&self) -> &SelectionMachine {
        &self.selection
    }

    pub fn connectors(&self) -> impl Iterator<Item = &ConnectorSegment> {
        self.selection.connectors()
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn hover_record(&self) -> Option<&HoverRecord> {
        self.hover.record()
    }

    pub fn next_deadline(&self) -> Option<f64> {
        if self.disposed {
            None
        } else {
            self.timers.next_deadline()
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> &PinConfig {
        &self.config
    }

    /// Render handles still owned by the module.
    pub fn live_resources(&self) -> usize {
        self.ledger.live_count()
    }
}
