//! Native window host for the constellation PIN module (winit + wgpu).

use glam::Vec2;
use pin_core::{ConstellationPin, LoopControl, PinConfig, PinEvent};
use std::time::{Duration, Instant};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod gpu;

use gpu::GpuState;

/// Pixels per wheel "line" for devices that report line deltas.
const WHEEL_LINE_PX: f32 = 40.0;

struct App<'w> {
    gpu: GpuState<'w>,
    pin: ConstellationPin,
    epoch: Instant,
    cursor: Option<Vec2>,
    events: Vec<PinEvent>,
}

impl<'w> App<'w> {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::Resized(size) => {
                self.gpu.resize(size);
                self.pin.resize(size.width as f32, size.height as f32);
            }
            WindowEvent::CloseRequested => {
                self.pin.dispose(&mut self.gpu);
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                self.cursor = Some(pos);
                self.pin.pointer_move(pos);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.pin.pointer_leave();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match (state, self.cursor) {
                    (ElementState::Pressed, Some(pos)) => self.pin.pointer_down(pos),
                    (ElementState::Released, Some(pos)) => {
                        self.pin.pointer_up(pos, &mut self.events)
                    }
                    // Released outside the window: no position to resolve a click at.
                    (ElementState::Released, None) => self.pin.pointer_cancel(),
                    (ElementState::Pressed, None) => {}
                }
            }
            WindowEvent::Focused(false) => self.pin.pointer_cancel(),
            WindowEvent::MouseWheel { delta, .. } => {
                // Positive zooms out, matching browser deltaY.
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                self.pin.wheel(px);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.pin.reset(&mut self.events);
            }
            WindowEvent::RedrawRequested => {
                let now = self.now();
                if self.pin.tick(now, &mut self.gpu, &mut self.events) == LoopControl::Stop {
                    log::info!("[loop] stopped");
                }
            }
            _ => {}
        }
        self.drain_events(elwt);
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.gpu.fatal {
            elwt.exit();
            return;
        }
        if self.pin.is_looping() {
            self.gpu.window.request_redraw();
            elwt.set_control_flow(ControlFlow::Poll);
            return;
        }
        let now = self.now();
        self.pin.advance(now, &mut self.events);
        self.drain_events(elwt);
        let flow = match self.pin.next_deadline() {
            Some(due) => ControlFlow::WaitUntil(self.epoch + Duration::from_secs_f64(due.max(0.0))),
            None => ControlFlow::Wait,
        };
        elwt.set_control_flow(flow);
    }

    fn drain_events(&mut self, elwt: &EventLoopWindowTarget<()>) {
        for event in std::mem::take(&mut self.events) {
            match event {
                PinEvent::DisplayChanged(display) => {
                    log::info!("[pin] {}", display);
                    self.gpu
                        .window
                        .set_title(&format!("Constellation PIN  {}", display));
                }
                PinEvent::ResetRequested => log::info!("[pin] reset requested"),
                PinEvent::SelectionCommitted(signature) => {
                    let ids: Vec<u32> = signature.pin().iter().map(|id| id.0).collect();
                    log::info!(
                        "[pin] committed {:?} centroid={:?} radius={:.3}",
                        ids,
                        signature.centroid(),
                        signature.bounding_radius()
                    );
                }
                PinEvent::ModuleFinished => {
                    self.pin.dispose(&mut self.gpu);
                    log::info!(
                        "[pin] finished, {} render resources released",
                        self.gpu.released()
                    );
                    elwt.exit();
                }
            }
        }
    }
}

/// `PIN_SEED` and `PIN_STARS` override the default field.
fn config_from_env() -> PinConfig {
    let mut config = PinConfig::default();
    if let Some(seed) = std::env::var("PIN_SEED").ok().and_then(|s| s.parse().ok()) {
        config.seed = seed;
    }
    if let Some(n) = std::env::var("PIN_STARS").ok().and_then(|s| s.parse().ok()) {
        config.star_count = n;
    }
    config
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let pin = ConstellationPin::new(config_from_env())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Constellation PIN")
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let size = window.inner_size();
    let mut app = App {
        gpu,
        pin,
        epoch: Instant::now(),
        cursor: None,
        events: Vec::new(),
    };
    app.pin
        .scene_ready(size.width as f32, size.height as f32, &mut app.events);
    log::info!(
        "[pin] field of {} stars (seed {})",
        app.pin.field().len(),
        app.pin.config().seed
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => app.window_event(event, elwt),
        Event::AboutToWait => app.about_to_wait(elwt),
        _ => {}
    })?;
    Ok(())
}
