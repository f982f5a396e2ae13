use crate::callbacks;
use crate::render::CanvasRenderer;
use instant::Instant;
use pin_core::{ConstellationPin, LoopControl, PinEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one frame (or one timer wake) needs.
pub struct FrameContext {
    pub pin: ConstellationPin,
    pub renderer: CanvasRenderer,
    pub document: web::Document,
    pub epoch: Instant,
    raf_id: Option<i32>,
    wake_id: Option<i32>,
}

pub type SharedFrame = Rc<RefCell<FrameContext>>;

impl FrameContext {
    pub fn new(pin: ConstellationPin, renderer: CanvasRenderer, document: web::Document) -> Self {
        Self {
            pin,
            renderer,
            document,
            epoch: Instant::now(),
            raf_id: None,
            wake_id: None,
        }
    }

    /// Seconds since the page booted the module; the clock the core runs on.
    #[inline]
    pub fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// The fade is already carried by the frame's colours; the container is
    /// only hidden once the module finishes.
    pub fn frame(&mut self, out: &mut Vec<PinEvent>) -> LoopControl {
        let now = self.now();
        self.pin.tick(now, &mut self.renderer, out)
    }
}

// ---------------- requestAnimationFrame loop ----------------

pub fn start_loop(ctx: SharedFrame) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut events = Vec::new();
        let control = {
            let mut c = ctx_tick.borrow_mut();
            c.raf_id = None;
            c.frame(&mut events)
        };
        callbacks::dispatch(&ctx_tick, events);
        match control {
            LoopControl::Continue => {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    request_frame(&ctx_tick, cb);
                }
            }
            LoopControl::Stop => {
                // Remaining deadlines run on timeouts.
                log::info!("[loop] stopped");
                schedule_wake(&ctx_tick);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(&ctx, cb);
    }
}

fn request_frame(ctx: &SharedFrame, cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            ctx.borrow_mut().raf_id = Some(id);
        }
    }
}

/// Cancel any pending animation frame and timer wake. Safe to call twice.
pub fn cancel(ctx: &SharedFrame) {
    let (raf, wake) = {
        let mut c = ctx.borrow_mut();
        (c.raf_id.take(), c.wake_id.take())
    };
    if let Some(w) = web::window() {
        if let Some(id) = raf {
            _ = w.cancel_animation_frame(id);
        }
        if let Some(id) = wake {
            w.clear_timeout_with_handle(id);
        }
    }
}

// ---------------- Deadline wake-ups outside the frame loop ----------------

/// Arm a one-shot timeout for the core's next deadline, if it has one and no
/// frame loop is going to service it.
pub fn schedule_wake(ctx: &SharedFrame) {
    let (deadline, now) = {
        let c = ctx.borrow();
        if c.pin.is_looping() || c.wake_id.is_some() {
            return;
        }
        match c.pin.next_deadline() {
            Some(d) => (d, c.now()),
            None => return,
        }
    };
    let delay_ms = ((deadline - now).max(0.0) * 1000.0).ceil() as i32;
    let ctx_wake = ctx.clone();
    let callback = Closure::once_into_js(move || {
        let mut events = Vec::new();
        {
            let mut c = ctx_wake.borrow_mut();
            c.wake_id = None;
            let now = c.now();
            c.pin.advance(now, &mut events);
        }
        callbacks::dispatch(&ctx_wake, events);
        schedule_wake(&ctx_wake);
    });
    if let Some(w) = web::window() {
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        ) {
            Ok(id) => ctx.borrow_mut().wake_id = Some(id),
            Err(e) => log::warn!("[loop] setTimeout failed: {:?}", e),
        }
    }
}
