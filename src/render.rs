use crate::constants::{CONNECTOR_WIDTH_PX, GLOW_RADIUS_FACTOR, MIN_STAR_PX};
use crate::projection::{project_to_px, radius_px, Projected};
use glam::{Vec2, Vec3};
use pin_core::{Frame, Renderer, ResourceId};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backend for the core's [`Renderer`] seam. Stars are drawn as
/// soft discs sorted far to near; connectors go underneath.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    order: Vec<(usize, Projected)>,
    released: usize,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("context is not CanvasRenderingContext2d"))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            order: Vec::new(),
            released: 0,
        })
    }

    #[inline]
    pub fn released(&self) -> usize {
        self.released
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn disc(&self, center: Vec2, radius: f64) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius, 0.0, TAU);
        self.ctx.fill();
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        let viewport = self.viewport();
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(&css_rgba(frame.clear_color));
        ctx.fill_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);

        let view_proj = frame.camera.view_projection();

        ctx.set_line_width(CONNECTOR_WIDTH_PX);
        for pair in frame.lines.chunks_exact(2) {
            let a = project_to_px(view_proj, Vec3::from(pair[0].pos), viewport);
            let b = project_to_px(view_proj, Vec3::from(pair[1].pos), viewport);
            let (Some(a), Some(b)) = (a, b) else {
                continue;
            };
            ctx.set_stroke_style_str(&css_rgba(pair[0].color));
            ctx.begin_path();
            ctx.move_to(a.px.x as f64, a.px.y as f64);
            ctx.line_to(b.px.x as f64, b.px.y as f64);
            ctx.stroke();
        }

        self.order.clear();
        for (i, star) in frame.stars.iter().enumerate() {
            if star.color[3] <= 0.0 {
                continue;
            }
            if let Some(p) = project_to_px(view_proj, Vec3::from(star.pos), viewport) {
                self.order.push((i, p));
            }
        }
        self.order.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));

        for &(i, p) in &self.order {
            let star = &frame.stars[i];
            let r = (radius_px(star.radius, p.depth, frame.camera.fovy_radians, viewport.y) as f64)
                .max(MIN_STAR_PX);
            let alpha = star.color[3].clamp(0.0, 1.0) as f64;
            self.ctx
                .set_fill_style_str(&css_rgba([star.color[0], star.color[1], star.color[2], 1.0]));
            self.ctx.set_global_alpha(alpha * 0.22);
            self.disc(p.px, r * GLOW_RADIUS_FACTOR);
            self.ctx.set_global_alpha(alpha);
            self.disc(p.px, r);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn release(&mut self, resource: ResourceId) {
        // Nothing is cached per star on a 2D canvas; keep the count for diagnostics.
        self.released += 1;
        log::debug!("[render] released {:?}", resource);
    }
}

fn css_rgba(c: [f32; 4]) -> String {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{:.3})",
        ch(c[0]),
        ch(c[1]),
        ch(c[2]),
        c[3].clamp(0.0, 1.0)
    )
}
