use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Client (CSS px) position to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return local;
    }
    local / rect_size * canvas_size
}

/// Wheel delta in pixels regardless of the event's delta mode
/// (0 = pixel, 1 = line, 2 = page). Positive zooms out.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let d = delta_y as f32;
    if !d.is_finite() {
        return 0.0;
    }
    match delta_mode {
        1 => d * crate::constants::WHEEL_LINE_PX,
        2 => d * crate::constants::WHEEL_PAGE_PX,
        _ => d,
    }
}

// ---------------- Keyboard ----------------

#[inline]
pub fn is_reset_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
