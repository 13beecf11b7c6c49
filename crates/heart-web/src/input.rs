use crate::constants::WHEEL_LINE_PX;
use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas' backing store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Wheel delta normalized to pixels.
#[inline]
pub fn wheel_delta_px(ev: &web::WheelEvent) -> f32 {
    let dy = ev.delta_y() as f32;
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => dy * WHEEL_LINE_PX,
        _ => dy,
    }
}
