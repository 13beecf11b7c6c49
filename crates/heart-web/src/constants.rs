// DOM element ids the page must provide.
pub const CANVAS_ID: &str = "app-canvas";
pub const MESSAGE_ID: &str = "hidden-message";

// Wheel events arrive in pixels or lines depending on the browser.
pub const WHEEL_LINE_PX: f32 = 16.0;
