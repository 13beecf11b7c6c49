#![cfg(target_arch = "wasm32")]
use heart_core::{AnimationState, OrbitCamera, OrbitParams, PointerState, SceneParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Keep the backing store at CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);
    overlay::hide(&document);

    let params = SceneParams::default();
    let scene = AnimationState::new(params.clone())?;
    let gpu = frame::init_gpu(&canvas, &params).await;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit: OrbitCamera::new(OrbitParams::default()),
        pointer,
        canvas,
        document,
        gpu,
        start: Instant::now(),
        message_shown: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
