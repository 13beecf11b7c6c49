use crate::overlay;
use heart_core::{AnimationState, FrameInput, OrbitCamera, PointerState, SceneParams};
use heart_render::Renderer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: AnimationState,
    pub orbit: OrbitCamera,
    pub pointer: Rc<RefCell<PointerState>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<Renderer<'a>>,

    pub start: Instant,
    pub message_shown: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.orbit.set_viewport(w, h);

        let pointer = self
            .pointer
            .borrow_mut()
            .frame(&mut self.orbit, w as f32, h as f32);
        let input = FrameInput {
            pointer,
            now: self.start.elapsed().as_secs_f64(),
        };
        self.scene.frame(&input);

        let visible = self.scene.message_visible();
        if visible != self.message_shown {
            overlay::set_visible(&self.document, visible);
            self.message_shown = visible;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&self.orbit.camera, &self.scene.instances()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    params: &SceneParams,
) -> Option<Renderer<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match Renderer::new(target, canvas.width(), canvas.height(), params).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
