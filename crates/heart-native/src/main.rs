use heart_core::{AnimationState, FrameInput, OrbitCamera, PointerState, SceneParams};
use heart_render::Renderer;
use instant::Instant;
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

const TITLE: &str = "heart-pulse (native)";
const MESSAGE_TITLE: &str = "heart-pulse: I love you";
const WHEEL_LINE_PX: f32 = 16.0;

struct App<'w> {
    window: &'w Window,
    gpu: Renderer<'w>,
    scene: AnimationState,
    orbit: OrbitCamera,
    pointer: PointerState,
    start: Instant,
    message_shown: bool,
}

impl<'w> App<'w> {
    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::Resized(size) => self.gpu.resize_if_needed(size.width, size.height),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => self.pointer.left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer.pressed(self.pointer.x, self.pointer.y),
                ElementState::Released => self.pointer.released(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                self.pointer.wheel(px);
            }
            _ => {}
        }
    }

    fn frame(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let (w, h) = self.gpu.size();
        self.orbit.set_viewport(w, h);
        let pointer = self.pointer.frame(&mut self.orbit, w as f32, h as f32);
        self.scene.frame(&FrameInput {
            pointer,
            now: self.start.elapsed().as_secs_f64(),
        });

        let visible = self.scene.message_visible();
        if visible != self.message_shown {
            self.window
                .set_title(if visible { MESSAGE_TITLE } else { TITLE });
            self.message_shown = visible;
        }

        match self.gpu.render(&self.orbit.camera, &self.scene.instances()) {
            Ok(()) => self.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let params = SceneParams::default();
    let scene = AnimationState::new(params.clone())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new().with_title(TITLE).build(&event_loop)?;
    let size = window.inner_size();
    let gpu = pollster::block_on(Renderer::new(&window, size.width, size.height, &params))?;

    let mut app = App {
        window: &window,
        gpu,
        scene,
        orbit: OrbitCamera::default(),
        pointer: PointerState::default(),
        start: Instant::now(),
        message_shown: false,
    };
    log::info!("heart-native starting");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => app.handle_window_event(event, elwt),
        Event::AboutToWait => app.frame(elwt),
        _ => {}
    })?;
    Ok(())
}
