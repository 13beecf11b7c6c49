pub mod constants;
pub mod error;
pub mod glyph;
pub mod input;
pub mod interaction;
pub mod mesh;
pub mod picking;
pub mod pulse;
pub mod scene;
pub mod shape;
pub mod state;
pub mod topology;

pub use constants::*;
pub use error::SceneError;
pub use input::PointerState;
pub use interaction::*;
pub use pulse::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
