//! The animated scene: every ball, tube and button addressed by index, plus
//! the per-frame update that keeps them in step with the pulse.

use crate::constants::{
    BALL_COLOR, BALL_RADIUS, BUTTON_I_POSITION, BUTTON_U_POSITION, CENTER_INDEX, EDGE_THRESHOLD,
    HEART_HALF, TUBE_RADIUS_FRACTION,
};
use crate::error::SceneError;
use crate::interaction::{Interaction, PointerFrame};
use crate::picking::ray_sphere;
use crate::pulse::{PulseClock, PulseCurve};
use crate::shape::{displaced, mirror_points};
use crate::topology::{build_edges, Edge, TubeTransform};
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Debug)]
pub struct SceneParams {
    /// One quadrant of the shape; mirrored across x = 0 and z = 0.
    pub authored: Vec<Vec3>,
    /// Point whose ball reveals the hidden message.
    pub center_index: usize,
    pub ball_radius: f32,
    pub tube_radius_fraction: f32,
    pub edge_threshold: f32,
    pub pulse: PulseCurve,
    pub button_i: Vec3,
    pub button_u: Vec3,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            authored: HEART_HALF.iter().copied().map(Vec3::from).collect(),
            center_index: CENTER_INDEX,
            ball_radius: BALL_RADIUS,
            tube_radius_fraction: TUBE_RADIUS_FRACTION,
            edge_threshold: EDGE_THRESHOLD,
            pulse: PulseCurve::default(),
            button_i: Vec3::from(BUTTON_I_POSITION),
            button_u: Vec3::from(BUTTON_U_POSITION),
        }
    }
}

impl SceneParams {
    fn validate(&self) -> Result<(), SceneError> {
        if self.authored.is_empty() {
            return Err(SceneError::EmptyShape);
        }
        if self.center_index >= self.authored.len() {
            return Err(SceneError::CenterOutOfRange {
                index: self.center_index,
                len: self.authored.len(),
            });
        }
        for (name, value) in [
            ("ball_radius", self.ball_radius),
            ("tube_radius_fraction", self.tube_radius_fraction),
            ("edge_threshold", self.edge_threshold),
        ] {
            if !(value > 0.0) {
                return Err(SceneError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    pub fn tube_radius(&self) -> f32 {
        self.ball_radius * self.tube_radius_fraction
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub rest: Vec3,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct Tube {
    pub edge: Edge,
    pub transform: TubeTransform,
}

/// Inputs the host gathers for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub pointer: PointerFrame,
    /// Wall-clock seconds; only used for click flash timing.
    pub now: f64,
}

/// Per-instance data uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4, color: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
        }
    }
}

/// Instances grouped by the mesh they are drawn with.
#[derive(Clone, Debug, Default)]
pub struct SceneInstances {
    pub balls: Vec<InstanceRaw>,
    pub tubes: Vec<InstanceRaw>,
    pub blocks: Vec<InstanceRaw>,
}

pub struct AnimationState {
    params: SceneParams,
    pub balls: Vec<Ball>,
    pub tubes: Vec<Tube>,
    pub clock: PulseClock,
    pub interaction: Interaction,
    tube_color: Vec3,
}

impl AnimationState {
    pub fn new(params: SceneParams) -> Result<Self, SceneError> {
        params.validate()?;
        let points = mirror_points(&params.authored);
        let balls: Vec<Ball> = points
            .iter()
            .map(|&rest| Ball {
                rest,
                position: rest,
            })
            .collect();
        let tubes: Vec<Tube> = build_edges(&points, params.edge_threshold)
            .into_iter()
            .map(|edge| Tube {
                edge,
                transform: TubeTransform::between(points[edge.a], points[edge.b]),
            })
            .collect();
        log::info!(
            "[scene] points={} edges={} center={}",
            balls.len(),
            tubes.len(),
            params.center_index
        );
        let interaction = Interaction::new(params.button_i, params.button_u);
        let tube_color = interaction.tube_color(0.0);
        Ok(Self {
            params,
            balls,
            tubes,
            clock: PulseClock::default(),
            interaction,
            tube_color,
        })
    }

    /// Advance the animation by one frame.
    pub fn frame(&mut self, input: &FrameInput) {
        let d = self.clock.tick(&self.params.pulse, self.interaction.speed);

        for ball in &mut self.balls {
            ball.position = displaced(ball.rest, d);
        }
        for tube in &mut self.tubes {
            let p1 = self.balls[tube.edge.a].position;
            let p2 = self.balls[tube.edge.b].position;
            tube.transform = TubeTransform::between(p1, p2);
        }

        let t = self.clock.t as f32;
        let center = self.balls.get(self.params.center_index).map(|b| b.position);
        let center_hit = match (input.pointer.ray.as_ref(), center) {
            (Some(r), Some(c)) => ray_sphere(r.origin, r.dir, c, self.params.ball_radius).is_some(),
            _ => false,
        };
        self.interaction
            .update(&input.pointer, center_hit, t, input.now);
        self.tube_color = self.interaction.tube_color(t);
    }

    /// Parameters the scene was validated and built with.
    #[inline]
    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    #[inline]
    pub fn displacement(&self) -> f32 {
        self.clock.d
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.interaction.speed
    }

    #[inline]
    pub fn colorful(&self) -> bool {
        self.interaction.colorful
    }

    #[inline]
    pub fn message_visible(&self) -> bool {
        self.interaction.message_visible
    }

    #[inline]
    pub fn center_index(&self) -> usize {
        self.params.center_index
    }

    #[inline]
    pub fn tube_color(&self) -> Vec3 {
        self.tube_color
    }

    /// Model matrices and colors for everything drawn this frame.
    pub fn instances(&self) -> SceneInstances {
        let ball_color = Vec3::from(BALL_COLOR);
        let balls = self
            .balls
            .iter()
            .map(|b| InstanceRaw::new(Mat4::from_translation(b.position), ball_color))
            .collect();
        let tubes = self
            .tubes
            .iter()
            .map(|t| {
                let tr = &t.transform;
                let model = Mat4::from_scale_rotation_translation(
                    Vec3::new(1.0, tr.length, 1.0),
                    tr.rotation,
                    tr.midpoint,
                );
                InstanceRaw::new(model, self.tube_color)
            })
            .collect();
        let blocks = self
            .interaction
            .buttons
            .iter()
            .flat_map(|b| {
                b.boxes.iter().map(move |bx| {
                    let model = Mat4::from_scale_rotation_translation(
                        bx.size(),
                        Quat::IDENTITY,
                        bx.center(),
                    );
                    InstanceRaw::new(model, b.color)
                })
            })
            .collect();
        SceneInstances {
            balls,
            tubes,
            blocks,
        }
    }
}
