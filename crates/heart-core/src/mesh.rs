//! CPU-side mesh generation for the three primitives the scene draws:
//! balls (UV sphere), tubes (unit cylinder) and letter blocks (unit cube).

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    fn push(&mut self, position: [f32; 3], normal: [f32; 3]) -> u16 {
        self.vertices.push(Vertex { position, normal });
        (self.vertices.len() - 1) as u16
    }
}

/// UV sphere centered at the origin.
pub fn sphere(radius: f32, segments: u16, rings: u16) -> MeshData {
    let mut mesh = MeshData::default();
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        let (sp, cp) = phi.sin_cos();
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let (st, ct) = theta.sin_cos();
            let n = [sp * ct, cp, sp * st];
            mesh.push([n[0] * radius, n[1] * radius, n[2] * radius], n);
        }
    }
    let stride = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
        }
    }
    mesh
}

/// Cylinder of height 1 along +Y, centered at the origin, with caps.
pub fn cylinder(radius: f32, segments: u16) -> MeshData {
    let mut mesh = MeshData::default();
    for s in 0..=segments {
        let theta = TAU * s as f32 / segments as f32;
        let (st, ct) = theta.sin_cos();
        let n = [ct, 0.0, st];
        mesh.push([ct * radius, -0.5, st * radius], n);
        mesh.push([ct * radius, 0.5, st * radius], n);
    }
    for s in 0..segments {
        let a = s * 2;
        mesh.indices
            .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }
    for (y, ny) in [(-0.5_f32, -1.0_f32), (0.5, 1.0)] {
        let center = mesh.push([0.0, y, 0.0], [0.0, ny, 0.0]);
        let first = center + 1;
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let (st, ct) = theta.sin_cos();
            mesh.push([ct * radius, y, st * radius], [0.0, ny, 0.0]);
        }
        for s in 0..segments {
            let (i0, i1) = (first + s, first + s + 1);
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, i1, i0]);
            } else {
                mesh.indices.extend_from_slice(&[center, i0, i1]);
            }
        }
    }
    mesh
}

/// Axis-aligned cube with side 1 centered at the origin, flat-shaded.
pub fn cube() -> MeshData {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in FACES {
        let corner = |su: f32, sv: f32| {
            [
                0.5 * n[0] + 0.5 * su * u[0] + 0.5 * sv * v[0],
                0.5 * n[1] + 0.5 * su * u[1] + 0.5 * sv * v[1],
                0.5 * n[2] + 0.5 * su * u[2] + 0.5 * sv * v[2],
            ]
        };
        let base = mesh.push(corner(-1.0, -1.0), n);
        mesh.push(corner(1.0, -1.0), n);
        mesh.push(corner(1.0, 1.0), n);
        mesh.push(corner(-1.0, 1.0), n);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}
