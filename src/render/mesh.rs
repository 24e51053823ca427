//! CPU-side geometry for the showcase shapes and the part list each object
//! kind is drawn with.

use glam::{Mat4, Vec3};
use showcase_core::ObjectKind;
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
    fn push(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let i = self.vertices.len() as u16;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        i
    }

    fn quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u16;
        for c in corners {
            self.push(c, normal);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Axis-aligned cube from -0.5 to 0.5, flat-shaded.
pub fn unit_box() -> MeshData {
    let mut m = MeshData::default();
    let faces = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    for n in faces {
        // u x v = -n, so the corner order below winds CCW seen from outside
        let u = if n.y.abs() > 0.5 { Vec3::X } else { Vec3::Y };
        let v = u.cross(n);
        let c = n * 0.5;
        m.quad(
            [
                c - u * 0.5 - v * 0.5,
                c - u * 0.5 + v * 0.5,
                c + u * 0.5 + v * 0.5,
                c + u * 0.5 - v * 0.5,
            ],
            n,
        );
    }
    m
}

/// Unit-radius sphere.
pub fn uv_sphere(segments: u16, rings: u16) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut m = MeshData::default();
    for r in 0..=rings {
        let phi = PI * r as f32 / rings as f32;
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            let n = Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos());
            m.push(n, n);
        }
    }
    let row = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let a = r * row + s;
            let b = a + row;
            m.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    m
}

/// Capped cylinder of radius 1 along Y, from -1 to 1.
pub fn cylinder(segments: u16) -> MeshData {
    let segments = segments.max(3);
    let mut m = MeshData::default();
    let ring = |s: u16| {
        let theta = TAU * s as f32 / segments as f32;
        Vec3::new(theta.sin(), 0.0, theta.cos())
    };
    for s in 0..segments {
        let (a, b) = (ring(s), ring(s + 1));
        let base = m.push(a - Vec3::Y, a);
        m.push(b - Vec3::Y, b);
        m.push(b + Vec3::Y, b);
        m.push(a + Vec3::Y, a);
        m.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    for (y, n) in [(1.0, Vec3::Y), (-1.0, Vec3::NEG_Y)] {
        let center = m.push(Vec3::new(0.0, y, 0.0), n);
        for s in 0..segments {
            let a = m.push(ring(s) + Vec3::Y * y, n);
            let b = m.push(ring(s + 1) + Vec3::Y * y, n);
            if y > 0.0 {
                m.indices.extend_from_slice(&[center, a, b]);
            } else {
                m.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }
    m
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Box,
    Sphere,
    Cylinder,
}

impl MeshKind {
    pub const ALL: [MeshKind; 3] = [MeshKind::Box, MeshKind::Sphere, MeshKind::Cylinder];

    pub fn index(self) -> usize {
        match self {
            MeshKind::Box => 0,
            MeshKind::Sphere => 1,
            MeshKind::Cylinder => 2,
        }
    }

    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Box => unit_box(),
            MeshKind::Sphere => uv_sphere(32, 16),
            MeshKind::Cylinder => cylinder(32),
        }
    }
}

/// One mesh instance inside an object, in object-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub mesh: MeshKind,
    pub local: Mat4,
    /// Fixed colour; `None` uses the object's own (flashing) colour.
    pub tint: Option<[f32; 3]>,
}

impl Part {
    fn main(mesh: MeshKind, size: Vec3, center: Vec3) -> Self {
        Self {
            mesh,
            local: Mat4::from_scale_rotation_translation(size, glam::Quat::IDENTITY, center),
            tint: None,
        }
    }

    fn detail(size: Vec3, center: Vec3, tint: [f32; 3]) -> Self {
        Self {
            tint: Some(tint),
            ..Self::main(MeshKind::Box, size, center)
        }
    }
}

const ROOF_COLOR: [f32; 3] = [0.35, 0.2, 0.15];
const DOOR_COLOR: [f32; 3] = [0.4, 0.26, 0.13];
const WINDOW_COLOR: [f32; 3] = [0.55, 0.75, 0.95];
const OPEN_BUTTON_COLOR: [f32; 3] = [0.04, 0.4, 1.0];
const CLOSE_BUTTON_COLOR: [f32; 3] = [0.2, 0.2, 0.2];

/// The parts an object kind is drawn with. Sizes match the pick volumes.
pub fn parts_for(kind: ObjectKind) -> Vec<Part> {
    match kind {
        ObjectKind::Cube => vec![Part::main(MeshKind::Box, Vec3::new(4.0, 2.0, 2.0), Vec3::ZERO)],
        ObjectKind::Sphere => vec![Part::main(MeshKind::Sphere, Vec3::splat(2.0), Vec3::ZERO)],
        ObjectKind::Cylinder => vec![Part::main(MeshKind::Cylinder, Vec3::splat(1.5), Vec3::ZERO)],
        ObjectKind::Building => {
            let mut parts = vec![
                Part::main(MeshKind::Box, Vec3::new(4.0, 6.0, 4.0), Vec3::new(0.0, 3.0, 0.0)),
                Part::detail(Vec3::new(4.5, 0.5, 4.5), Vec3::new(0.0, 6.25, 0.0), ROOF_COLOR),
                Part::detail(Vec3::new(1.0, 2.0, 0.1), Vec3::new(0.0, 1.0, 2.05), DOOR_COLOR),
            ];
            for y in [2.8, 4.6] {
                for x in [-1.1, 1.1] {
                    parts.push(Part::detail(
                        Vec3::new(0.8, 0.8, 0.04),
                        Vec3::new(x, y, 2.02),
                        WINDOW_COLOR,
                    ));
                }
            }
            parts
        }
        // buttons sit proud of a thinner board, over their hit regions
        ObjectKind::Plane => vec![
            Part::main(MeshKind::Box, Vec3::new(2.0, 1.0, 0.006), Vec3::ZERO),
            Part::detail(Vec3::new(0.6, 0.2, 0.01), Vec3::new(-0.4, -0.2, 0.0), OPEN_BUTTON_COLOR),
            Part::detail(Vec3::new(0.6, 0.2, 0.01), Vec3::new(0.4, -0.2, 0.0), CLOSE_BUTTON_COLOR),
        ],
    }
}
