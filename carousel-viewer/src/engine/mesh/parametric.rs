/// Parametric surface meshes for ring decorations.
///
/// Every surface is sampled over the unit square `(u, v) in [0, 1]^2` and
/// tessellated into a regular triangle grid. Normals come from central
/// differences of the parametrization, so the same builder serves every
/// surface kind without per-kind normal math.
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use std::f32::consts::{PI, TAU};

use constants::dimensions::DECORATION_SIZE;

/// Grid resolution used for decoration surfaces.
const SURFACE_STEPS: usize = 32;

/// Step used for finite-difference normals, in parameter space.
const NORMAL_EPSILON: f32 = 1.0e-3;

/// The eight decorative surface shapes scattered over the rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Component)]
pub enum SurfaceKind {
    Dome,
    Cone,
    Saddle,
    Helicoid,
    Hourglass,
    Ripple,
    Egg,
    Torus,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 8] = [
        SurfaceKind::Dome,
        SurfaceKind::Cone,
        SurfaceKind::Saddle,
        SurfaceKind::Helicoid,
        SurfaceKind::Hourglass,
        SurfaceKind::Ripple,
        SurfaceKind::Egg,
        SurfaceKind::Torus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::Dome => "dome",
            SurfaceKind::Cone => "cone",
            SurfaceKind::Saddle => "saddle",
            SurfaceKind::Helicoid => "helicoid",
            SurfaceKind::Hourglass => "hourglass",
            SurfaceKind::Ripple => "ripple",
            SurfaceKind::Egg => "egg",
            SurfaceKind::Torus => "torus",
        }
    }

    /// Evaluates the surface at `(u, v)`, centered on the origin and sized
    /// to fit a box of roughly `DECORATION_SIZE` per side.
    pub fn sample(self, u: f32, v: f32) -> Vec3 {
        let s = DECORATION_SIZE;
        let r = s / 2.0;
        match self {
            SurfaceKind::Dome => {
                let theta = u * TAU;
                let phi = v * PI / 2.0;
                Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.cos() - r / 2.0,
                    r * phi.sin() * theta.sin(),
                )
            }
            SurfaceKind::Cone => {
                let theta = u * TAU;
                let radius = (1.0 - v) * r;
                Vec3::new(
                    radius * theta.cos(),
                    (v - 0.5) * s,
                    radius * theta.sin(),
                )
            }
            SurfaceKind::Saddle => {
                let x = (u - 0.5) * s;
                let z = (v - 0.5) * s;
                Vec3::new(x, (x * x - z * z) / s, z)
            }
            SurfaceKind::Helicoid => {
                let theta = u * TAU;
                let radius = v * r;
                Vec3::new(
                    radius * theta.cos(),
                    (u - 0.5) * s * 0.8,
                    radius * theta.sin(),
                )
            }
            SurfaceKind::Hourglass => {
                let theta = u * TAU;
                let t = (v - 0.5) * 2.0;
                let radius = r / 2.0_f32.sqrt() * (1.0 + t * t).sqrt();
                Vec3::new(radius * theta.cos(), t * r, radius * theta.sin())
            }
            SurfaceKind::Ripple => {
                let x = (u - 0.5) * s;
                let z = (v - 0.5) * s;
                let rho = (x * x + z * z).sqrt();
                Vec3::new(x, 0.25 * r * (4.0 * PI * rho / s).cos(), z)
            }
            SurfaceKind::Egg => {
                let theta = u * TAU;
                let phi = v * PI;
                Vec3::new(
                    0.7 * r * phi.sin() * theta.cos(),
                    r * phi.cos(),
                    0.7 * r * phi.sin() * theta.sin(),
                )
            }
            SurfaceKind::Torus => {
                let theta = u * TAU;
                let phi = v * TAU;
                let major = 0.7 * r;
                let minor = 0.3 * r;
                Vec3::new(
                    (major + minor * phi.cos()) * theta.cos(),
                    minor * phi.sin(),
                    (major + minor * phi.cos()) * theta.sin(),
                )
            }
        }
    }
}

/// Builds the render mesh for one surface kind.
pub fn surface_mesh(kind: SurfaceKind) -> Mesh {
    grid_mesh(|u, v| kind.sample(u, v), SURFACE_STEPS, SURFACE_STEPS)
}

/// Tessellates `f` over `[0, 1]^2` into a `u_steps x v_steps` quad grid,
/// two triangles per quad.
pub fn grid_mesh(f: impl Fn(f32, f32) -> Vec3, u_steps: usize, v_steps: usize) -> Mesh {
    let vertex_count = (u_steps + 1) * (v_steps + 1);
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for i in 0..=u_steps {
        let u = i as f32 / u_steps as f32;
        for j in 0..=v_steps {
            let v = j as f32 / v_steps as f32;
            positions.push(f(u, v).to_array());
            normals.push(surface_normal(&f, u, v).to_array());
            uvs.push([u, v]);
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity(u_steps * v_steps * 6);
    for i in 0..u_steps {
        for j in 0..v_steps {
            let a = (i * (v_steps + 1) + j) as u32;
            let b = ((i + 1) * (v_steps + 1) + j) as u32;
            let c = ((i + 1) * (v_steps + 1) + j + 1) as u32;
            let d = (i * (v_steps + 1) + j + 1) as u32;
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Central-difference normal, clamped to the parameter domain. Degenerate
/// spots (cone apex, sphere poles) fall back to +Y.
fn surface_normal(f: &impl Fn(f32, f32) -> Vec3, u: f32, v: f32) -> Vec3 {
    let u0 = (u - NORMAL_EPSILON).max(0.0);
    let u1 = (u + NORMAL_EPSILON).min(1.0);
    let v0 = (v - NORMAL_EPSILON).max(0.0);
    let v1 = (v + NORMAL_EPSILON).min(1.0);
    let du = f(u1, v) - f(u0, v);
    let dv = f(u, v1) - f(u, v0);
    let normal = du.cross(dv);
    if normal.length_squared() > 0.0 {
        normal.normalize()
    } else {
        Vec3::Y
    }
}
