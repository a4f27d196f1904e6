/// Möbius strip mesh with an explicit vertex grid.
///
/// The ribbon circles the Z axis in the XY plane:
///
/// `p(u, t) = ((R + t cos(u/2)) cos u, (R + t cos(u/2)) sin u, t sin(u/2))`
///
/// with `u in [0, 2*pi)` and `t in [-W, W]`. The half angle `u/2` gives the
/// half twist, so the seam at `u = 2*pi` meets the starting column with the
/// cross direction reversed. Index stitching mirrors the rung order there
/// instead of duplicating vertices.
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use std::f32::consts::TAU;

use constants::dimensions::{
    MOBIUS_HALF_WIDTH, MOBIUS_RADIUS, MOBIUS_RUNGS, MOBIUS_SEGMENTS,
};

/// Point on the strip centerline (`t = 0`) at angle `u`, in mesh space.
pub fn centerline_point(u: f32) -> Vec3 {
    Vec3::new(MOBIUS_RADIUS * u.cos(), MOBIUS_RADIUS * u.sin(), 0.0)
}

fn strip_point(u: f32, t: f32) -> Vec3 {
    let half = u / 2.0;
    let radius = MOBIUS_RADIUS + t * half.cos();
    Vec3::new(radius * u.cos(), radius * u.sin(), t * half.sin())
}

fn strip_normal(u: f32, t: f32) -> Vec3 {
    let half = u / 2.0;
    let radius = MOBIUS_RADIUS + t * half.cos();
    let d_u = Vec3::new(
        -radius * u.sin() - (t / 2.0) * half.sin() * u.cos(),
        radius * u.cos() - (t / 2.0) * half.sin() * u.sin(),
        (t / 2.0) * half.cos(),
    );
    let d_t = Vec3::new(half.cos() * u.cos(), half.cos() * u.sin(), half.sin());
    let normal = d_u.cross(d_t);
    if normal.length_squared() > 0.0 {
        normal.normalize()
    } else {
        Vec3::Z
    }
}

/// Builds the full strip mesh. Vertices form `MOBIUS_SEGMENTS` columns of
/// `MOBIUS_RUNGS + 1` rungs each; the seam column is shared, not duplicated.
pub fn mobius_strip_mesh() -> Mesh {
    let columns = MOBIUS_SEGMENTS;
    let rungs = MOBIUS_RUNGS;
    let vertex_count = columns * (rungs + 1);

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for i in 0..columns {
        let u = i as f32 / columns as f32 * TAU;
        for j in 0..=rungs {
            let t = (j as f32 / rungs as f32 * 2.0 - 1.0) * MOBIUS_HALF_WIDTH;
            positions.push(strip_point(u, t).to_array());
            normals.push(strip_normal(u, t).to_array());
            uvs.push([i as f32 / columns as f32, j as f32 / rungs as f32]);
        }
    }

    let column_stride = (rungs + 1) as u32;
    let mut indices: Vec<u32> = Vec::with_capacity(columns * rungs * 6);
    for i in 0..columns {
        let this = i as u32 * column_stride;
        for j in 0..rungs as u32 {
            // The last segment closes onto column 0 with the rung order
            // reversed, matching the half twist.
            let (b, c) = if i + 1 == columns {
                (rungs as u32 - j, rungs as u32 - j - 1)
            } else {
                (this + column_stride + j, this + column_stride + j + 1)
            };
            let a = this + j;
            let d = this + j + 1;
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

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<Vec3> {
        let Some(VertexAttributeValues::Float32x3(raw)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        raw.iter().map(|p| Vec3::from_array(*p)).collect()
    }

    #[test]
    fn vertex_and_index_counts_match_the_grid() {
        let mesh = mobius_strip_mesh();
        assert_eq!(
            positions(&mesh).len(),
            MOBIUS_SEGMENTS * (MOBIUS_RUNGS + 1)
        );
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("indices missing");
        };
        assert_eq!(indices.len(), MOBIUS_SEGMENTS * MOBIUS_RUNGS * 6);
        let count = (MOBIUS_SEGMENTS * (MOBIUS_RUNGS + 1)) as u32;
        assert!(indices.iter().all(|i| *i < count));
    }

    #[test]
    fn strip_stays_within_its_width() {
        for p in positions(&mobius_strip_mesh()) {
            assert!(p.z.abs() <= MOBIUS_HALF_WIDTH + 1.0e-4);
        }
    }

    #[test]
    fn centerline_rung_sits_on_the_ring_radius() {
        let all = positions(&mobius_strip_mesh());
        let stride = MOBIUS_RUNGS + 1;
        for i in 0..MOBIUS_SEGMENTS {
            let center = all[i * stride + MOBIUS_RUNGS / 2];
            assert!((center.length() - MOBIUS_RADIUS).abs() < 1.0e-4);
            let u = i as f32 / MOBIUS_SEGMENTS as f32 * TAU;
            assert!(center.distance(centerline_point(u)) < 1.0e-4);
        }
    }

    #[test]
    fn seam_reuses_the_first_column() {
        let mesh = mobius_strip_mesh();
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("indices missing");
        };
        let stride = (MOBIUS_RUNGS + 1) as u32;
        let last_segment = &indices[(MOBIUS_SEGMENTS - 1) * MOBIUS_RUNGS * 6..];
        assert!(
            last_segment.iter().any(|i| *i < stride),
            "seam triangles must reference column 0"
        );
        // Mirrored stitching: the mate of rung 0 in the closing quad is the
        // opposite edge of column 0.
        assert!(last_segment.contains(&(MOBIUS_RUNGS as u32)));
    }
}
