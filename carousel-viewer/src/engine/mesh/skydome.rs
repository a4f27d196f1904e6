/// Inward-facing hemisphere used as the sky backdrop.
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use std::f32::consts::{PI, TAU};

use constants::dimensions::{SKYDOME_RADIUS, SKYDOME_SEGMENTS, SKYDOME_STACKS};

/// Builds the dome as a latitude/longitude grid from zenith to horizon.
/// Triangles wind toward the inside and normals point inward, since the
/// camera only ever sees the dome from within.
pub fn skydome_mesh() -> Mesh {
    let vertex_count = (SKYDOME_SEGMENTS + 1) * (SKYDOME_STACKS + 1);
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for j in 0..=SKYDOME_STACKS {
        // phi runs from 0 at the zenith to pi/2 at the horizon.
        let phi = j as f32 / SKYDOME_STACKS as f32 * PI / 2.0;
        for i in 0..=SKYDOME_SEGMENTS {
            let theta = i as f32 / SKYDOME_SEGMENTS as f32 * TAU;
            let point = Vec3::new(
                SKYDOME_RADIUS * phi.sin() * theta.cos(),
                SKYDOME_RADIUS * phi.cos(),
                SKYDOME_RADIUS * phi.sin() * theta.sin(),
            );
            positions.push(point.to_array());
            normals.push((-point / SKYDOME_RADIUS).to_array());
            uvs.push([
                i as f32 / SKYDOME_SEGMENTS as f32,
                1.0 - j as f32 / SKYDOME_STACKS as f32,
            ]);
        }
    }

    let stride = (SKYDOME_SEGMENTS + 1) as u32;
    let mut indices: Vec<u32> = Vec::with_capacity(SKYDOME_SEGMENTS * SKYDOME_STACKS * 6);
    for j in 0..SKYDOME_STACKS as u32 {
        for i in 0..SKYDOME_SEGMENTS as u32 {
            let a = j * stride + i;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            // Reversed winding relative to an outward sphere.
            indices.extend_from_slice(&[a, b, c, b, d, c]);
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
