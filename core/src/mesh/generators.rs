//! Mesh generators for common shapes.
//!
//! These generators produce [`Mesh`] values used by the demos, benches,
//! and tests as realistic inputs for tangent-space processing.

use std::f32::consts::PI;

use super::data::{Mesh, Primitive};

/// Generate a UV sphere mesh.
///
/// Creates a sphere with the given radius, number of longitudinal segments,
/// and number of latitudinal rings, carrying authored normals and texture
/// coordinates on channel 0.
///
/// # Arguments
///
/// * `radius` - Sphere radius
/// * `segments` - Number of longitudinal segments (around the equator)
/// * `rings` - Number of latitudinal rings (from pole to pole)
pub fn generate_sphere(radius: f32, segments: u32, rings: u32) -> Mesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut tex_coords = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let theta = ring as f32 * PI / rings as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for segment in 0..=segments {
            let phi = segment as f32 * 2.0 * PI / segments as f32;
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            let x = sin_theta * cos_phi;
            let y = cos_theta;
            let z = sin_theta * sin_phi;

            positions.push([x * radius, y * radius, z * radius]);
            normals.push([x, y, z]);
            tex_coords.push([
                segment as f32 / segments as f32,
                ring as f32 / rings as f32,
            ]);
        }
    }

    for ring in 0..rings {
        for segment in 0..segments {
            let current = ring * (segments + 1) + segment;
            let next = current + segments + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    Mesh::new(positions)
        .with_normals(normals)
        .with_tex_coords(0, tex_coords)
        .with_primitive(Primitive::triangle_list(indices))
        .with_name("sphere")
}

/// Generate a quad mesh on the XY plane.
///
/// Creates a quad centered at the origin with the given half-width and
/// half-height, carrying texture coordinates on channel 0 and no normals
/// (tangent processing derives them from the face).
///
/// UV coordinates go from (0,0) at top-left to (1,1) at bottom-right.
///
/// # Arguments
///
/// * `half_width` - Half the width of the quad along the X axis
/// * `half_height` - Half the height of the quad along the Y axis
pub fn generate_quad(half_width: f32, half_height: f32) -> Mesh {
    let positions = vec![
        [-half_width, -half_height, 0.0],
        [half_width, -half_height, 0.0],
        [half_width, half_height, 0.0],
        [-half_width, half_height, 0.0],
    ];
    let tex_coords = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    let indices = vec![0, 1, 2, 2, 3, 0];

    Mesh::new(positions)
        .with_tex_coords(0, tex_coords)
        .with_primitive(Primitive::triangle_list(indices))
        .with_name("quad")
}
