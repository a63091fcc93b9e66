//! Raw tangent-space accumulation.
//!
//! [`generate`] implements the texture-gradient method: every triangle
//! contributes a tangent and bitangent derived from its position edges and
//! UV deltas, summed at its three vertices. Output stays unnormalized;
//! orthogonalization and handedness are the pipeline's job.

use crate::math::{Vec2, Vec3};
use crate::mesh::Mesh;

use super::error::TangentError;

/// Per-vertex accumulators produced by [`generate`].
///
/// All three arrays have one entry per mesh vertex. Tangent and bitangent
/// entries are raw sums over incident triangles, not unit vectors. When the
/// mesh has authored normals, `normals` is a copy of them; otherwise it
/// holds face-normal sums.
#[derive(Debug, Clone)]
pub struct TangentAccumulation {
    /// Normal per vertex (authored copy or face-normal sums).
    pub normals: Vec<Vec3>,
    /// Raw tangent sum per vertex.
    pub tangents: Vec<Vec3>,
    /// Raw bitangent sum per vertex.
    pub bitangents: Vec<Vec3>,
}

/// Accumulate raw tangent space for a mesh using the given
/// texture-coordinate channel.
///
/// For each triangle (v0, v1, v2) the position edges e1 = v1−v0,
/// e2 = v2−v0 and the matching UV deltas define a 2x2 system; its inverse
/// determinant scales the edge combination into texture-aligned tangent
/// and bitangent directions. Triangles whose UV-edge determinant is zero
/// (degenerate or duplicate UVs) contribute no tangent, though their face
/// normal still accumulates when the mesh has no authored normals.
///
/// Fails if the mesh has no positions, no triangle-bearing primitives, a
/// missing or mis-sized channel, a mis-sized normal array, or an
/// out-of-range vertex index.
pub fn generate(mesh: &Mesh, channel: usize) -> Result<TangentAccumulation, TangentError> {
    let positions = mesh.positions();
    if positions.is_empty() {
        return Err(TangentError::NoVertices);
    }
    if mesh.triangle_count() == 0 {
        return Err(TangentError::NoTriangles);
    }

    let tex_coords = mesh
        .tex_coords(channel)
        .ok_or(TangentError::MissingTexCoords { channel })?;
    if tex_coords.len() != positions.len() {
        return Err(TangentError::TexCoordLengthMismatch {
            channel,
            expected: positions.len(),
            actual: tex_coords.len(),
        });
    }

    let vertex_count = positions.len();
    let authored_normals = mesh.normals();
    if let Some(normals) = authored_normals
        && normals.len() != vertex_count
    {
        return Err(TangentError::NormalLengthMismatch {
            expected: vertex_count,
            actual: normals.len(),
        });
    }

    let mut acc = TangentAccumulation {
        normals: match authored_normals {
            Some(normals) => normals.iter().map(|n| Vec3::from(*n)).collect(),
            None => vec![Vec3::zeros(); vertex_count],
        },
        tangents: vec![Vec3::zeros(); vertex_count],
        bitangents: vec![Vec3::zeros(); vertex_count],
    };

    for primitive in mesh.primitives() {
        for [i0, i1, i2] in primitive.triangles() {
            for &index in &[i0, i1, i2] {
                if index as usize >= vertex_count {
                    return Err(TangentError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
            let (a, b, c) = (i0 as usize, i1 as usize, i2 as usize);

            let p0 = Vec3::from(positions[a]);
            let p1 = Vec3::from(positions[b]);
            let p2 = Vec3::from(positions[c]);
            let e1 = p1 - p0;
            let e2 = p2 - p0;

            if authored_normals.is_none() {
                let face_normal = e1.cross(&e2);
                acc.normals[a] += face_normal;
                acc.normals[b] += face_normal;
                acc.normals[c] += face_normal;
            }

            let uv0 = Vec2::from(tex_coords[a]);
            let uv1 = Vec2::from(tex_coords[b]);
            let uv2 = Vec2::from(tex_coords[c]);
            let duv1 = uv1 - uv0;
            let duv2 = uv2 - uv0;

            let det = duv1.x * duv2.y - duv2.x * duv1.y;
            if det == 0.0 {
                // Degenerate or duplicate UVs; drop this triangle's
                // tangent contribution instead of dividing by zero.
                continue;
            }
            let r = 1.0 / det;

            let tangent = (e1 * duv2.y - e2 * duv1.y) * r;
            let bitangent = (e2 * duv1.x - e1 * duv2.x) * r;

            for &i in &[a, b, c] {
                acc.tangents[i] += tangent;
                acc.bitangents[i] += bitangent;
            }
        }
    }

    Ok(acc)
}
