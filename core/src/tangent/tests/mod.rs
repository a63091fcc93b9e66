//! Integration tests for the tangent pipeline.

use crate::mesh::{Mesh, Primitive};

mod pipeline_test;

/// A unit quad in the XY plane with texture coordinates aligned to the
/// positions (u grows with x, v grows with y). Every vertex comes out with
/// tangent `[1, 0, 0, 1]`.
fn unit_quad() -> Mesh {
    Mesh::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
    .with_name("unit_quad")
    .with_tex_coords(0, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    .with_primitive(Primitive::triangle_list(vec![0, 1, 2, 2, 3, 0]))
}

/// Fetch the attached tangent array of a processed mesh.
fn tangents(mesh: &Mesh) -> &[[f32; 4]] {
    let slot = mesh
        .tangent_binding()
        .slot()
        .expect("mesh has no tangent binding");
    mesh.attribute(slot)
        .expect("tangent slot is empty")
        .data()
        .as_vec4()
        .expect("tangent attribute is not vec4")
}

/// Assert a tangent equals the expected value component-wise.
fn assert_tangent(actual: [f32; 4], expected: [f32; 4]) {
    for i in 0..3 {
        assert!(
            (actual[i] - expected[i]).abs() < 1e-5,
            "tangent {actual:?} != expected {expected:?}"
        );
    }
    assert_eq!(actual[3], expected[3], "handedness sign mismatch");
}
