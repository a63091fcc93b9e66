//! End-to-end tests for [`TangentProcessor`] over standalone meshes.

use std::sync::Arc;

use crate::mesh::generators::{generate_quad, generate_sphere};
use crate::mesh::{AttributeArray, AttributeData, Mesh, Primitive, SceneMesh, TangentBinding};
use crate::tangent::{MeshReport, TangentError, TangentProcessor, TangentStatus};

use super::{assert_tangent, tangents, unit_quad};

/// Same quad as [`unit_quad`] with the texture coordinates stored on an
/// arbitrary channel.
fn quad_with_uvs_at(channel: usize) -> Mesh {
    Mesh::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
    .with_tex_coords(channel, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    .with_primitive(Primitive::triangle_list(vec![0, 1, 2, 2, 3, 0]))
}

/// A mesh whose texture-coordinate array is shorter than its vertex array.
fn broken_quad() -> Mesh {
    Mesh::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        .with_name("broken")
        .with_tex_coords(0, vec![[0.0, 0.0], [1.0, 0.0]])
        .with_primitive(Primitive::triangle_list(vec![0, 1, 2]))
}

#[test]
fn test_quad_tangents_right_handed() {
    let mut mesh = unit_quad();
    let status = TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    assert_eq!(status, TangentStatus::Generated { slot: 0, channel: 0 });
    assert_eq!(mesh.tangent_binding(), TangentBinding::Generated(0));
    for &tangent in tangents(&mesh) {
        assert_tangent(tangent, [1.0, 0.0, 0.0, 1.0]);
    }
}

#[test]
fn test_quad_tangents_left_handed() {
    // The generated quad uses the image convention with v growing downwards,
    // which flips the bitangent and therefore the handedness sign.
    let mut mesh = generate_quad(0.5, 0.5);
    TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    for &tangent in tangents(&mesh) {
        assert_tangent(tangent, [1.0, 0.0, 0.0, -1.0]);
    }
}

#[test]
fn test_generated_normals_face_up() {
    let mut mesh = unit_quad();
    assert!(mesh.normals().is_none());

    TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    let normals = mesh.normals().expect("normals were not generated");
    assert_eq!(normals.len(), 4);
    for n in normals {
        assert!((n[0]).abs() < 1e-6);
        assert!((n[1]).abs() < 1e-6);
        assert!((n[2] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_authored_tangents_skipped_untouched() {
    let authored = vec![[0.25, 0.5, 0.75, 1.0]; 4];
    let mut mesh = unit_quad()
        .with_attribute(
            2,
            AttributeArray::per_vertex(AttributeData::Vec4(authored)),
        )
        .with_tangent_binding(TangentBinding::Authored(2));
    let bytes_before = mesh.attribute(2).unwrap().bytes().to_vec();
    let uvs_before = Arc::clone(mesh.tex_coords(0).unwrap());

    let status = TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    assert_eq!(status, TangentStatus::SkippedAuthored);
    assert_eq!(mesh.tangent_binding(), TangentBinding::Authored(2));
    assert_eq!(mesh.attribute(2).unwrap().bytes(), bytes_before.as_slice());
    // Skipping happens before any derivation; normals stay absent and the
    // channel list is not even cloned.
    assert!(mesh.normals().is_none());
    assert!(Arc::ptr_eq(&uvs_before, mesh.tex_coords(0).unwrap()));
}

#[test]
fn test_authored_binding_without_array_regenerates() {
    let mut mesh = unit_quad().with_tangent_binding(TangentBinding::Authored(5));

    let status = TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    // The reserved slot is reused rather than appending a new one.
    assert_eq!(status, TangentStatus::Generated { slot: 5, channel: 0 });
    assert_eq!(mesh.tangent_binding(), TangentBinding::Generated(5));
    assert!(mesh.attribute(5).is_some());
}

#[test]
fn test_tangent_appended_after_existing_attributes() {
    let colors = AttributeArray::per_vertex(AttributeData::Vec3(vec![[1.0, 1.0, 1.0]; 4]));
    let mut mesh = unit_quad().with_attribute(0, colors);

    let status = TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    assert_eq!(status, TangentStatus::Generated { slot: 1, channel: 0 });
    assert!(mesh.attribute(0).unwrap().data().as_vec3().is_some());
    assert_eq!(mesh.attribute_slots(), 2);
}

#[test]
fn test_reprocessing_is_stable() {
    let processor = TangentProcessor::new();
    let mut mesh = unit_quad();

    processor.process_mesh(&mut mesh).unwrap();
    let first_tangents = tangents(&mesh).to_vec();
    let first_normals = mesh.normals().unwrap().to_vec();

    let status = processor.process_mesh(&mut mesh).unwrap();

    assert_eq!(status, TangentStatus::Generated { slot: 0, channel: 0 });
    assert_eq!(tangents(&mesh), first_tangents.as_slice());
    assert_eq!(mesh.normals().unwrap(), first_normals.as_slice());
    assert_eq!(mesh.attribute_slots(), 1);
}

#[test]
fn test_fallback_channel_matches_preferred() {
    let processor = TangentProcessor::new();

    let mut on_zero = quad_with_uvs_at(0);
    let mut on_three = quad_with_uvs_at(3);
    let status_zero = processor.process_mesh(&mut on_zero).unwrap();
    let status_three = processor.process_mesh(&mut on_three).unwrap();

    assert_eq!(status_zero, TangentStatus::Generated { slot: 0, channel: 0 });
    assert_eq!(
        status_three,
        TangentStatus::Generated { slot: 0, channel: 3 }
    );
    assert_eq!(tangents(&on_zero), tangents(&on_three));
}

#[test]
fn test_configured_channel_wins_over_zero() {
    // Channel 2 mirrors v, so picking it must flip the handedness.
    let mut mesh = quad_with_uvs_at(0);
    mesh.set_tex_coords(
        2,
        Arc::new(vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
    );

    let processor = TangentProcessor::new().with_tex_channel(2);
    let status = processor.process_mesh(&mut mesh).unwrap();

    assert_eq!(status, TangentStatus::Generated { slot: 0, channel: 2 });
    for &tangent in tangents(&mesh) {
        assert_tangent(tangent, [1.0, 0.0, 0.0, -1.0]);
    }
}

#[test]
fn test_no_tex_coords_skips_silently() {
    let mut mesh = Mesh::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        .with_primitive(Primitive::triangle_list(vec![0, 1, 2]));

    let status = TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    assert_eq!(status, TangentStatus::SkippedNoTexCoords);
    assert_eq!(mesh.tangent_binding(), TangentBinding::None);
    assert_eq!(mesh.attribute_slots(), 0);
    assert!(mesh.normals().is_none());
}

#[test]
fn test_degenerate_uvs_yield_zero_tangent() {
    let mut mesh = Mesh::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        .with_tex_coords(0, vec![[0.5, 0.5]; 3])
        .with_primitive(Primitive::triangle_list(vec![0, 1, 2]));

    TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    // No usable UV gradient: tangent stays zero with a positive sign, but
    // the face normal is still derived.
    for &tangent in tangents(&mesh) {
        assert_eq!(tangent, [0.0, 0.0, 0.0, 1.0]);
    }
    let normals = mesh.normals().unwrap();
    assert!((normals[0][2] - 1.0).abs() < 1e-6);
}

#[test]
fn test_strip_matches_equivalent_list() {
    let mut strip = Mesh::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
    .with_tex_coords(0, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    .with_primitive(Primitive::triangle_strip(vec![0, 1, 3, 2]));
    let mut list = unit_quad();

    let processor = TangentProcessor::new();
    processor.process_mesh(&mut strip).unwrap();
    processor.process_mesh(&mut list).unwrap();

    for (&s, &l) in tangents(&strip).iter().zip(tangents(&list)) {
        assert_tangent(s, l);
    }
}

#[test]
fn test_accumulation_spans_all_primitive_sets() {
    // One triangle per set; together they cover the same quad.
    let mut split = Mesh::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
    .with_tex_coords(0, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    .with_primitive(Primitive::triangle_list(vec![0, 1, 2]))
    .with_primitive(Primitive::triangle_list(vec![2, 3, 0]));
    let mut combined = unit_quad();

    let processor = TangentProcessor::new();
    processor.process_mesh(&mut split).unwrap();
    processor.process_mesh(&mut combined).unwrap();

    assert_eq!(tangents(&split), tangents(&combined));
}

#[test]
fn test_sphere_tangents_unit_and_orthogonal() {
    let mut mesh = generate_sphere(1.0, 16, 8);
    TangentProcessor::new().process_mesh(&mut mesh).unwrap();

    let normals = mesh.normals().unwrap();
    for (i, t) in tangents(&mesh).iter().enumerate() {
        assert!(
            t[3] == 1.0 || t[3] == -1.0,
            "vertex {i}: sign must be +/-1, got {}",
            t[3]
        );
        let len = (t[0] * t[0] + t[1] * t[1] + t[2] * t[2]).sqrt();
        if len == 0.0 {
            continue;
        }
        assert!((len - 1.0).abs() < 1e-3, "vertex {i}: tangent length {len}");
        let n = normals[i];
        let dot = n[0] * t[0] + n[1] * t[1] + n[2] * t[2];
        assert!(
            dot.abs() < 1e-3,
            "vertex {i}: tangent not orthogonal to normal (dot {dot})"
        );
    }
}

#[test]
fn test_generator_failure_leaves_mesh_untouched() {
    let mut mesh = broken_quad();

    let result = TangentProcessor::new().process_mesh(&mut mesh);

    assert_eq!(
        result.unwrap_err(),
        TangentError::TexCoordLengthMismatch {
            channel: 0,
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(mesh.tangent_binding(), TangentBinding::None);
    assert_eq!(mesh.attribute_slots(), 0);
    assert!(mesh.normals().is_none());
}

#[test]
fn test_batch_isolates_failures() {
    let mut meshes = vec![
        SceneMesh::Static(unit_quad()),
        SceneMesh::Static(broken_quad()),
        SceneMesh::Static(generate_sphere(1.0, 8, 4)),
    ];

    let reports = TangentProcessor::new().process_batch(&mut meshes);

    assert_eq!(reports.len(), 3);
    assert!(reports[0].is_ok());
    assert!(!reports[1].is_ok());
    assert!(reports[2].is_ok());

    let MeshReport::Static(result) = &reports[1] else {
        panic!("expected a static report");
    };
    assert!(matches!(
        result,
        Err(TangentError::TexCoordLengthMismatch { .. })
    ));

    // Siblings of the failed mesh were still processed.
    let SceneMesh::Static(sphere) = &meshes[2] else {
        panic!("expected a static mesh");
    };
    assert!(matches!(
        sphere.tangent_binding(),
        TangentBinding::Generated(_)
    ));
}
