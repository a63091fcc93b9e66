//! # Tangent Generation Demo
//!
//! Demonstrates:
//! - Procedural mesh generation (sphere, quad)
//! - Batch tangent generation over scene meshes
//! - Authored-tangent skipping
//! - Morph composites borrowing texture coordinates from their base
//!
//! Pass `--channel <n>` to prefer a different texture-coordinate channel.

use meshprep_core::mesh::generators::{generate_quad, generate_sphere};
use meshprep_core::mesh::{
    AttributeArray, AttributeData, Mesh, MorphMesh, SceneMesh, TangentBinding,
};
use meshprep_core::tangent::{MeshReport, MeshResult, TangentProcessor, TangentStatus};

// === Scene Setup ===

/// Build the demo batch: a sphere, a plain quad, a quad with authored
/// tangents, and a morphing quad with one target lacking its own UVs.
fn build_scene() -> Vec<SceneMesh> {
    let sphere = generate_sphere(1.0, 32, 16);

    let quad = generate_quad(0.5, 0.5);

    let authored = generate_quad(0.5, 0.5)
        .with_name("authored_quad")
        .with_attribute(
            0,
            AttributeArray::per_vertex(AttributeData::Vec4(vec![[1.0, 0.0, 0.0, 1.0]; 4])),
        )
        .with_tangent_binding(TangentBinding::Authored(0));

    let mut target = generate_quad(0.5, 0.5).with_name("morph_target");
    target.set_tex_coord_channels(Vec::new());
    let morph =
        MorphMesh::new(generate_quad(0.5, 0.5).with_name("morph_base")).with_target(target);

    vec![
        SceneMesh::Static(sphere),
        SceneMesh::Static(quad),
        SceneMesh::Static(authored),
        SceneMesh::Morph(morph),
    ]
}

// === Reporting ===

fn status_line(result: &MeshResult) -> String {
    match result {
        Ok(TangentStatus::Generated { slot, channel }) => {
            format!("generated into slot {slot} from channel {channel}")
        }
        Ok(TangentStatus::SkippedAuthored) => "skipped (authored tangents)".to_string(),
        Ok(TangentStatus::SkippedNoTexCoords) => "skipped (no texture coordinates)".to_string(),
        Err(err) => format!("failed: {err}"),
    }
}

fn report_mesh(scene: &SceneMesh, report: &MeshReport) {
    let name = scene.name().unwrap_or("unnamed");
    match report {
        MeshReport::Static(result) => log::info!("{}: {}", name, status_line(result)),
        MeshReport::Morph(morph) => {
            log::info!("{} (base): {}", name, status_line(&morph.base));
            for (i, target) in morph.targets.iter().enumerate() {
                log::info!("{} (target {}): {}", name, i, status_line(target));
            }
        }
    }
}

fn print_sample_tangents(mesh: &Mesh) {
    let Some(slot) = mesh.tangent_binding().slot() else {
        return;
    };
    let Some(tangents) = mesh.attribute(slot).and_then(|a| a.data().as_vec4()) else {
        return;
    };
    for (i, t) in tangents.iter().take(4).enumerate() {
        log::info!(
            "  [{}] ({:+.3}, {:+.3}, {:+.3}) sign {:+.0}",
            i,
            t[0],
            t[1],
            t[2],
            t[3]
        );
    }
}

// === Entry Point ===

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting MeshPrep Tangent Demo");
    log::info!("Core version: {}", meshprep_core::VERSION);
    meshprep_core::init();

    let args: Vec<String> = std::env::args().collect();
    let channel = args
        .iter()
        .position(|a| a == "--channel")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let processor = TangentProcessor::new().with_tex_channel(channel);
    let mut meshes = build_scene();
    let reports = processor.process_batch(&mut meshes);

    for (mesh, report) in meshes.iter().zip(&reports) {
        report_mesh(mesh, report);
    }

    if let Some(SceneMesh::Static(sphere)) = meshes.first() {
        log::info!("Sample sphere tangents:");
        print_sample_tangents(sphere);
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        log::warn!("{} of {} meshes failed", failed, reports.len());
    } else {
        log::info!("All {} meshes processed", reports.len());
    }
}
