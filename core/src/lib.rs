//! # MeshPrep Core
//!
//! CPU-side mesh preparation for rendering pipelines: mesh containers,
//! procedural test shapes, and tangent-space generation for normal mapping.

pub mod math;
pub mod mesh;
pub mod profiling;
pub mod tangent;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version at startup.
pub fn init() {
    log::info!("MeshPrep Core v{} initialized", VERSION);
}
