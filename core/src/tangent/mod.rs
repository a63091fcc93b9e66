//! Tangent-space generation for normal mapping.
//!
//! Derives per-vertex tangent frames from vertex positions and texture
//! coordinates, the usual preprocessing step before rendering with
//! tangent-space normal maps. The output is one `[x, y, z, sign]` vector
//! per vertex, attached to the mesh as a per-vertex attribute; shaders
//! reconstruct the bitangent as `sign * cross(normal, tangent)`.
//!
//! [`generate`] is the raw accumulation pass. [`TangentProcessor`] wraps it
//! with per-mesh policy (authored-tangent skip, channel selection, normal
//! reconciliation, orthogonalization, attachment) and handles morph
//! composites.
//!
//! # Example
//!
//! ```
//! use meshprep_core::mesh::generators::generate_sphere;
//! use meshprep_core::tangent::{TangentProcessor, TangentStatus};
//!
//! let mut sphere = generate_sphere(1.0, 16, 8);
//! let status = TangentProcessor::new().process_mesh(&mut sphere).unwrap();
//! assert!(matches!(status, TangentStatus::Generated { .. }));
//! ```

mod error;
mod generator;
mod pipeline;
#[cfg(test)]
mod tests;

pub use error::TangentError;
pub use generator::{TangentAccumulation, generate};
pub use pipeline::{MeshReport, MeshResult, MorphReport, TangentProcessor, TangentStatus};
