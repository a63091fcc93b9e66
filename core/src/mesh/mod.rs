//! CPU-side mesh types and generators.
//!
//! This module provides the data model tangent processing operates on:
//!
//! - [`Mesh`] - Positions, normals, texture-coordinate channels, attribute slots
//! - [`Primitive`] / [`PrimitiveTopology`] - Indexed primitive sets
//! - [`AttributeArray`] / [`AttributeData`] - Generic per-vertex float arrays
//! - [`TangentBinding`] - Authored/generated tangent marker
//! - [`MorphMesh`] / [`SceneMesh`] - Morph composites and the tagged mesh variant
//! - Generators for common shapes (sphere, quad)

mod attribute;
mod data;
pub mod generators;

pub use attribute::{AttributeArray, AttributeBinding, AttributeData};
pub use data::{
    MAX_TEXCOORD_CHANNELS, Mesh, MorphMesh, Primitive, PrimitiveTopology, SceneMesh,
    TangentBinding, TexCoords,
};
