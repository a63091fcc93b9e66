//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How vertices are assembled into primitives
//! - [`Primitive`] - One indexed primitive set and its triangle iteration
//! - [`TangentBinding`] - Where a mesh's tangent attribute lives and how it got there
//! - [`Mesh`] - Positions, normals, texture-coordinate channels, attribute slots
//! - [`MorphMesh`] / [`SceneMesh`] - Morphing composites and the tagged mesh variant

use std::sync::Arc;

use super::attribute::AttributeArray;

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Each vertex is a separate point.
    PointList,
    /// Every two vertices form a line.
    LineList,
    /// Vertices form a connected strip of lines.
    LineStrip,
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
    /// Vertices form a connected strip of triangles.
    TriangleStrip,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive (for non-strip topologies).
    pub fn vertices_per_primitive(&self) -> Option<u32> {
        match self {
            Self::PointList => Some(1),
            Self::LineList => Some(2),
            Self::TriangleList => Some(3),
            Self::LineStrip | Self::TriangleStrip => None, // Variable
        }
    }
}

/// One indexed primitive set: a topology plus vertex indices into the
/// owning mesh's position array.
///
/// A mesh may own several primitive sets with different topologies.
/// Only triangle topologies contribute to [`triangles`](Self::triangles);
/// point and line sets are representable but yield nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    topology: PrimitiveTopology,
    indices: Vec<u32>,
}

impl Primitive {
    /// Create a primitive set with the given topology and indices.
    pub fn new(topology: PrimitiveTopology, indices: Vec<u32>) -> Self {
        Self { topology, indices }
    }

    /// Create a triangle-list primitive (every three indices form a triangle).
    pub fn triangle_list(indices: Vec<u32>) -> Self {
        Self::new(PrimitiveTopology::TriangleList, indices)
    }

    /// Create a triangle-strip primitive (each index window forms a triangle).
    pub fn triangle_strip(indices: Vec<u32>) -> Self {
        Self::new(PrimitiveTopology::TriangleStrip, indices)
    }

    /// Get the topology.
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Get the vertex indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of triangles this primitive set contributes.
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            PrimitiveTopology::TriangleList => self.indices.len() / 3,
            PrimitiveTopology::TriangleStrip => self.indices.len().saturating_sub(2),
            _ => 0,
        }
    }

    /// Iterate the triangles of this primitive set as index triples.
    ///
    /// Strip windows with repeated indices are yielded as-is; their UV area
    /// is zero, so they drop out at the accumulation's determinant check.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let indices = &self.indices;
        let strip = matches!(self.topology, PrimitiveTopology::TriangleStrip);
        (0..self.triangle_count()).map(move |i| {
            if strip {
                // Odd-numbered windows swap their first two indices to keep
                // face winding consistent along the strip.
                if i % 2 == 0 {
                    [indices[i], indices[i + 1], indices[i + 2]]
                } else {
                    [indices[i + 1], indices[i], indices[i + 2]]
                }
            } else {
                [indices[3 * i], indices[3 * i + 1], indices[3 * i + 2]]
            }
        })
    }
}

/// Maximum number of texture-coordinate channels a mesh can carry.
pub const MAX_TEXCOORD_CHANNELS: usize = 32;

/// One texture-coordinate channel: 2-component UVs, one entry per vertex.
pub type TexCoords = Vec<[f32; 2]>;

/// Marker tracking where a mesh's tangent attribute lives and how it got
/// there.
///
/// `Authored` tangents take precedence: processing skips a mesh whose
/// authored slot holds an array. `Generated` never causes a skip;
/// reprocessing recomputes into the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TangentBinding {
    /// No tangent attribute is bound.
    #[default]
    None,
    /// Tangents were authored/loaded into the given attribute slot.
    Authored(usize),
    /// Tangents were generated into the given attribute slot.
    Generated(usize),
}

impl TangentBinding {
    /// Get the bound attribute slot, if any.
    pub fn slot(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Authored(slot) | Self::Generated(slot) => Some(*slot),
        }
    }
}

/// A CPU-side mesh: vertex positions plus optional normals,
/// texture-coordinate channels, slot-indexed attribute arrays, and
/// primitive sets.
///
/// Per-vertex arrays are co-indexed with the position array and, when
/// present, must have exactly one entry per vertex. Texture-coordinate
/// channels are shared via `Arc` so that a morph target can borrow its
/// base mesh's channels without copying them.
///
/// # Example
///
/// ```
/// use meshprep_core::mesh::{Mesh, Primitive};
///
/// let mesh = Mesh::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
///     .with_tex_coords(0, vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])
///     .with_primitive(Primitive::triangle_list(vec![0, 1, 2]))
///     .with_name("tri");
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Clone)]
pub struct Mesh {
    name: Option<String>,
    positions: Vec<[f32; 3]>,
    normals: Option<Vec<[f32; 3]>>,
    tex_coords: Vec<Option<Arc<TexCoords>>>,
    attributes: Vec<Option<AttributeArray>>,
    primitives: Vec<Primitive>,
    tangent_binding: TangentBinding,
}

impl Mesh {
    /// Create a mesh from its vertex positions.
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        Self {
            name: None,
            positions,
            normals: None,
            tex_coords: Vec::new(),
            attributes: Vec::new(),
            primitives: Vec::new(),
            tangent_binding: TangentBinding::None,
        }
    }

    /// Set a debug name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set authored per-vertex normals.
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Set the texture coordinates for a channel, growing the channel list
    /// as needed.
    pub fn with_tex_coords(mut self, channel: usize, coords: TexCoords) -> Self {
        self.set_tex_coords(channel, Arc::new(coords));
        self
    }

    /// Add a primitive set.
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Set the attribute array at a slot, growing the slot list as needed.
    pub fn with_attribute(mut self, slot: usize, array: AttributeArray) -> Self {
        self.set_attribute(slot, array);
        self
    }

    /// Set the tangent binding.
    pub fn with_tangent_binding(mut self, binding: TangentBinding) -> Self {
        self.tangent_binding = binding;
        self
    }

    /// Get the debug name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the per-vertex normals, if present.
    pub fn normals(&self) -> Option<&[[f32; 3]]> {
        self.normals.as_deref()
    }

    /// Replace the per-vertex normals.
    pub fn set_normals(&mut self, normals: Vec<[f32; 3]>) {
        self.normals = Some(normals);
    }

    /// Get the texture coordinates of a channel.
    pub fn tex_coords(&self, channel: usize) -> Option<&Arc<TexCoords>> {
        self.tex_coords.get(channel).and_then(|c| c.as_ref())
    }

    /// Set the texture coordinates of a channel, growing the channel list
    /// as needed. Channels at or beyond [`MAX_TEXCOORD_CHANNELS`] are
    /// ignored.
    pub fn set_tex_coords(&mut self, channel: usize, coords: Arc<TexCoords>) {
        if channel >= MAX_TEXCOORD_CHANNELS {
            return;
        }
        if channel >= self.tex_coords.len() {
            self.tex_coords.resize(channel + 1, None);
        }
        self.tex_coords[channel] = Some(coords);
    }

    /// Get the full channel list.
    pub fn tex_coord_channels(&self) -> &[Option<Arc<TexCoords>>] {
        &self.tex_coords
    }

    /// Replace the full channel list.
    ///
    /// Morph-target processing uses this to loan a base mesh's channels to
    /// a target and to restore the target's own list afterwards.
    pub fn set_tex_coord_channels(&mut self, channels: Vec<Option<Arc<TexCoords>>>) {
        self.tex_coords = channels;
    }

    /// Check if any texture-coordinate channel is present.
    pub fn has_tex_coords(&self) -> bool {
        self.tex_coords.iter().any(|c| c.is_some())
    }

    /// Get the attribute array at a slot.
    pub fn attribute(&self, slot: usize) -> Option<&AttributeArray> {
        self.attributes.get(slot).and_then(|a| a.as_ref())
    }

    /// Set the attribute array at a slot, growing the slot list as needed.
    pub fn set_attribute(&mut self, slot: usize, array: AttributeArray) {
        if slot >= self.attributes.len() {
            self.attributes.resize(slot + 1, None);
        }
        self.attributes[slot] = Some(array);
    }

    /// Get the number of attribute slots (including empty ones).
    pub fn attribute_slots(&self) -> usize {
        self.attributes.len()
    }

    /// Get the primitive sets.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the total number of triangles across all primitive sets.
    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(|p| p.triangle_count()).sum()
    }

    /// Get the tangent binding.
    pub fn tangent_binding(&self) -> TangentBinding {
        self.tangent_binding
    }

    /// Set the tangent binding.
    pub fn set_tangent_binding(&mut self, binding: TangentBinding) {
        self.tangent_binding = binding;
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("name", &self.name)
            .field("vertex_count", &self.positions.len())
            .field("has_normals", &self.normals.is_some())
            .field(
                "tex_channels",
                &self.tex_coords.iter().filter(|c| c.is_some()).count(),
            )
            .field("attribute_slots", &self.attributes.len())
            .field("primitives", &self.primitives.len())
            .field("tangent_binding", &self.tangent_binding)
            .finish()
    }
}

/// A base mesh plus morph target variants sharing its topology.
///
/// Targets may omit their own texture coordinates; processing loans them
/// the base's channels for the duration of tangent generation.
#[derive(Debug, Clone)]
pub struct MorphMesh {
    base: Mesh,
    targets: Vec<Mesh>,
}

impl MorphMesh {
    /// Create a morphing mesh from its base.
    pub fn new(base: Mesh) -> Self {
        Self {
            base,
            targets: Vec::new(),
        }
    }

    /// Add a morph target.
    pub fn with_target(mut self, target: Mesh) -> Self {
        self.targets.push(target);
        self
    }

    /// Get the base mesh.
    pub fn base(&self) -> &Mesh {
        &self.base
    }

    /// Get the base mesh mutably.
    pub fn base_mut(&mut self) -> &mut Mesh {
        &mut self.base
    }

    /// Get the morph targets.
    pub fn targets(&self) -> &[Mesh] {
        &self.targets
    }

    /// Get the morph targets mutably.
    pub fn targets_mut(&mut self) -> &mut [Mesh] {
        &mut self.targets
    }
}

/// A mesh as it arrives from the authoring pipeline: either standalone or
/// a morphing composite.
#[derive(Debug, Clone)]
pub enum SceneMesh {
    /// A standalone mesh.
    Static(Mesh),
    /// A base mesh plus morph targets.
    Morph(MorphMesh),
}

impl SceneMesh {
    /// Get the debug name (a morph composite reports its base's name).
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Static(mesh) => mesh.name(),
            Self::Morph(morph) => morph.base().name(),
        }
    }
}
