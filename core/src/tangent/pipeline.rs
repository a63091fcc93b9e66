//! Tangent-space pipeline.
//!
//! [`TangentProcessor`] wraps the raw accumulation pass with the policy a
//! scene importer needs:
//!
//! 1. Meshes with authored tangents are skipped untouched.
//! 2. A texture-coordinate channel is picked per mesh (the configured one
//!    if present, else the first present channel).
//! 3. The accumulation pass runs over all primitive sets.
//! 4. Meshes without authored normals adopt the accumulated face normals.
//! 5. Per vertex, the tangent is orthogonalized against the normal and a
//!    handedness sign is derived, stored as `[x, y, z, sign]`.
//! 6. The array is attached as a per-vertex attribute and the mesh is
//!    marked so a second pass regenerates into the same slot.
//!
//! Morph composites process the base first; targets without texture
//! coordinates of their own borrow the base's channels for the duration of
//! their processing and keep their persisted state unchanged.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::math::normalize_or_zero;
use crate::mesh::{
    AttributeArray, AttributeData, MAX_TEXCOORD_CHANNELS, Mesh, MorphMesh, SceneMesh,
    TangentBinding, TexCoords,
};
use crate::profiling::{profile_function, profile_scope, profile_scope_dynamic};

use super::error::TangentError;
use super::generator::{self, TangentAccumulation};

/// Outcome of processing one mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TangentStatus {
    /// Tangents were generated and attached.
    Generated {
        /// Attribute slot the tangent array was stored in.
        slot: usize,
        /// Texture-coordinate channel the tangents were derived from.
        channel: usize,
    },
    /// The mesh already carries authored tangents; nothing was touched.
    SkippedAuthored,
    /// No texture-coordinate channel is present; nothing was attached.
    SkippedNoTexCoords,
}

/// Per-mesh outcome: a status on success, a diagnosable failure otherwise.
pub type MeshResult = Result<TangentStatus, TangentError>;

/// Outcome of processing a [`MorphMesh`].
#[derive(Debug, Clone)]
pub struct MorphReport {
    /// Result for the base mesh.
    pub base: MeshResult,
    /// Result per morph target, in target order.
    pub targets: Vec<MeshResult>,
}

impl MorphReport {
    /// Check that the base and every target succeeded.
    pub fn is_ok(&self) -> bool {
        self.base.is_ok() && self.targets.iter().all(|r| r.is_ok())
    }
}

/// Outcome of processing one [`SceneMesh`].
#[derive(Debug, Clone)]
pub enum MeshReport {
    /// Report for a standalone mesh.
    Static(MeshResult),
    /// Report for a morph composite.
    Morph(MorphReport),
}

impl MeshReport {
    /// Check that every contained result succeeded.
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Static(result) => result.is_ok(),
            Self::Morph(report) => report.is_ok(),
        }
    }
}

/// Drives tangent-space generation over meshes.
///
/// Construction is cheap and a processor carries no per-mesh state, so one
/// instance can be reused across any number of meshes. The preferred
/// texture-coordinate channel defaults to 0.
///
/// # Example
///
/// ```
/// use meshprep_core::mesh::generators::generate_quad;
/// use meshprep_core::tangent::{TangentProcessor, TangentStatus};
///
/// let mut quad = generate_quad(0.5, 0.5);
/// let status = TangentProcessor::new().process_mesh(&mut quad).unwrap();
/// assert_eq!(status, TangentStatus::Generated { slot: 0, channel: 0 });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TangentProcessor {
    tex_channel: usize,
}

impl TangentProcessor {
    /// Create a processor preferring texture-coordinate channel 0.
    pub fn new() -> Self {
        Self { tex_channel: 0 }
    }

    /// Set the preferred texture-coordinate channel.
    #[must_use]
    pub fn with_tex_channel(mut self, channel: usize) -> Self {
        self.tex_channel = channel;
        self
    }

    /// Get the preferred texture-coordinate channel.
    pub fn tex_channel(&self) -> usize {
        self.tex_channel
    }

    /// Process a scene mesh, branching on its variant.
    pub fn process(&self, mesh: &mut SceneMesh) -> MeshReport {
        match mesh {
            SceneMesh::Static(mesh) => MeshReport::Static(self.process_mesh(mesh)),
            SceneMesh::Morph(morph) => MeshReport::Morph(self.process_morph(morph)),
        }
    }

    /// Process a batch of scene meshes.
    ///
    /// One mesh's failure never aborts its siblings; reports come back in
    /// input order.
    pub fn process_batch(&self, meshes: &mut [SceneMesh]) -> Vec<MeshReport> {
        profile_function!();
        let mut reports = Vec::with_capacity(meshes.len());
        for mesh in meshes.iter_mut() {
            profile_scope_dynamic!(mesh.name().unwrap_or("scene_mesh"));
            reports.push(self.process(mesh));
        }
        reports
    }

    /// Process one standalone mesh.
    pub fn process_mesh(&self, mesh: &mut Mesh) -> MeshResult {
        profile_function!();

        // Authored tangents take precedence over anything we could derive.
        if let TangentBinding::Authored(slot) = mesh.tangent_binding() {
            if mesh.attribute(slot).is_some() {
                log::debug!(
                    "mesh '{}': tangents already authored at slot {}, skipping",
                    display_name(mesh),
                    slot
                );
                return Ok(TangentStatus::SkippedAuthored);
            }
            // The binding points at an empty slot. Regenerate into it.
            log::warn!(
                "mesh '{}': authored tangent binding points at empty slot {}, regenerating",
                display_name(mesh),
                slot
            );
        }

        let channel = match self.select_channel(mesh) {
            Some(channel) => channel,
            None => {
                log::debug!(
                    "mesh '{}': no texture coordinates, skipping tangent generation",
                    display_name(mesh)
                );
                return Ok(TangentStatus::SkippedNoTexCoords);
            }
        };

        let acc = generator::generate(mesh, channel)?;

        // A mesh without authored normals adopts the accumulated face
        // normals as its per-vertex directions.
        if mesh.normals().is_none() {
            let normals: Vec<[f32; 3]> = acc
                .normals
                .iter()
                .map(|n| normalize_or_zero(*n).into())
                .collect();
            mesh.set_normals(normals);
        }

        let tangents = orthogonalize(&acc);

        let slot = mesh
            .tangent_binding()
            .slot()
            .unwrap_or_else(|| mesh.attribute_slots());
        mesh.set_attribute(
            slot,
            AttributeArray::per_vertex(AttributeData::Vec4(tangents)),
        );
        mesh.set_tangent_binding(TangentBinding::Generated(slot));

        log::debug!(
            "mesh '{}': generated tangents from channel {} into slot {}",
            display_name(mesh),
            channel,
            slot
        );
        Ok(TangentStatus::Generated { slot, channel })
    }

    /// Process a morph composite: the base first, then every target.
    ///
    /// Targets without texture coordinates of their own are loaned the
    /// base's channels for the duration of their processing; the loan is
    /// returned even when a target fails.
    pub fn process_morph(&self, morph: &mut MorphMesh) -> MorphReport {
        profile_function!();

        let base = self.process_mesh(morph.base_mut());
        let base_channels = morph.base().tex_coord_channels().to_vec();

        let mut targets = Vec::with_capacity(morph.targets().len());
        for target in morph.targets_mut() {
            let result = if target.has_tex_coords() {
                self.process_mesh(target)
            } else {
                let mut loan = TexCoordLoan::new(target, base_channels.clone());
                self.process_mesh(&mut loan)
            };
            targets.push(result);
        }

        MorphReport { base, targets }
    }

    /// Pick the texture-coordinate channel for a mesh: the preferred one
    /// if present, else the first present channel.
    fn select_channel(&self, mesh: &Mesh) -> Option<usize> {
        if mesh.tex_coords(self.tex_channel).is_some() {
            return Some(self.tex_channel);
        }
        (0..MAX_TEXCOORD_CHANNELS)
            .filter(|&channel| channel != self.tex_channel)
            .find(|&channel| mesh.tex_coords(channel).is_some())
    }
}

/// Per-vertex post-process over the raw accumulation: orthogonalize the
/// tangent against the normal and derive the handedness sign.
///
/// The sign comes from the raw, unorthogonalized tangent so that heavily
/// skewed UV mappings keep the handedness of their source data.
fn orthogonalize(acc: &TangentAccumulation) -> Vec<[f32; 4]> {
    profile_scope!("orthogonalize");

    let mut out = Vec::with_capacity(acc.tangents.len());
    for i in 0..acc.tangents.len() {
        let n = normalize_or_zero(acc.normals[i]);
        let t = acc.tangents[i];
        let b = acc.bitangents[i];

        let ortho = normalize_or_zero(t - n * n.dot(&t));

        // Shaders reconstruct the bitangent as sign * cross(n, t).
        let sign = if n.cross(&t).dot(&b) < 0.0 { -1.0 } else { 1.0 };

        out.push([ortho.x, ortho.y, ortho.z, sign]);
    }
    out
}

fn display_name(mesh: &Mesh) -> &str {
    mesh.name().unwrap_or("unnamed")
}

/// Scoped loan of a texture-coordinate channel list onto a mesh.
///
/// Installs the loaned channels on creation and restores the mesh's own
/// list when dropped, so the mesh's persisted state is unchanged on every
/// exit path.
struct TexCoordLoan<'a> {
    mesh: &'a mut Mesh,
    original: Vec<Option<Arc<TexCoords>>>,
}

impl<'a> TexCoordLoan<'a> {
    fn new(mesh: &'a mut Mesh, loaned: Vec<Option<Arc<TexCoords>>>) -> Self {
        let original = mesh.tex_coord_channels().to_vec();
        mesh.set_tex_coord_channels(loaned);
        Self { mesh, original }
    }
}

impl Deref for TexCoordLoan<'_> {
    type Target = Mesh;

    fn deref(&self) -> &Mesh {
        self.mesh
    }
}

impl DerefMut for TexCoordLoan<'_> {
    fn deref_mut(&mut self) -> &mut Mesh {
        self.mesh
    }
}

impl Drop for TexCoordLoan<'_> {
    fn drop(&mut self) {
        self.mesh
            .set_tex_coord_channels(std::mem::take(&mut self.original));
    }
}
