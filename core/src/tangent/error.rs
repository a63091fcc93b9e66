//! Error types for tangent-space processing.

/// Errors that can occur while processing a single mesh.
///
/// Each value is fatal to the mesh being processed but never to its batch
/// siblings; the batch entry points collect these per mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TangentError {
    /// The mesh has no vertex positions.
    NoVertices,
    /// The mesh has no triangle-bearing primitive sets.
    NoTriangles,
    /// The selected texture-coordinate channel is not present.
    MissingTexCoords {
        /// Channel index that was selected.
        channel: usize,
    },
    /// The selected channel has a different entry count than the mesh has
    /// vertices.
    TexCoordLengthMismatch {
        /// Channel index that was selected.
        channel: usize,
        /// Expected entry count (the vertex count).
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },
    /// The authored normal array has a different entry count than the mesh
    /// has vertices.
    NormalLengthMismatch {
        /// Expected entry count (the vertex count).
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },
    /// A primitive references a vertex index outside the position array.
    IndexOutOfBounds {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

impl std::fmt::Display for TangentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoVertices => write!(f, "mesh has no vertex positions"),
            Self::NoTriangles => write!(f, "mesh has no triangle primitives"),
            Self::MissingTexCoords { channel } => {
                write!(f, "texture-coordinate channel {channel} is not present")
            }
            Self::TexCoordLengthMismatch {
                channel,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "texture-coordinate channel {channel} has {actual} entries, expected {expected}"
                )
            }
            Self::NormalLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "normal array has {actual} entries, expected {expected}"
                )
            }
            Self::IndexOutOfBounds {
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "primitive index {index} out of bounds for {vertex_count} vertices"
                )
            }
        }
    }
}

impl std::error::Error for TangentError {}
