//! Generic per-vertex attribute arrays.
//!
//! Besides the fixed fields (positions, normals, texture coordinates), a
//! [`Mesh`](super::Mesh) carries extra per-vertex data such as tangents,
//! colors, or skin weights in slot-indexed [`AttributeArray`]s. Entries are
//! homogeneous fixed-arity float vectors, co-indexed with the vertex list.

/// How an attribute array maps onto a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeBinding {
    /// One entry per vertex, co-indexed with positions.
    #[default]
    PerVertex,
    /// A single entry applying to the whole mesh.
    Overall,
}

/// Typed storage for one attribute array.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    /// One float per entry.
    Scalar(Vec<f32>),
    /// Two floats per entry.
    Vec2(Vec<[f32; 2]>),
    /// Three floats per entry.
    Vec3(Vec<[f32; 3]>),
    /// Four floats per entry.
    Vec4(Vec<[f32; 4]>),
}

impl AttributeData {
    /// Get the number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(v) => v.len(),
            Self::Vec2(v) => v.len(),
            Self::Vec3(v) => v.len(),
            Self::Vec4(v) => v.len(),
        }
    }

    /// Check if the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of float components per entry.
    pub fn arity(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vec2(_) => 2,
            Self::Vec3(_) => 3,
            Self::Vec4(_) => 4,
        }
    }

    /// Raw byte view of the packed float data, in the form the GPU-upload
    /// side consumes.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Scalar(v) => bytemuck::cast_slice(v),
            Self::Vec2(v) => bytemuck::cast_slice(v),
            Self::Vec3(v) => bytemuck::cast_slice(v),
            Self::Vec4(v) => bytemuck::cast_slice(v),
        }
    }

    /// View the entries as scalars, if that is the stored arity.
    pub fn as_scalar(&self) -> Option<&[f32]> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// View the entries as 2-component vectors, if that is the stored arity.
    pub fn as_vec2(&self) -> Option<&[[f32; 2]]> {
        match self {
            Self::Vec2(v) => Some(v),
            _ => None,
        }
    }

    /// View the entries as 3-component vectors, if that is the stored arity.
    pub fn as_vec3(&self) -> Option<&[[f32; 3]]> {
        match self {
            Self::Vec3(v) => Some(v),
            _ => None,
        }
    }

    /// View the entries as 4-component vectors, if that is the stored arity.
    pub fn as_vec4(&self) -> Option<&[[f32; 4]]> {
        match self {
            Self::Vec4(v) => Some(v),
            _ => None,
        }
    }
}

/// One attribute array plus its binding.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArray {
    data: AttributeData,
    binding: AttributeBinding,
}

impl AttributeArray {
    /// Create an attribute array with an explicit binding.
    pub fn new(data: AttributeData, binding: AttributeBinding) -> Self {
        Self { data, binding }
    }

    /// Create a per-vertex attribute array.
    pub fn per_vertex(data: AttributeData) -> Self {
        Self {
            data,
            binding: AttributeBinding::PerVertex,
        }
    }

    /// Get the typed data.
    pub fn data(&self) -> &AttributeData {
        &self.data
    }

    /// Get the binding.
    pub fn binding(&self) -> AttributeBinding {
        self.binding
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw byte view of the packed float data.
    pub fn bytes(&self) -> &[u8] {
        self.data.bytes()
    }
}
