//! Math type aliases and helper functions.
//!
//! Provides f32 vector types backed by nalgebra. Mesh data structures keep
//! plain `[f32; N]` arrays at their boundaries; these aliases are for the
//! numeric paths that operate on that data.

pub use nalgebra;

// ===== Vector aliases (always f32) =====

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

// ===== Helper functions =====

/// Normalize a vector, leaving zero-length input as the zero vector.
///
/// Accumulated tangent-space sums can legitimately be zero (isolated
/// vertices, fully degenerate UVs); those must stay zero instead of
/// turning into NaN.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let norm = v.norm();
    if norm > 0.0 {
        v / norm
    } else {
        Vec3::zeros()
    }
}
