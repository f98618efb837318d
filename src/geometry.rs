//! Vector helpers for ranking catalog directions against an arbitrary
//! incident direction.
//!
//! These never operate on observation angles; theta/phi distances live in
//! [`crate::sample`].

use num_traits::Float;

/// 3D dot product.
#[inline]
pub fn dot<T: Float>(a: [T; 3], b: [T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean length.
#[inline]
pub fn norm<T: Float>(v: [T; 3]) -> T {
    dot(v, v).sqrt()
}

/// Cosine distance `1 - cos(angle)` between two vectors, in `[0, 2]`.
///
/// Magnitude-invariant, so neither input needs to be normalized.
/// A zero-length input produces NaN; callers decide what that means.
#[inline]
pub fn cosine_distance<T: Float>(a: [T; 3], b: [T; 3]) -> T {
    T::one() - dot(a, b) / (norm(a) * norm(b))
}

/// Convert spherical coordinates (angles in degrees) to cartesian,
/// with `theta` measured from +z and `phi` from +x toward +y.
#[inline]
pub fn spherical_to_cartesian<T: Float>(radius: T, theta_deg: T, phi_deg: T) -> [T; 3] {
    let (sin_t, cos_t) = theta_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = phi_deg.to_radians().sin_cos();
    [
        radius * sin_t * cos_p,
        radius * sin_t * sin_p,
        radius * cos_t,
    ]
}
