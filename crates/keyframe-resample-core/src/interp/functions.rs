#![allow(dead_code)]
//! Numeric primitives for the decimation kernel:
//! - scalar/component lerp
//! - per-component tolerance equality
//! - quaternion dot/angle and SLERP with shortest-arc correction
//!
//! Quaternions are `[f32; 4]` in (x, y, z, w) order.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-component `|a - b| <= tolerance`.
#[inline]
pub fn eq_with_tolerance(a: &[f32], b: &[f32], tolerance: f32) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
}

#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Angular distance between two unit quaternions: `acos(2*dot^2 - 1)`.
/// The dot product is clamped so rounding past +/-1 cannot produce NaN.
#[inline]
pub fn quat_angle(a: [f32; 4], b: [f32; 4]) -> f32 {
    let d = dot4(a, b);
    (2.0 * d * d - 1.0).clamp(-1.0, 1.0).acos()
}

/// Spherical-linear interpolation with shortest-arc correction.
///
/// `|cos theta| >= 1` returns the left endpoint; nearly parallel inputs
/// (`cos theta > 0.99999`) fall back to component lerp so the sin(theta)
/// division stays away from zero.
pub fn slerp_quat(from: [f32; 4], to: [f32; 4], t: f32) -> [f32; 4] {
    let mut cos_theta = dot4(from, to);
    let mut q1 = from;

    if cos_theta.abs() >= 1.0 {
        return q1;
    }

    // If cos < 0 the interpolation would take the long way around the
    // sphere; negate one quaternion.
    if cos_theta < 0.0 {
        q1 = [-q1[0], -q1[1], -q1[2], -q1[3]];
        cos_theta = -cos_theta;
    }

    if cos_theta > 0.99999 {
        return [
            lerp_f32(from[0], to[0], t),
            lerp_f32(from[1], to[1], t),
            lerp_f32(from[2], to[2], t),
            lerp_f32(from[3], to[3], t),
        ];
    }

    let angle = cos_theta.acos();
    let sin_theta = angle.sin();
    let s0 = ((1.0 - t) * angle).sin();
    let s1 = (t * angle).sin();
    [
        (q1[0] * s0 + to[0] * s1) / sin_theta,
        (q1[1] * s0 + to[1] * s1) / sin_theta,
        (q1[2] * s0 + to[2] * s1) / sin_theta,
        (q1[3] * s0 + to[3] * s1) / sin_theta,
    ]
}
