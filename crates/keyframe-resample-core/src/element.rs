#![allow(dead_code)]
//! Element layouts and interpolation modes for keyframe tracks.

use serde::{Deserialize, Serialize};

/// Closed set of per-keyframe element layouts.
///
/// The decimation algorithm is identical for every variant modulo loop
/// width; `Quat` additionally selects the spherical-linear keep rule when
/// the track is LINEAR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    /// Rotation quaternion (x, y, z, w).
    Quat,
    /// Arbitrary width, e.g. morph-target weights.
    VecN(usize),
}

impl ElementKind {
    /// Number of f32 components per element.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            ElementKind::Scalar => 1,
            ElementKind::Vec2 => 2,
            ElementKind::Vec3 => 3,
            ElementKind::Vec4 => 4,
            ElementKind::Quat => 4,
            ElementKind::VecN(n) => n,
        }
    }

    /// Kind for a declared component count on a non-rotation path.
    /// Zero-width elements have no layout.
    pub fn from_size(size: usize) -> Option<Self> {
        match size {
            0 => None,
            1 => Some(ElementKind::Scalar),
            2 => Some(ElementKind::Vec2),
            3 => Some(ElementKind::Vec3),
            4 => Some(ElementKind::Vec4),
            n => Some(ElementKind::VecN(n)),
        }
    }
}

/// Sampler interpolation mode, as declared in glTF.
/// Only `Step` and `Linear` are eligible for decimation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Interpolation {
    Step,
    Linear,
    CubicSpline,
}
