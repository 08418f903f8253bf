#![allow(dead_code)]
//! Error taxonomy for track decimation.
//!
//! Every variant is local to one sampler and non-propagating: the driver
//! logs, skips the track unmutated, and moves on to its siblings. The
//! algorithm is deterministic, so there are no retries.

use thiserror::Error;

use crate::element::Interpolation;
use crate::normalize::ComponentType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResampleError {
    /// Arena cannot hold the carry plus one new element for this width.
    #[error("arena capacity {capacity} too small for element size {element_size} (need at least {needed} floats)")]
    Capacity {
        capacity: usize,
        element_size: usize,
        needed: usize,
    },

    #[error("unsupported interpolation {0:?}")]
    UnsupportedInterpolation(Interpolation),

    /// Non-integral or zero element size, e.g. a malformed weights track.
    #[error("unsupported element size: {values} values over {frames} frames")]
    UnsupportedDimension { frames: usize, values: usize },

    /// Normalized or quantized storage the caller did not opt into.
    #[error("unsupported storage layout {0:?}")]
    UnsupportedLayout(ComponentType),

    /// times/values cardinality disagrees with the declared element size.
    #[error("values length {values} is not frames length {frames} x element size {element_size}")]
    LengthMismatch {
        frames: usize,
        values: usize,
        element_size: usize,
    },
}
