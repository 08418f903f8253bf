#![allow(dead_code)]
//! Resample configuration.
//!
//! An explicit, immutable value passed into the stream at call time; there
//! is no shared defaults record to merge against.

use serde::{Deserialize, Serialize};

use crate::normalize::ComponentType;

/// Default reconstruction tolerance: machine epsilon for f32
/// (1.1920928955078125e-07).
pub const DEFAULT_TOLERANCE: f32 = f32::EPSILON;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Non-negative tolerance for approximate equality of raw vs.
    /// reconstructed values, compared per component.
    pub tolerance: f32,
    /// When set, value storage is widened integer data of this component
    /// type; the stream de/renormalizes around each kernel pass.
    #[serde(default)]
    pub normalize: Option<ComponentType>,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            normalize: None,
        }
    }
}
