#![allow(dead_code)]
//! Per-sampler decimation driver.
//!
//! Selects the kernel variant from the sampler's interpolation mode and
//! semantic path, streams the track through the arena, and commits the
//! truncated storage only when keyframes were actually dropped. Which
//! samplers to offer (e.g. skipping morph-target weights) is caller policy.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::config::ResampleConfig;
use crate::element::{ElementKind, Interpolation};
use crate::error::ResampleError;
use crate::kernel::KernelPass;
use crate::normalize::ComponentType;
use crate::stream::resample_stream;

/// Semantic target of an animation channel, as in glTF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
    Weights,
}

fn default_component() -> ComponentType {
    ComponentType::F32
}

/// One animation sampler's keyframe track, with owned storage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrackSampler {
    pub name: String,
    pub target: TargetPath,
    pub interpolation: Interpolation,
    /// Keyframe times in seconds, assumed monotonic non-decreasing.
    pub times: Vec<f32>,
    /// Flat element-major values, index-parallel with `times`.
    pub values: Vec<f32>,
    /// Declared per-element component count of the value accessor.
    pub element_size: usize,
    /// Storage component type; anything but `F32` is normalized integer
    /// data widened to f32.
    #[serde(default = "default_component")]
    pub component: ComponentType,
}

/// What happened to one sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The track shrank; storage was truncated to the new length.
    Resampled { before: usize, after: usize },
    /// Nothing droppable; storage left untouched.
    Unchanged,
}

/// Element layout for a sampler. LINEAR rotation slerps quaternions;
/// weights derive their width from the value/time cardinality; everything
/// else trusts the declared accessor size.
fn element_kind(sampler: &TrackSampler) -> Result<ElementKind, ResampleError> {
    if sampler.interpolation == Interpolation::Linear && sampler.target == TargetPath::Rotation {
        return Ok(ElementKind::Quat);
    }
    let dimension = ResampleError::UnsupportedDimension {
        frames: sampler.times.len(),
        values: sampler.values.len(),
    };
    let size = if sampler.target == TargetPath::Weights {
        if sampler.times.is_empty() || sampler.values.len() % sampler.times.len() != 0 {
            return Err(dimension);
        }
        sampler.values.len() / sampler.times.len()
    } else {
        sampler.element_size
    };
    ElementKind::from_size(size).ok_or(dimension)
}

/// Decimates one sampler in place through `arena`.
///
/// All error conditions are detected before any mutation, so a failed call
/// leaves the sampler exactly as it was. Normalized storage is rejected
/// unless `config.normalize` opts in with the matching component type.
pub fn resample_sampler(
    sampler: &mut TrackSampler,
    arena: &mut Arena,
    config: &ResampleConfig,
) -> Result<Outcome, ResampleError> {
    match sampler.interpolation {
        Interpolation::Step | Interpolation::Linear => {}
        other => return Err(ResampleError::UnsupportedInterpolation(other)),
    }
    if sampler.component != ComponentType::F32 && config.normalize != Some(sampler.component) {
        return Err(ResampleError::UnsupportedLayout(sampler.component));
    }

    let kind = element_kind(sampler)?;
    let size = kind.size();
    if sampler.values.len() != sampler.times.len() * size {
        return Err(ResampleError::LengthMismatch {
            frames: sampler.times.len(),
            values: sampler.values.len(),
            element_size: size,
        });
    }

    let before = sampler.times.len();
    if before < 2 {
        return Ok(Outcome::Unchanged);
    }

    let pass = match (sampler.interpolation, kind) {
        (Interpolation::Step, _) => KernelPass::Step,
        (Interpolation::Linear, ElementKind::Quat) => KernelPass::Slerp,
        (Interpolation::Linear, _) => KernelPass::Lerp,
        (Interpolation::CubicSpline, _) => unreachable!(),
    };

    // Plain f32 storage never goes through the de/renormalize path, even if
    // the config carries a component tag for sibling tracks.
    let stream_config = if sampler.component == ComponentType::F32 {
        ResampleConfig {
            normalize: None,
            ..*config
        }
    } else {
        *config
    };

    let kept = resample_stream(
        arena,
        pass,
        size,
        &mut sampler.times,
        &mut sampler.values,
        &stream_config,
    )?;

    if kept < before {
        sampler.times.truncate(kept);
        sampler.values.truncate(kept * size);
        Ok(Outcome::Resampled {
            before,
            after: kept,
        })
    } else {
        Ok(Outcome::Unchanged)
    }
}

/// Aggregate frame/byte counts across a batch of samplers.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ResampleStats {
    pub samplers: usize,
    pub skipped: usize,
    pub before_frames: usize,
    pub after_frames: usize,
    pub before_bytes: usize,
    pub after_bytes: usize,
}

/// Runs every sampler through the shared arena. Failures are local: the
/// offending sampler is logged, counted, and left untouched; its siblings
/// still run.
pub fn resample_animation(
    samplers: &mut [TrackSampler],
    arena: &mut Arena,
    config: &ResampleConfig,
) -> ResampleStats {
    let mut stats = ResampleStats::default();
    for sampler in samplers.iter_mut() {
        stats.samplers += 1;
        stats.before_frames += sampler.times.len();
        stats.before_bytes += (sampler.times.len() + sampler.values.len()) * 4;

        match resample_sampler(sampler, arena, config) {
            Ok(_) => {}
            Err(err @ ResampleError::UnsupportedInterpolation(_)) => {
                log::debug!("resample: skipping sampler '{}': {err}", sampler.name);
                stats.skipped += 1;
            }
            Err(err) => {
                log::warn!("resample: skipping sampler '{}': {err}", sampler.name);
                stats.skipped += 1;
            }
        }

        stats.after_frames += sampler.times.len();
        stats.after_bytes += (sampler.times.len() + sampler.values.len()) * 4;
    }
    stats
}

/// Stats as `serde_json::Value` (stable schema for logs and telemetry).
pub fn export_stats_json(stats: &ResampleStats) -> serde_json::Value {
    serde_json::to_value(stats).unwrap_or(serde_json::Value::Null)
}
