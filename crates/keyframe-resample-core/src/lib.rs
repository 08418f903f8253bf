#![allow(dead_code)]
//! Streaming keyframe-track decimation (engine-agnostic).
//!
//! Losslessly — within a numeric tolerance — removes keyframes that are
//! reconstructible from their neighbors under STEP, LINEAR, or
//! spherical-linear interpolation. Arbitrarily long tracks are fed through
//! a fixed-capacity [`Arena`] in chunks; a carry step re-opens each chunk's
//! tail so the output is identical to an unbounded pass regardless of
//! arena capacity.
//!
//! Layers, leaves first:
//! - [`kernel`]: in-place compaction passes and the boundary carry.
//! - [`arena`]: the fixed scratch buffer, split per element size into a
//!   frames window and a values window.
//! - [`stream`]: the chunk loop tying the two together.
//! - [`resample`]: the per-sampler driver (mode dispatch, skip taxonomy,
//!   commit-only-if-shorter).

pub mod arena;
pub mod config;
pub mod element;
pub mod error;
pub mod interp;
pub mod kernel;
pub mod normalize;
pub mod resample;
pub mod stream;

// Re-exports for consumers.
pub use arena::{Arena, ArenaWindows, DEFAULT_CAPACITY, MIN_CHUNK};
pub use config::{ResampleConfig, DEFAULT_TOLERANCE};
pub use element::{ElementKind, Interpolation};
pub use error::ResampleError;
pub use kernel::{carry_tail, resample_chunk, KernelPass};
pub use normalize::ComponentType;
pub use resample::{
    export_stats_json, resample_animation, resample_sampler, Outcome, ResampleStats, TargetPath,
    TrackSampler,
};
pub use stream::resample_stream;
