#![allow(dead_code)]
//! Widened integer storage.
//!
//! glTF animation samplers may store normalized i8/u8/i16/u16 data. Callers
//! widen those integers to f32 verbatim (e.g. `-32768i16` becomes
//! `-32768.0f32`); the stream then denormalizes each chunk into float space
//! before the kernel runs and renormalizes (scale + round) ranges as they
//! are copied back out, so the committed storage stays on the integer grid.

use serde::{Deserialize, Serialize};

/// Value storage component type. Everything but `F32` is normalized
/// integer storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    F32,
    I8,
    U8,
    I16,
    U16,
}

impl ComponentType {
    /// Scale between integer storage and normalized float space.
    #[inline]
    pub(crate) fn scale(self) -> f32 {
        match self {
            ComponentType::F32 => 1.0,
            ComponentType::I8 => 127.0,
            ComponentType::U8 => 255.0,
            ComponentType::I16 => 32767.0,
            ComponentType::U16 => 65535.0,
        }
    }

    #[inline]
    pub(crate) fn is_signed(self) -> bool {
        matches!(self, ComponentType::I8 | ComponentType::I16)
    }
}

/// Integer scale -> float space. Signed types clamp to -1 so the most
/// negative integer maps onto the normalized range.
pub fn denormalize(data: &mut [f32], component: ComponentType) {
    let inv = component.scale().recip();
    if component.is_signed() {
        for v in data.iter_mut() {
            *v = (*v * inv).max(-1.0);
        }
    } else {
        for v in data.iter_mut() {
            *v *= inv;
        }
    }
}

/// Float space -> integer scale, rounded to the nearest representable step.
pub fn normalize(data: &mut [f32], component: ComponentType) {
    let scale = component.scale();
    for v in data.iter_mut() {
        *v = (*v * scale).round();
    }
}
