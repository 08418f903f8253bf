#![allow(dead_code)]
//! Fixed-capacity scratch arena.
//!
//! Stands in for the kernel's private heap: one contiguous f32 buffer,
//! partitioned per element size into a frames window and a values window.
//! The arena is reused (never reallocated) across chunks and across calls;
//! stale contents are never read before being overwritten. One logical
//! resample pipeline owns the arena at a time — callers wanting parallelism
//! use one arena per worker.

use crate::error::ResampleError;

/// Smallest frames window the stream can make progress with: the carry
/// re-opens up to two kept elements, and each chunk must still admit at
/// least one new raw element.
pub const MIN_CHUNK: usize = 3;

/// Default capacity in f32 elements (64 KiB).
pub const DEFAULT_CAPACITY: usize = 16 * 1024;

#[derive(Debug)]
pub struct Arena {
    buf: Vec<f32>,
}

/// Frame/value windows carved out of the arena for one element size.
#[derive(Debug)]
pub struct ArenaWindows<'a> {
    /// Flat f32 times, `chunk_size` long.
    pub frames: &'a mut [f32],
    /// Flat element-major f32 values, `element_size * chunk_size` long.
    pub values: &'a mut [f32],
    pub chunk_size: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Arena {
    /// `capacity` is in f32 elements, shared by both windows.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0.0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Partition the arena for one element size:
    /// `chunk_size = capacity / (element_size + 1)` frames, followed by
    /// `element_size * chunk_size` value components. Fails when the
    /// partition is too small for the stream to terminate.
    pub fn windows(&mut self, element_size: usize) -> Result<ArenaWindows<'_>, ResampleError> {
        let chunk_size = self.buf.len() / (element_size + 1);
        if chunk_size < MIN_CHUNK {
            return Err(ResampleError::Capacity {
                capacity: self.buf.len(),
                element_size,
                needed: (element_size + 1) * MIN_CHUNK,
            });
        }
        let (frames, rest) = self.buf.split_at_mut(chunk_size);
        let values = &mut rest[..element_size * chunk_size];
        Ok(ArenaWindows {
            frames,
            values,
            chunk_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_recomputed_per_element_size() {
        let mut arena = Arena::new(40);
        let w = arena.windows(1).unwrap();
        assert_eq!(w.chunk_size, 20);
        assert_eq!(w.frames.len(), 20);
        assert_eq!(w.values.len(), 20);

        let w = arena.windows(4).unwrap();
        assert_eq!(w.chunk_size, 8);
        assert_eq!(w.frames.len(), 8);
        assert_eq!(w.values.len(), 32);
    }

    #[test]
    fn undersized_arena_is_rejected() {
        let mut arena = Arena::new(8);
        let err = arena.windows(3).unwrap_err();
        assert_eq!(
            err,
            ResampleError::Capacity {
                capacity: 8,
                element_size: 3,
                needed: 12,
            }
        );
    }
}
