#![allow(dead_code)]
//! Bounded-memory stream transfer.
//!
//! Feeds arbitrarily long frame/value sequences through the arena in
//! chunks, carrying boundary state so the concatenated output is
//! element-for-element identical to one kernel pass over the whole
//! sequence. Chunk size affects throughput only, never the result.

use crate::arena::Arena;
use crate::config::ResampleConfig;
use crate::error::ResampleError;
use crate::kernel::{carry_tail, resample_chunk, KernelPass};
use crate::normalize;

/// Decimates `frames`/`values` in place through `arena`, returning the kept
/// element count. On success `frames[..kept]` and
/// `values[..kept * element_size]` hold the output; the tails are stale.
/// `KernelPass::Slerp` requires `element_size == 4`.
///
/// Errors are reported before anything is written, so a failed call leaves
/// both slices untouched.
pub fn resample_stream(
    arena: &mut Arena,
    pass: KernelPass,
    element_size: usize,
    frames: &mut [f32],
    values: &mut [f32],
    config: &ResampleConfig,
) -> Result<usize, ResampleError> {
    debug_assert!(pass != KernelPass::Slerp || element_size == 4);
    if element_size == 0 {
        return Err(ResampleError::UnsupportedDimension {
            frames: frames.len(),
            values: values.len(),
        });
    }
    if values.len() != frames.len() * element_size {
        return Err(ResampleError::LengthMismatch {
            frames: frames.len(),
            values: values.len(),
            element_size,
        });
    }

    let w = arena.windows(element_size)?;
    let chunk_size = w.chunk_size;
    let tolerance = config.tolerance;
    let total = frames.len();

    let mut read_offset = 0usize;
    let mut write_offset = 0usize;
    let mut last_write_count = 0usize;
    let mut first_chunk = true;

    while read_offset < total {
        // Re-open the previous chunk's tail: its last element was only
        // tentatively kept (flushed, not interior-tested), so it and its
        // kept left neighbor are replayed in front of the new data.
        let offset = if first_chunk {
            first_chunk = false;
            0
        } else {
            let carried = carry_tail(w.frames, w.values, element_size, last_write_count);
            write_offset -= carried;
            carried
        };

        let fill = (total - read_offset).min(chunk_size - offset);
        w.frames[offset..offset + fill]
            .copy_from_slice(&frames[read_offset..read_offset + fill]);
        let new_values = &mut w.values[offset * element_size..(offset + fill) * element_size];
        new_values.copy_from_slice(
            &values[read_offset * element_size..(read_offset + fill) * element_size],
        );
        if let Some(component) = config.normalize {
            normalize::denormalize(new_values, component);
        }

        let count = offset + fill;
        let write_count = resample_chunk(pass, w.frames, w.values, element_size, count, tolerance);

        // Copy out of the arena only when something moved: either earlier
        // chunks shifted the write cursor behind the read cursor, or this
        // pass changed the element count.
        if write_offset != read_offset || write_count != fill {
            frames[write_offset..write_offset + write_count]
                .copy_from_slice(&w.frames[..write_count]);
            let dst = &mut values
                [write_offset * element_size..(write_offset + write_count) * element_size];
            dst.copy_from_slice(&w.values[..write_count * element_size]);
            if let Some(component) = config.normalize {
                normalize::normalize(dst, component);
            }
        }

        read_offset += fill;
        write_offset += write_count;
        last_write_count = write_count;
    }

    Ok(write_offset)
}
