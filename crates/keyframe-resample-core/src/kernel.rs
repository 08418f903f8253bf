#![allow(dead_code)]
//! Decimation kernel: in-place compaction passes over one arena-resident
//! run of keyframes, plus the boundary carry step used between chunks.
//!
//! The scan walks interior indices only (`1..count-1`), deciding each from
//! the last *kept* value on the left and the raw value on the right. Kept
//! entries are copied backward over the gaps left by drops; the last raw
//! keyframe is flushed unconditionally because the scan looks one ahead.

use crate::interp::functions::{eq_with_tolerance, lerp_f32, quat_angle, slerp_quat};

/// Interpolation law a pass reconstructs dropped keyframes with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelPass {
    /// Hold-left; drop values equal to both neighbors within tolerance.
    Step,
    /// Component-wise linear, any element width.
    Lerp,
    /// Spherical-linear over rotation quaternions; element width is 4.
    Slerp,
}

#[inline]
fn element(values: &[f32], size: usize, index: usize) -> &[f32] {
    &values[index * size..(index + 1) * size]
}

#[inline]
fn quat_at(values: &[f32], index: usize) -> [f32; 4] {
    let e = element(values, 4, index);
    [e[0], e[1], e[2], e[3]]
}

fn keep_step(values: &[f32], size: usize, prev: usize, i: usize, tolerance: f32) -> bool {
    let left = element(values, size, prev);
    let mid = element(values, size, i);
    let right = element(values, size, i + 1);
    !eq_with_tolerance(left, mid, tolerance) || !eq_with_tolerance(mid, right, tolerance)
}

fn keep_lerp(values: &[f32], size: usize, prev: usize, i: usize, t: f32, tolerance: f32) -> bool {
    let left = element(values, size, prev);
    let mid = element(values, size, i);
    let right = element(values, size, i + 1);
    for c in 0..size {
        let sample = lerp_f32(left[c], right[c], t);
        if (sample - mid[c]).abs() > tolerance {
            return true;
        }
    }
    false
}

fn keep_slerp(values: &[f32], prev: usize, i: usize, t: f32, tolerance: f32) -> bool {
    let left = quat_at(values, prev);
    let mid = quat_at(values, i);
    let right = quat_at(values, i + 1);
    // Interpolation across (or near) an antipodal pair is ill-defined;
    // never collapse such keyframes.
    if quat_angle(left, mid) + quat_angle(mid, right) + f32::EPSILON > std::f32::consts::PI {
        return true;
    }
    let sample = slerp_quat(left, right, t);
    !eq_with_tolerance(&sample, &mid, tolerance)
}

/// Runs one decimation pass over `count` keyframes held at the front of
/// `frames` / `values`, compacting kept entries toward index 0. Returns the
/// kept count; entries past it are stale and must not be read.
///
/// Index 0 is always kept, and for `count >= 2` the last raw keyframe is
/// always flushed, so the result of a non-trivial run is never shorter
/// than 2.
pub fn resample_chunk(
    pass: KernelPass,
    frames: &mut [f32],
    values: &mut [f32],
    element_size: usize,
    count: usize,
    tolerance: f32,
) -> usize {
    debug_assert!(frames.len() >= count);
    debug_assert!(values.len() >= count * element_size);
    debug_assert!(pass != KernelPass::Slerp || element_size == 4);

    if count == 0 {
        return 0;
    }

    let size = element_size;
    let first_frame = frames[0];
    let last_index = count - 1;
    let mut write_index = 1usize;

    for i in 1..last_index {
        let time = frames[i];
        let time_next = frames[i + 1];

        // Zero-length segments, and a second keyframe duplicating the first
        // frame's time, are dropped without evaluating the keep rule.
        if time == time_next || (i == 1 && time == first_frame) {
            continue;
        }

        let keep = match pass {
            KernelPass::Step => keep_step(values, size, write_index - 1, i, tolerance),
            KernelPass::Lerp => {
                let time_prev = frames[write_index - 1];
                let t = (time - time_prev) / (time_next - time_prev);
                keep_lerp(values, size, write_index - 1, i, t, tolerance)
            }
            KernelPass::Slerp => {
                let time_prev = frames[write_index - 1];
                let t = (time - time_prev) / (time_next - time_prev);
                keep_slerp(values, write_index - 1, i, t, tolerance)
            }
        };

        // In-place compaction.
        if keep {
            if i != write_index {
                frames[write_index] = frames[i];
                values.copy_within(i * size..(i + 1) * size, write_index * size);
            }
            write_index += 1;
        }
    }

    // Flush the last keyframe (the scan looks one ahead).
    if last_index > 0 {
        frames[write_index] = frames[last_index];
        values.copy_within(last_index * size..(last_index + 1) * size, write_index * size);
        write_index += 1;
    }

    write_index
}

/// Boundary carry between chunks: copies the last `min(2, last_write_count)`
/// kept elements to the front of both windows and returns how many were
/// carried. The stream rewinds its write cursor by the same amount so the
/// carried elements — the tentatively flushed tail of the previous chunk and
/// its kept left neighbor — are re-emitted by the next pass, which may now
/// drop the tail against fresh right-hand data.
pub fn carry_tail(
    frames: &mut [f32],
    values: &mut [f32],
    element_size: usize,
    last_write_count: usize,
) -> usize {
    let carry = last_write_count.min(2);
    if carry == 0 {
        return 0;
    }
    let from = last_write_count - carry;
    frames.copy_within(from..last_write_count, 0);
    values.copy_within(from * element_size..last_write_count * element_size, 0);
    carry
}
