#![allow(dead_code)]
//! Interpolation helpers used by the decimation kernel.

pub mod functions;
