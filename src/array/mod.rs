// src/array/mod.rs
//! Growable primitive arrays

mod core;
mod ops;
mod unsafe_ops;

pub use self::core::{Element, GrowableArray};

/// Array of `f64` values.
pub type FloatArray = GrowableArray<f64>;

/// Array of `i32` values.
pub type IntArray = GrowableArray<i32>;
