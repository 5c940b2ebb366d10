// src/config.rs
//! Configuration for array resize behavior

/// How [`resize`](crate::GrowableArray::resize) treats the existing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Every resize allocates a fresh buffer of exactly `n + 1` slots.
    ///
    /// Capacity always tracks the last requested length, at the cost of one
    /// allocation and copy per call.
    #[default]
    Reallocate,
    /// Requests that fit in the current capacity only move the length.
    ///
    /// Larger requests still reallocate to `n + 1` slots. Capacity never
    /// shrinks under this policy.
    InPlace,
}

/// Configuration carried by each array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayConfig {
    /// Resize behavior
    pub resize_policy: ResizePolicy,
}

impl ArrayConfig {
    /// Configuration that reuses the buffer whenever a resize fits.
    pub fn in_place() -> Self {
        Self {
            resize_policy: ResizePolicy::InPlace,
        }
    }

    /// Configuration that reallocates on every resize.
    pub fn reallocating() -> Self {
        Self {
            resize_policy: ResizePolicy::Reallocate,
        }
    }
}
