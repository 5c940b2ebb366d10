// src/lib.rs
//! # Growable Primitive Arrays
//!
//! Thin growable wrappers over contiguous `f64` and `i32` buffers for
//! numeric code that needs array ergonomics and a raw pointer to hand to
//! buffer-oriented APIs.
//!
//! Features:
//! - One generic [`GrowableArray`] with [`FloatArray`] and [`IntArray`] aliases
//! - Raw pointer access to the backing storage (null while nothing is allocated)
//! - Doubling growth on append, deep copy on clone
//! - Checked indexing plus opt-in unchecked access
//! - Zeroing on clear via the `zeroize` crate
//! - Configurable resize policy (always reallocate, or reuse when it fits)
//!
//! ```
//! use ctvec::prelude::*;
//!
//! let mut a = IntArray::with_len(0);
//! a.append(1);
//! a.append(2);
//! a.append(3);
//! assert_eq!(a.to_string(), "<1, 2, 3>");
//! assert!(a.capacity() >= 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod config;
pub mod error;

// Re-export main types
pub use array::{Element, FloatArray, GrowableArray, IntArray};
pub use config::{ArrayConfig, ResizePolicy};
pub use error::{ArrayError, Result, ResultExt};

/// Commonly used imports.
pub mod prelude {
    pub use crate::array::{Element, FloatArray, GrowableArray, IntArray};
    pub use crate::config::{ArrayConfig, ResizePolicy};
    pub use crate::error::{ArrayError, Result, ResultExt};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_float_scenario() {
        let mut a = FloatArray::with_len_filled(3, 5.0);
        assert_eq!(a.as_slice(), &[5.0, 5.0, 5.0]);

        a.append(7.0);
        assert_eq!(a.as_slice(), &[5.0, 5.0, 5.0, 7.0]);
        assert_eq!(a.len(), 4);

        a.resize(2);
        assert_eq!(a.as_slice(), &[5.0, 5.0]);
        assert_eq!(a.len(), 2);

        a.clear();
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn test_int_scenario() {
        let mut a = IntArray::with_len(0);
        a.append(1);
        a.append(2);
        a.append(3);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert!(a.capacity() >= 4);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = FloatArray::from(vec![1.0, 2.0, 3.0]);
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), a.capacity());
        assert_ne!(a.as_ptr(), b.as_ptr());

        b[0] = 10.0;
        assert_eq!(a[0], 1.0);
    }

    #[test]
    fn test_clone_of_empty_has_null_buffer() {
        let a = IntArray::new();
        let b = a.clone();
        assert_eq!(b.capacity(), 0);
        assert!(b.as_ptr().is_null());
    }

    #[test]
    fn test_clone_keeps_config() {
        let a = IntArray::with_config(ArrayConfig::in_place());
        assert_eq!(a.clone().config().resize_policy, ResizePolicy::InPlace);
    }
}
