// src/array/ops.rs
//! Element access, comparison, formatting and conversions

use super::core::{Element, GrowableArray};
use crate::error::{ArrayError, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

impl<T: Element> GrowableArray<T> {
    /// Returns a reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Reads the element at `index` with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::{ArrayError, IntArray};
    ///
    /// let a = IntArray::from(vec![4, 5]);
    /// assert_eq!(a.value(1)?, 5);
    /// assert!(a.value(2).is_err());
    /// # Ok::<(), ArrayError>(())
    /// ```
    #[inline]
    pub fn value(&self, index: usize) -> Result<T> {
        self.get(index).copied().ok_or(ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Writes `value` at `index` with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len;
        let slot = self
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }
}

/// Panics if `index >= len()`.
impl<T: Element> Index<usize> for GrowableArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

/// Panics if `index >= len()`.
impl<T: Element> IndexMut<usize> for GrowableArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

/// Arrays compare equal when their live elements do; padding is ignored.
impl<T: Element> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Renders `<e0, e1, ..., eN>`.
impl<T: Element> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str(">")
    }
}

impl<T: Element> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Element> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_len(values.len());
        array.as_mut_slice().copy_from_slice(values);
        array
    }
}

impl<T: Element> From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from(values.as_slice())
    }
}

impl<T: Element> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Element> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let a = GrowableArray::from(vec![1i32, 2, 3]);
        assert_eq!(a.to_string(), "<1, 2, 3>");

        let b = GrowableArray::from(vec![0.5f64]);
        assert_eq!(b.to_string(), "<0.5>");

        let empty: GrowableArray<f64> = GrowableArray::new();
        assert_eq!(empty.to_string(), "<>");
    }

    #[test]
    fn test_debug() {
        let a = GrowableArray::from(vec![1i32, 2]);
        assert_eq!(
            format!("{:?}", a),
            "GrowableArray { len: 2, capacity: 3, data: [1, 2] }"
        );
    }

    #[test]
    fn test_checked_access() {
        let mut a = GrowableArray::from(vec![1.0f64, 2.0]);
        assert_eq!(a.get(1), Some(&2.0));
        assert_eq!(a.get(2), None);

        a.set(0, 9.0).unwrap();
        assert_eq!(a.value(0).unwrap(), 9.0);
        assert_eq!(
            a.set(5, 1.0),
            Err(ArrayError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_padding_is_not_addressable() {
        let a = GrowableArray::with_len_filled(2, 3i32);
        assert_eq!(a.capacity(), 3);
        assert_eq!(a.get(2), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let a = GrowableArray::from(vec![1i32]);
        let _ = a[1];
    }

    #[test]
    fn test_index_mut() {
        let mut a: GrowableArray<i32> = GrowableArray::with_len(3);
        a[1] = 4;
        assert_eq!(a.as_slice(), &[0, 4, 0]);
    }

    #[test]
    fn test_eq_ignores_padding() {
        let a = GrowableArray::from(vec![1i32, 2]);
        let mut b = GrowableArray::with_len_filled(4, 1i32);
        b.resize(2);
        b[1] = 2;
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_slice_pads() {
        let a = GrowableArray::from(&[3i32, 4][..]);
        assert_eq!(a.len(), 2);
        assert_eq!(a.capacity(), 3);
    }
}
