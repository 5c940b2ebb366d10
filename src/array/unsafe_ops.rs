// src/array/unsafe_ops.rs
//! Unchecked (unsafe) element access for hot loops

use super::core::{Element, GrowableArray};

impl<T: Element> GrowableArray<T> {
    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "get_unchecked: index {} >= len {}",
            index,
            self.len
        );

        unsafe { &*self.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "get_unchecked_mut: index {} >= len {}",
            index,
            self.len
        );

        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Writes `value` at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(
            index < self.len,
            "set_unchecked: index {} >= len {}",
            index,
            self.len
        );

        unsafe { self.as_mut_ptr().add(index).write(value) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_matches_checked() {
        let mut a = GrowableArray::from(vec![1.0f64, 2.0, 3.0]);

        unsafe {
            a.set_unchecked(2, 6.0);
            *a.get_unchecked_mut(0) += 1.0;
            assert_eq!(*a.get_unchecked(1), 2.0);
        }

        assert_eq!(a.as_slice(), &[2.0, 2.0, 6.0]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "set_unchecked: index 3 >= len 3")]
    fn test_set_unchecked_debug_message() {
        let mut a = GrowableArray::from(vec![1i32, 2, 3]);
        unsafe { a.set_unchecked(3, 4) };
    }
}
