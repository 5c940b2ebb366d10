// src/array/core.rs
//! Core array structure: construction, resize, append and clear
//!
//! This module provides the [`GrowableArray`] type, a length-tracked wrapper
//! over an owned contiguous buffer whose raw pointer is always reachable.

use crate::config::{ArrayConfig, ResizePolicy};
use crate::error::{ArrayError, Result};
use std::fmt;
use std::mem::size_of;
use std::ptr;
use zeroize::{DefaultIsZeroes, Zeroize};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
}

/// Primitive element types an array can hold.
///
/// Implemented for `f64` and `i32` only. The zero value produced by
/// [`Default`] is what [`GrowableArray::clear`] writes over live slots.
pub trait Element: sealed::Sealed + DefaultIsZeroes + PartialEq + fmt::Display + fmt::Debug {}

impl Element for f64 {}
impl Element for i32 {}

/// A growable array of primitive values with direct buffer access.
///
/// The buffer always holds `capacity` initialized slots. Slots past
/// [`len`](Self::len) are padding: zero after a plain resize, the fill value
/// after a filled resize, or stale values after a shrink.
///
/// # Buffer pointers
///
/// [`as_ptr`](Self::as_ptr) and [`as_mut_ptr`](Self::as_mut_ptr) stay valid
/// until the next resize, append, clear or `clone_from` on the same array.
///
/// # Examples
///
/// ```
/// use ctvec::FloatArray;
///
/// let mut a = FloatArray::with_len_filled(3, 5.0);
/// a.append(7.0);
/// assert_eq!(a.as_slice(), &[5.0, 5.0, 5.0, 7.0]);
///
/// a.resize(2);
/// assert_eq!(a.to_string(), "<5, 5>");
/// ```
#[derive(Clone)]
pub struct GrowableArray<T: Element> {
    /// Backing storage; `None` exactly when capacity is 0
    pub(crate) data: Option<Box<[T]>>,
    /// Number of live elements
    pub(crate) len: usize,
    pub(crate) config: ArrayConfig,
}

impl<T: Element> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

/// Largest element count whose byte size fits in `isize`.
#[inline(always)]
fn max_slots<T>() -> usize {
    isize::MAX as usize / size_of::<T>()
}

/// Slot count for a logical length of `n`: one padding slot past the end.
///
/// Saturates at `usize::MAX`, which is always past [`max_slots`].
#[inline]
fn slots_for(n: usize) -> usize {
    n.saturating_add(1)
}

#[inline]
fn allocate<T: Element>(slots: usize, fill: T) -> Box<[T]> {
    if slots > max_slots::<T>() {
        capacity_overflow();
    }
    vec![fill; slots].into_boxed_slice()
}

fn try_allocate<T: Element>(slots: usize, fill: T) -> Result<Box<[T]>> {
    if slots > max_slots::<T>() {
        return Err(ArrayError::CapacityOverflow { requested: slots });
    }
    let mut data = Vec::new();
    // Layout overflow is ruled out above, so a failed reservation is the allocator refusing.
    data.try_reserve_exact(slots)
        .map_err(|_| ArrayError::AllocationFailed { requested: slots })?;
    data.resize(slots, fill);
    Ok(data.into_boxed_slice())
}

impl<T: Element> GrowableArray<T> {
    /// Creates an empty array with no buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::IntArray;
    ///
    /// let a = IntArray::new();
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 0);
    /// assert!(a.as_ptr().is_null());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: None,
            len: 0,
            config: ArrayConfig {
                resize_policy: ResizePolicy::Reallocate,
            },
        }
    }

    /// Creates an empty array that resizes according to `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::{ArrayConfig, FloatArray};
    ///
    /// let mut a = FloatArray::with_config(ArrayConfig::in_place());
    /// a.resize(100);
    /// a.resize(10);
    /// assert_eq!(a.capacity(), 101);
    /// ```
    #[inline]
    pub const fn with_config(config: ArrayConfig) -> Self {
        Self {
            data: None,
            len: 0,
            config,
        }
    }

    /// Creates an array of `n` elements with one padding slot.
    ///
    /// The elements carry no particular value; in practice they are zero.
    ///
    /// # Panics
    ///
    /// Panics if `n + 1` slots overflow the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::FloatArray;
    ///
    /// let a = FloatArray::with_len(8);
    /// assert_eq!(a.len(), 8);
    /// assert_eq!(a.capacity(), 9);
    /// ```
    pub fn with_len(n: usize) -> Self {
        let mut array = Self::new();
        array.resize(n);
        array
    }

    /// Creates an array of `n` copies of `value`.
    ///
    /// All `n + 1` slots, padding included, hold `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::IntArray;
    ///
    /// let a = IntArray::with_len_filled(3, -1);
    /// assert_eq!(a.as_slice(), &[-1, -1, -1]);
    /// ```
    pub fn with_len_filled(n: usize, value: T) -> Self {
        let mut array = Self::new();
        array.resize_filled(n, value);
        array
    }

    /// Fallible form of [`with_len`](Self::with_len).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if `n + 1` slots cannot be
    /// represented, or [`ArrayError::AllocationFailed`] if the allocator
    /// refuses the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::{ArrayError, FloatArray};
    ///
    /// assert!(FloatArray::try_with_len(4).is_ok());
    /// assert!(matches!(
    ///     FloatArray::try_with_len(usize::MAX),
    ///     Err(ArrayError::CapacityOverflow { .. })
    /// ));
    /// ```
    pub fn try_with_len(n: usize) -> Result<Self> {
        let mut array = Self::new();
        array.try_resize(n)?;
        Ok(array)
    }

    /// Fallible form of [`with_len_filled`](Self::with_len_filled).
    ///
    /// # Errors
    ///
    /// Same as [`try_with_len`](Self::try_with_len).
    pub fn try_with_len_filled(n: usize, value: T) -> Result<Self> {
        let mut array = Self::new();
        array.try_resize_filled(n, value)?;
        Ok(array)
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no live elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::IntArray;
    ///
    /// let mut a = IntArray::with_len(0);
    /// for v in 1..=3 {
    ///     a.append(v);
    /// }
    /// assert_eq!(a.len(), 3);
    /// assert!(a.capacity() >= 4);
    /// ```
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns the configuration this array resizes with.
    #[inline]
    pub fn config(&self) -> ArrayConfig {
        self.config
    }

    /// Returns a raw pointer to the first slot, or null when capacity is 0.
    ///
    /// The pointer is valid for `capacity()` reads until the next mutating
    /// call on this array.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.data.as_deref() {
            Some(data) => data.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Returns a mutable raw pointer to the first slot, or null when capacity is 0.
    ///
    /// The pointer is valid for `capacity()` reads and writes until the next
    /// mutating call on this array.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::FloatArray;
    ///
    /// let mut a = FloatArray::with_len(2);
    /// let p = a.as_mut_ptr();
    /// unsafe {
    ///     p.write(1.5);
    ///     p.add(1).write(2.5);
    /// }
    /// assert_eq!(a.as_slice(), &[1.5, 2.5]);
    /// ```
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.data.as_deref_mut() {
            Some(data) => data.as_mut_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.data.as_deref() {
            Some(data) => &data[..self.len],
            None => &[],
        }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        match self.data.as_deref_mut() {
            Some(data) => &mut data[..len],
            None => &mut [],
        }
    }

    /// Copies the live elements into a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Every allocated slot, padding included.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        match self.data.as_deref_mut() {
            Some(data) => data,
            None => &mut [],
        }
    }

    /// Whether a resize to `n` can reuse the current buffer.
    #[inline]
    fn fits_in_place(&self, n: usize) -> bool {
        self.config.resize_policy == ResizePolicy::InPlace && n < self.capacity()
    }

    /// Installs `fresh` as the buffer, carrying over the common prefix.
    fn install(&mut self, mut fresh: Box<[T]>, len: usize) {
        let keep = len.min(self.len);
        if let Some(old) = self.data.as_deref() {
            fresh[..keep].copy_from_slice(&old[..keep]);
        }
        self.data = Some(fresh);
        self.len = len;
    }

    /// Sets the length to `n`, preserving the first `min(n, len())` elements.
    ///
    /// With the default [`ResizePolicy::Reallocate`] this always allocates a
    /// fresh buffer of `n + 1` slots, even when shrinking. Under
    /// [`ResizePolicy::InPlace`] requests that fit only move the length.
    ///
    /// # Panics
    ///
    /// Panics if `n + 1` slots overflow the maximum allocation size.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::FloatArray;
    ///
    /// let mut a = FloatArray::from(vec![1.0, 2.0, 3.0]);
    /// a.resize(2);
    /// assert_eq!(a.as_slice(), &[1.0, 2.0]);
    /// assert_eq!(a.capacity(), 3);
    /// ```
    pub fn resize(&mut self, n: usize) {
        if self.fits_in_place(n) {
            self.len = n;
            return;
        }
        self.install(allocate(slots_for(n), T::default()), n);
    }

    /// Sets the length to `n`, filling every new slot with `value`.
    ///
    /// The preserved prefix keeps its values; every other slot, padding
    /// included, holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::IntArray;
    ///
    /// let mut a = IntArray::from(vec![1, 2]);
    /// a.resize_filled(4, 9);
    /// assert_eq!(a.as_slice(), &[1, 2, 9, 9]);
    /// ```
    pub fn resize_filled(&mut self, n: usize, value: T) {
        if self.fits_in_place(n) {
            let keep = n.min(self.len);
            self.slots_mut()[keep..].fill(value);
            self.len = n;
            return;
        }
        self.install(allocate(slots_for(n), value), n);
    }

    /// Fallible form of [`resize`](Self::resize).
    ///
    /// On error the array is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`].
    pub fn try_resize(&mut self, n: usize) -> Result<()> {
        if self.fits_in_place(n) {
            self.len = n;
            return Ok(());
        }
        let fresh = try_allocate(slots_for(n), T::default())?;
        self.install(fresh, n);
        Ok(())
    }

    /// Fallible form of [`resize_filled`](Self::resize_filled).
    ///
    /// On error the array is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`].
    pub fn try_resize_filled(&mut self, n: usize, value: T) -> Result<()> {
        if self.fits_in_place(n) {
            let keep = n.min(self.len);
            self.slots_mut()[keep..].fill(value);
            self.len = n;
            return Ok(());
        }
        let fresh = try_allocate(slots_for(n), value)?;
        self.install(fresh, n);
        Ok(())
    }

    /// Capacity after one growth step: doubled, at least one slot.
    ///
    /// Saturates like [`slots_for`].
    #[inline]
    fn grown_capacity(&self) -> usize {
        self.capacity().saturating_mul(2).max(1)
    }

    /// Appends `value` after the last live element.
    ///
    /// When the buffer is full its capacity doubles (an empty buffer grows
    /// to one slot), so a run of appends costs amortized O(1) each.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::IntArray;
    ///
    /// let mut a = IntArray::new();
    /// a.append(1);
    /// a.append(2);
    /// a.append(3);
    /// assert_eq!(a.as_slice(), &[1, 2, 3]);
    /// assert_eq!(a.capacity(), 4);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            let len = self.len;
            self.install(allocate(self.grown_capacity(), T::default()), len);
        }
        let len = self.len;
        self.slots_mut()[len] = value;
        self.len = len + 1;
    }

    /// Fallible form of [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] or
    /// [`ArrayError::AllocationFailed`] if growth is needed and fails; the
    /// array is then left unchanged.
    pub fn try_append(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            let fresh = try_allocate(self.grown_capacity(), T::default())?;
            let len = self.len;
            self.install(fresh, len);
        }
        let len = self.len;
        self.slots_mut()[len] = value;
        self.len = len + 1;
        Ok(())
    }

    /// Zeroes the live elements, then resizes to length 0.
    ///
    /// Under the default policy the zeroed buffer is released and replaced
    /// by a single padding slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctvec::FloatArray;
    ///
    /// let mut a = FloatArray::with_len_filled(3, 5.0);
    /// a.clear();
    /// assert!(a.is_empty());
    ///
    /// a.append(1.0);
    /// assert_eq!(a[0], 1.0);
    /// ```
    pub fn clear(&mut self) {
        self.as_mut_slice().zeroize();
        self.resize(0);
    }
}

/// Zeroes every allocated slot and drops the length to 0.
///
/// Capacity and the buffer itself are kept.
impl<T: Element> Zeroize for GrowableArray<T> {
    fn zeroize(&mut self) {
        self.slots_mut().zeroize();
        self.len = 0;
    }
}
