//! # dynamic_array
//!
//! `dynamic_array` implements a **growable array** container backed by a single
//! contiguous, exclusively-owned buffer, without building on top of `Vec`.
//!
//! ## Features
//! - Ordered sequence with bounds-checked, index based access.
//! - Insertion and removal at arbitrary positions, shifting the tail in place.
//! - Geometric growth: a full buffer is reallocated to one and a half times its capacity.
//! - In-place comparator based quicksort.
//!
//! ## Bounds
//! Reads are checked against the allocated **capacity**, not the length:
//! a slot that is allocated but does not hold an element reads as `Ok(None)`.
//! Insertions are checked against the length, and removals require an index
//! pointing at a stored element.
//!
//! ## Example
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.push(50);
//! array.push(30);
//! array.insert(1, 70).unwrap();
//!
//! assert_eq!(array.get(0), Ok(Some(&50)));
//! assert_eq!(array.get(1), Ok(Some(&70)));
//! assert_eq!(array.get(2), Ok(Some(&30)));
//!
//! array.quick_sort(|a, b| a.cmp(b));
//! assert_eq!(array, [30, 50, 70]);
//!
//! assert_eq!(array.remove(0), Ok(30));
//! assert_eq!(array.len(), 2);
//! ```

mod error;
mod sort;

pub use error::{Error, Result};

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ptr;

/// Capacity allocated by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A growable array holding its elements in one contiguous buffer.
///
/// # Invariants
/// - Slots `0..len` hold initialized elements with no gaps.
/// - Slots `len..capacity` are allocated but hold no element.
/// - Capacity never shrinks.
///
/// # Example
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut array = DynamicArray::with_capacity(2);
/// array.push(1);
/// array.push(2);
/// array.push(3);
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.capacity(), 3);
/// assert_eq!(array, [1, 2, 3]);
/// ```
pub struct DynamicArray<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T, const M: usize> From<[T; M]> for DynamicArray<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> Extend<&'a T> for DynamicArray<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty `DynamicArray` with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DEFAULT_CAPACITY, DynamicArray};
    ///
    /// let array: DynamicArray<i64> = DynamicArray::new();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `DynamicArray` with exactly `capacity` slots.
    ///
    /// A zero capacity is valid: the buffer is allocated on the first insertion.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::with_capacity(0);
    /// assert_eq!(array.capacity(), 0);
    ///
    /// array.push(42);
    /// assert_eq!(array.get(0), Ok(Some(&42)));
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Creates a new, empty `DynamicArray` from a signed capacity.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `initial_capacity` is negative.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let array = DynamicArray::<i64>::try_with_capacity(5).unwrap();
    /// assert_eq!(array.capacity(), 5);
    ///
    /// assert_eq!(
    ///     DynamicArray::<i64>::try_with_capacity(-1).err(),
    ///     Some(Error::InvalidArgument { capacity: -1 })
    /// );
    /// ```
    pub fn try_with_capacity(initial_capacity: isize) -> Result<Self> {
        usize::try_from(initial_capacity)
            .map(Self::with_capacity)
            .map_err(|_| Error::InvalidArgument {
                capacity: initial_capacity,
            })
    }

    /// Returns a reference to the element stored at `index`.
    ///
    /// The index is checked against the capacity: an allocated slot past the
    /// last element yields `Ok(None)`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if `index >= capacity`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let mut array = DynamicArray::with_capacity(4);
    /// array.push(10);
    ///
    /// assert_eq!(array.get(0), Ok(Some(&10)));
    /// assert_eq!(array.get(3), Ok(None));
    /// assert_eq!(array.get(4), Err(Error::IndexOutOfBounds { index: 4, bound: 4 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.check_capacity(index)?;

        if index < self.len {
            return Ok(Some(unsafe { self.buf[index].assume_init_ref() }));
        }

        Ok(None)
    }

    /// Returns a mutable reference to the element stored at `index`.
    ///
    /// Follows the same bounds as [`DynamicArray::get`].
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2]);
    /// if let Ok(Some(value)) = array.get_mut(1) {
    ///     *value = 20;
    /// }
    ///
    /// assert_eq!(array, [1, 20]);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        self.check_capacity(index)?;

        if index < self.len {
            return Ok(Some(unsafe { self.buf[index].assume_init_mut() }));
        }

        Ok(None)
    }

    /// Appends an element after the last one, growing the buffer if it is full.
    ///
    /// Always returns `true`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// assert!(array.push(10));
    /// assert!(array.push(20));
    ///
    /// assert_eq!(array, [10, 20]);
    /// ```
    pub fn push(&mut self, value: T) -> bool {
        self.grow_if_full();

        self.buf[self.len].write(value);
        self.len += 1;
        true
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if `index > len`; the array is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let mut array = DynamicArray::new();
    /// array.insert(0, 42).unwrap();
    /// array.insert(1, 30).unwrap();
    /// array.insert(1, 20).unwrap();
    ///
    /// assert_eq!(array, [42, 20, 30]);
    /// assert_eq!(array.insert(4, 0), Err(Error::IndexOutOfBounds { index: 4, bound: 3 }));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_len(index, self.len + 1)?;
        self.grow_if_full();

        unsafe {
            let data_ptr = self.buf.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all elements after it to the left.
    ///
    /// The vacated slot at the end stays allocated.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfBounds`] if `index >= len`, which includes every index of an
    ///   empty array; the array is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let mut array = DynamicArray::from([10, 20, 30]);
    ///
    /// assert_eq!(array.remove(1), Ok(20));
    /// assert_eq!(array, [10, 30]);
    /// assert_eq!(array.remove(2), Err(Error::IndexOutOfBounds { index: 2, bound: 2 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_len(index, self.len)?;

        let value = unsafe { self.buf[index].assume_init_read() };

        unsafe {
            // Shift elements from `index + 1` to fill the gap
            let data_ptr = self.buf.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len - index - 1,
            );
        }

        self.len -= 1;
        Ok(value)
    }

    /// Drops every element, keeping the allocated capacity.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3]);
    /// let capacity = array.capacity();
    ///
    /// array.clear();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();

        // Elements are forgotten before being dropped, a panicking destructor leaks the rest
        self.len = 0;
        unsafe { ptr::drop_in_place(elements) }
    }

    /// Sorts the elements in place with `compare`, using a quicksort with a last element pivot.
    ///
    /// An ordering of [`Ordering::Less`] or [`Ordering::Equal`] places the first argument
    /// before, or at the position of, the second one.
    ///
    /// The sort is not stable and runs in `O(n log n)` comparisons on average and `O(n²)` on
    /// already sorted or adversarial input. It recurses once per partition step, so
    /// pathological inputs on very large arrays can exhaust the stack.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([50, 30, 70, 20, 40]);
    /// array.quick_sort(|a, b| a.cmp(b));
    /// assert_eq!(array, [20, 30, 40, 50, 70]);
    ///
    /// array.quick_sort(|a, b| b.cmp(a));
    /// assert_eq!(array, [70, 50, 40, 30, 20]);
    /// ```
    pub fn quick_sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len > 1 {
            sort::quick_sort(self.as_mut_slice(), &mut compare);
        }
    }

    /// Sorts the elements in ascending order, see [`DynamicArray::quick_sort`].
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from(["pear", "apple", "fig"]);
    /// array.sort();
    /// assert_eq!(array, ["apple", "fig", "pear"]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.quick_sort(Ord::cmp);
    }

    /// Returns the number of elements currently stored in the `DynamicArray`.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// array.push(1);
    /// array.push(2);
    ///
    /// assert_eq!(array.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `DynamicArray` is empty.
    ///
    /// # Example
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// assert!(array.is_empty());
    ///
    /// array.push(1);
    /// assert!(!array.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    fn check_capacity(&self, index: usize) -> Result<()> {
        let bound = self.capacity();
        if index >= bound {
            return Err(Error::IndexOutOfBounds { index, bound });
        }

        Ok(())
    }

    /// Checks `index < limit`, reporting the current length as the bound.
    fn check_len(&self, index: usize, limit: usize) -> Result<()> {
        if index >= limit {
            return Err(Error::IndexOutOfBounds {
                index,
                bound: self.len,
            });
        }

        Ok(())
    }

    fn grow_if_full(&mut self) {
        if self.len < self.capacity() {
            return;
        }

        let mut buf = Box::new_uninit_slice(grown_capacity(self.capacity()));

        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
        }

        // The old slots are `MaybeUninit`, dropping the box does not touch the moved elements
        self.buf = buf;
        debug_assert!(self.len < self.capacity());
    }
}

/// One and a half times `capacity`, and at least one slot more.
fn grown_capacity(capacity: usize) -> usize {
    capacity
        .checked_add((capacity / 2).max(1))
        .unwrap_or_else(|| panic!("capacity overflow"))
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut this = Self::with_capacity(self.capacity());
        this.extend(self.as_slice());
        this
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq<&[T]> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T> PartialEq<[T]> for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}

impl<T> PartialOrd for DynamicArray<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for DynamicArray<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for DynamicArray<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> std::fmt::Debug for DynamicArray<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
