use core::ops::{Deref, DerefMut};

use super::BufferError;

/// Initial capacity used by [`GrowableBuffer::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Computes the capacity needed to hold `required` elements.
///
/// - `required <= current` keeps `current` (capacity never shrinks)
/// - an empty buffer takes `initial`, or `required` when the hint is smaller
/// - otherwise `current` doubles until it reaches `required`
pub fn grow_capacity(current: usize, required: usize, initial: usize) -> Result<usize, BufferError> {
    if required <= current {
        return Ok(current);
    }

    if current == 0 {
        return Ok(initial.max(required));
    }

    let mut next = current;
    while next < required {
        next = next
            .checked_mul(2)
            .ok_or(BufferError::CapacityOverflow { current, required })?;
    }
    Ok(next)
}

/// Dynamic array with an explicit, monotonic capacity policy.
///
/// `capacity()` reports the policy capacity, which is what the buffer has
/// reserved from the allocator. `len() <= capacity()` always holds.
///
/// Growth goes through [`Vec::try_reserve_exact`], so an allocation failure is
/// reported as [`BufferError::Allocation`] and leaves the contents untouched.
#[derive(Debug)]
pub struct GrowableBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    initial_capacity: usize,
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer with the default initial capacity hint.
    /// Nothing is allocated until the first element arrives.
    #[inline]
    pub const fn new() -> Self {
        Self::with_initial_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty buffer that will jump to `initial_capacity` on first growth.
    #[inline]
    pub const fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            initial_capacity,
        }
    }

    /// Creates a buffer and immediately reserves room for `reserve` elements.
    pub fn with_reserved(reserve: usize, initial_capacity: usize) -> Result<Self, BufferError> {
        let mut buffer = Self::with_initial_capacity(initial_capacity);
        buffer.ensure_capacity(reserve)?;
        Ok(buffer)
    }

    /// Ensures room for at least `required` elements.
    ///
    /// No-op when the capacity already suffices. On error the buffer is unchanged.
    pub fn ensure_capacity(&mut self, required: usize) -> Result<(), BufferError> {
        if size_of::<T>() == 0 {
            return Err(BufferError::ZeroSizedElement);
        }
        if required <= self.capacity {
            return Ok(());
        }

        let next = grow_capacity(self.capacity, required, self.initial_capacity)?;
        let additional = next - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|source| BufferError::Allocation { requested: next, source })?;

        self.capacity = next;
        Ok(())
    }

    /// Appends `value`, growing first if needed.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.ensure_capacity(self.data.len() + 1)?;
        self.data.push(value);
        Ok(())
    }

    /// Grows to `len` elements, filling new slots with `fill()`.
    /// Shorter `len` values truncate; capacity is kept either way.
    pub fn resize_with<F>(&mut self, len: usize, fill: F) -> Result<(), BufferError>
    where
        F: FnMut() -> T,
    {
        self.ensure_capacity(len)?;
        self.data.resize_with(len, fill);
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Drops all elements. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Clone> GrowableBuffer<T> {
    /// Appends every element of `values` with a single growth step.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), BufferError> {
        self.ensure_capacity(self.data.len() + values.len())?;
        self.data.extend_from_slice(values);
        Ok(())
    }
}

impl<T: Clone> Clone for GrowableBuffer<T> {
    /// The copy reserves the same capacity as the original. If the allocator
    /// refuses, the copy reports only the room it really has.
    fn clone(&self) -> Self {
        let mut data = self.data.clone();
        let capacity = match data.try_reserve_exact(self.capacity - data.len()) {
            Ok(()) => self.capacity,
            Err(_) => data.len(),
        };
        Self {
            data,
            capacity,
            initial_capacity: self.initial_capacity,
        }
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowableBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for GrowableBuffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
