//! Fixed-capacity slot storage backing `ArrayList`

use alloc::boxed::Box;
use core::{fmt, iter, slice};

/// A fixed-length run of slots, each either holding a `T` or empty.
///
/// The length is chosen at construction and never changes; growing means
/// building a bigger `Array` and moving the values across.
pub struct Array<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Array<T> {
    /// Creates an array of `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        let slots = iter::repeat_with(|| None).take(capacity).collect();
        Self { slots }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the array has no slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value in slot `index`, or `None` if the slot is empty or
    /// past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Mutable counterpart of [`Array::get()`].
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Stores `value` in slot `index` and returns what was there before.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: Option<T>) -> Option<T> {
        core::mem::replace(&mut self.slots[index], value)
    }

    /// Empties slot `index` and returns its previous content.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Returns an iterator over all slots, empty ones included.
    pub fn iter(&self) -> slice::Iter<'_, Option<T>> {
        self.slots.iter()
    }

    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}
