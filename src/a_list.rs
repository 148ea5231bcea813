//! A list stored in a backing array that doubles when full

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::array::Array;
use crate::list::{List, OutOfBoundsError};

/// Array-backed list
///
/// Slots `0..size` of the backing array hold the elements in order; the
/// remaining slots are empty. When an insertion finds no free slot the backing
/// array is replaced by one of twice the capacity, so `append` is amortized O(1).
pub struct ArrayList<T> {
    elements: Array<T>,
    size: usize,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Capacity used by [`ArrayList::new()`].
    pub const DEFAULT_CAPACITY: usize = 20;

    /// Creates an empty list with [`Self::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Array::new(capacity),
            size: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the length of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    // swaps in a backing array of twice the capacity when every slot is taken
    fn check_available_space(&mut self) {
        if self.size < self.elements.len() {
            return;
        }
        let old_capacity = self.elements.len();
        // a zero capacity would never grow by doubling
        let new_capacity = old_capacity.saturating_mul(2).max(1);
        let mut grown = Array::new(new_capacity);
        for i in 0..self.size {
            grown.set(i, self.elements.take(i));
        }
        self.elements = grown;
        tracing::debug!(old_capacity, new_capacity, "grew array list backing storage");
    }

    // moves slots [position, size) one slot up, highest first
    fn shift(&mut self, position: usize) {
        for i in (position..self.size).rev() {
            let element = self.elements.take(i);
            self.elements.set(i + 1, element);
        }
    }

    // moves slots (position, size) one slot down, lowest first, leaving slot
    // `size - 1` empty
    fn unshift(&mut self, position: usize) {
        for i in position + 1..self.size {
            let element = self.elements.take(i);
            self.elements.set(i - 1, element);
        }
    }

    /// Appends an element to the back of the list.
    pub fn append(&mut self, element: T) {
        self.check_available_space();
        self.elements.set(self.size, Some(element));
        self.size += 1;
    }

    /// Inserts an element so that it ends up at `position`.
    pub fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfBoundsError> {
        if position > self.size {
            return Err(OutOfBoundsError::new(position, self.size));
        }
        if position == self.size {
            self.append(element);
            return Ok(());
        }

        self.check_available_space();
        self.shift(position);
        self.elements.set(position, Some(element));
        self.size += 1;
        Ok(())
    }

    /// Removes the element at `position` and returns it.
    pub fn remove(&mut self, position: usize) -> Result<T, OutOfBoundsError> {
        if position >= self.size {
            return Err(OutOfBoundsError::new(position, self.size));
        }
        let removed = self
            .elements
            .take(position)
            .ok_or(OutOfBoundsError::new(position, self.size))?;
        self.unshift(position);
        self.size -= 1;
        Ok(removed)
    }

    /// Returns a reference to the element at `position`.
    pub fn get(&self, position: usize) -> Result<&T, OutOfBoundsError> {
        if position >= self.size {
            return Err(OutOfBoundsError::new(position, self.size));
        }
        self.elements
            .get(position)
            .ok_or(OutOfBoundsError::new(position, self.size))
    }

    /// Returns a mutable reference to the element at `position`.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, OutOfBoundsError> {
        let size = self.size;
        if position >= size {
            return Err(OutOfBoundsError::new(position, size));
        }
        self.elements
            .get_mut(position)
            .ok_or(OutOfBoundsError::new(position, size))
    }

    /// Replaces the element at `position` and returns the old one.
    pub fn set(&mut self, position: usize, element: T) -> Result<T, OutOfBoundsError> {
        self.get_mut(position)
            .map(|slot| core::mem::replace(slot, element))
    }

    /// Removes all elements. The capacity is kept.
    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.size, "clearing array list");
        for i in 0..self.size {
            self.elements.take(i);
        }
        self.size = 0;
    }

    /// Returns an iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.elements.slots()[..self.size].iter(),
        }
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let size = self.size;
        IterMut {
            slots: self.elements.slots_mut()[..size].iter_mut(),
        }
    }
}

impl<T> List<T> for ArrayList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn is_empty(&self) -> bool {
        ArrayList::is_empty(self)
    }

    fn append(&mut self, element: T) {
        ArrayList::append(self, element)
    }

    fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfBoundsError> {
        ArrayList::insert(self, position, element)
    }

    fn remove(&mut self, position: usize) -> Result<T, OutOfBoundsError> {
        ArrayList::remove(self, position)
    }

    fn get(&self, position: usize) -> Result<&T, OutOfBoundsError> {
        ArrayList::get(self, position)
    }

    fn set(&mut self, position: usize, element: T) -> Result<T, OutOfBoundsError> {
        ArrayList::set(self, position, element)
    }

    fn clear(&mut self) {
        ArrayList::clear(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        ArrayList::iter(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            size: self.size,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let capacity = iter.size_hint().0.max(Self::DEFAULT_CAPACITY);
        let mut list = Self::with_capacity(capacity);
        list.extend(iter);
        list
    }
}

/// An iterator over the elements of an `ArrayList`.
///
/// The range of slots it visits is fixed when it is created.
pub struct Iter<'a, T: 'a> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // every slot below `size` is occupied
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of an `ArrayList`.
pub struct IterMut<'a, T: 'a> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of an `ArrayList`.
pub struct IntoIter<T> {
    elements: Array<T>,
    cursor: usize,
    size: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor >= self.size {
            return None;
        }
        let element = self.elements.take(self.cursor);
        self.cursor += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            elements: self.elements,
            cursor: 0,
            size: self.size,
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
