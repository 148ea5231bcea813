//! The list contract shared by both list variants

use thiserror::Error;

/// Returned when a position falls outside the range an operation accepts.
///
/// `insert` accepts `0..=size`, every other position-taking operation accepts `0..size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {position} is out of bounds for list of size {size}")]
pub struct OutOfBoundsError {
    /// The rejected position.
    pub position: usize,
    /// The list size at the time of the call.
    pub size: usize,
}

impl OutOfBoundsError {
    pub(crate) const fn new(position: usize, size: usize) -> Self {
        Self { position, size }
    }
}

/// An ordered sequence addressed by zero-based positions.
///
/// `LinkedList` and `ArrayList` implement this independently; the trait carries
/// no state of its own.
pub trait List<T> {
    /// Iterator over shared references, in positional order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns true if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element after the current last position.
    fn append(&mut self, element: T);

    /// Inserts `element` so that it ends up at `position`, shifting later
    /// elements one position back. `position == len()` appends.
    fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfBoundsError>;

    /// Removes and returns the element at `position`, shifting later elements
    /// one position forward.
    fn remove(&mut self, position: usize) -> Result<T, OutOfBoundsError>;

    /// Returns a reference to the element at `position`.
    fn get(&self, position: usize) -> Result<&T, OutOfBoundsError>;

    /// Replaces the element at `position`, returning the old one.
    fn set(&mut self, position: usize, element: T) -> Result<T, OutOfBoundsError>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns a fresh iterator over the elements.
    fn iter(&self) -> Self::Iter<'_>;
}
