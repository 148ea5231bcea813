//! A singly linked list with a cached tail

use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::list::{List, OutOfBoundsError};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    element: T,
    // `None` marks the last node
    next: Link<T>,
}

impl<T> Node<T> {
    // leaks a fresh node into the chain, `free` takes it back
    fn alloc(element: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { element, next })))
    }

    // SAFETY: `node` came from `alloc`, is no longer linked from the list and
    // is not used again afterwards
    unsafe fn free(node: NonNull<Self>) -> Self {
        *Box::from_raw(node.as_ptr())
    }
}

/// Singly linked list
///
/// Each node owns its successor. The list owns the head node and keeps a
/// non-owning pointer to the last node so that `append` does not walk the chain.
///
/// Every link, including the cached tail, is a raw pointer handed out once by
/// `Box::leak`, so no link is ever retagged out from under the others.
pub struct LinkedList<T> {
    head: Link<T>,
    // `None` iff `head` is `None`
    last: Link<T>,
    size: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list exclusively owns every node reachable from `head`, so it has
// the same thread-safety as a `Box<Node<T>>`.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub const fn new() -> Self {
        Self {
            head: None,
            last: None,
            size: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends an element to the back of the list.
    pub fn append(&mut self, element: T) {
        let node = Node::alloc(element, None);
        match self.last {
            None => self.head = Some(node),
            // SAFETY: `last` is a live node of this list, and `&mut self`
            // rules out any outstanding reference into the chain.
            Some(mut last) => unsafe { last.as_mut().next = Some(node) },
        }
        self.last = Some(node);
        self.size += 1;
    }

    /// Inserts an element so that it ends up at `position`.
    ///
    /// Inserting at the front is O(1), anywhere else walks the chain up to the
    /// preceding node.
    pub fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfBoundsError> {
        if position > self.size {
            return Err(OutOfBoundsError::new(position, self.size));
        }
        if position == self.size {
            self.append(element);
            return Ok(());
        }

        if position == 0 {
            self.head = Some(Node::alloc(element, self.head));
        } else {
            let mut prev = self
                .node(position - 1)
                .ok_or(OutOfBoundsError::new(position, self.size))?;
            // SAFETY: `prev` is a live node and `&mut self` is held
            unsafe {
                let prev = prev.as_mut();
                prev.next = Some(Node::alloc(element, prev.next));
            }
        }
        // position < size, so the last node did not change
        self.size += 1;
        Ok(())
    }

    /// Removes the element at `position` and returns it.
    pub fn remove(&mut self, position: usize) -> Result<T, OutOfBoundsError> {
        let size = self.size;
        if position >= size {
            return Err(OutOfBoundsError::new(position, size));
        }

        let removed = if position == 0 {
            let head = self.head.ok_or(OutOfBoundsError::new(position, size))?;
            // SAFETY: `head` is unlinked right below and never touched again
            let node = unsafe { Node::free(head) };
            self.head = node.next;
            if self.head.is_none() {
                self.last = None;
            }
            node
        } else {
            let mut prev = self
                .node(position - 1)
                .ok_or(OutOfBoundsError::new(position, size))?;
            // SAFETY: `prev` is a live node and `&mut self` is held
            let target = unsafe { prev.as_ref().next }
                .ok_or(OutOfBoundsError::new(position, size))?;
            // SAFETY: `target` is relinked around right below
            let node = unsafe { Node::free(target) };
            unsafe { prev.as_mut().next = node.next };
            if node.next.is_none() {
                self.last = Some(prev);
            }
            node
        };

        self.size -= 1;
        Ok(removed.element)
    }

    /// Returns a reference to the element at `position`.
    pub fn get(&self, position: usize) -> Result<&T, OutOfBoundsError> {
        self.node(position)
            // SAFETY: the node lives as long as the `&self` borrow
            .map(|node| unsafe { &(*node.as_ptr()).element })
            .ok_or(OutOfBoundsError::new(position, self.size))
    }

    /// Returns a mutable reference to the element at `position`.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, OutOfBoundsError> {
        self.node(position)
            // SAFETY: the node lives as long as the `&mut self` borrow, which
            // also keeps every other path to it unused
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
            .ok_or(OutOfBoundsError::new(position, self.size))
    }

    /// Replaces the element at `position` and returns the old one.
    pub fn set(&mut self, position: usize, element: T) -> Result<T, OutOfBoundsError> {
        self.get_mut(position)
            .map(|slot| core::mem::replace(slot, element))
    }

    /// Removes all elements, releasing the whole chain.
    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.size, "clearing linked list");
        let mut link = self.head.take();
        while let Some(node) = link {
            // SAFETY: `head` was taken, so each node is reachable only from here
            let node = unsafe { Node::free(node) };
            link = node.next;
        }
        self.last = None;
        self.size = 0;
    }

    /// Returns an iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.size,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.size,
            _marker: PhantomData,
        }
    }

    fn node(&self, position: usize) -> Link<T> {
        if position >= self.size {
            return None;
        }
        let mut node = self.head;
        for _ in 0..position {
            // SAFETY: every link reachable from `head` points at a live node
            node = unsafe { node?.as_ref().next };
        }
        node
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> List<T> for LinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn append(&mut self, element: T) {
        LinkedList::append(self, element)
    }

    fn insert(&mut self, position: usize, element: T) -> Result<(), OutOfBoundsError> {
        LinkedList::insert(self, position, element)
    }

    fn remove(&mut self, position: usize) -> Result<T, OutOfBoundsError> {
        LinkedList::remove(self, position)
    }

    fn get(&self, position: usize) -> Result<&T, OutOfBoundsError> {
        LinkedList::get(self, position)
    }

    fn set(&mut self, position: usize, element: T) -> Result<T, OutOfBoundsError> {
        LinkedList::set(self, position, element)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        LinkedList::iter(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// An iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter()`]. It walks the live
/// chain; the borrow it holds keeps the list from changing underneath it.
pub struct Iter<'a, T: 'a> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

// SAFETY: `Iter` only hands out `&T`, like `&LinkedList<T>` would
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: the list is borrowed for `'a`, so the node outlives the item
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter_mut()`].
pub struct IterMut<'a, T: 'a> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

// SAFETY: `IterMut` only hands out `&mut T` to distinct nodes
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: the list is mutably borrowed for `'a` and each node is
        // yielded once, so the references never overlap
        let node = unsafe { &mut *node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&mut node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a `LinkedList`.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove(0).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
