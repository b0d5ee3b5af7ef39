use crate::arena::Handle;
use crate::{BlockDeque, ChunkCapacity, Error, Position, Usize};

/// A cursor over a `BlockDeque`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth. Cursors always rest on an element and index in a
/// logically circular way: a "ghost" non-element that yields `None` sits
/// between the back and the front of the deque. When created, cursors start
/// at the front, or at the ghost if the deque is empty.
pub struct Cursor<'a, T, const N: usize>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    pub(crate) list: &'a BlockDeque<T, N>,
    pub(crate) node: Handle,
    pub(crate) index: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_front(list: &'a BlockDeque<T, N>) -> Self {
        match list.first_element() {
            Some(node) => Self {
                list,
                node,
                index: 0,
            },
            None => Self {
                list,
                node: list.end_node(),
                index: 0,
            },
        }
    }

    pub(crate) fn from_back(list: &'a BlockDeque<T, N>) -> Self {
        match list.last_element() {
            Some(node) => Self {
                list,
                node,
                index: list.len() - 1,
            },
            None => Self {
                list,
                node: list.end_node(),
                index: 0,
            },
        }
    }

    fn at_index(list: &'a BlockDeque<T, N>, index: usize) -> Self {
        if index >= list.len() {
            return Self {
                list,
                node: list.end_node(),
                index: list.len(),
            };
        }
        Self {
            list,
            node: list.node_for(index),
            index,
        }
    }

    #[inline]
    fn is_ghost(&self) -> bool {
        self.index >= self.list.len()
    }

    pub fn as_list(&self) -> &'a BlockDeque<T, N> {
        self.list
    }

    pub fn front(&self) -> Option<&'a T> {
        self.list.front().ok()
    }

    pub fn back(&self) -> Option<&'a T> {
        self.list.back().ok()
    }

    /// The element under the cursor; `None` at the ghost.
    pub fn current(&self) -> Option<&'a T> {
        if self.is_ghost() {
            return None;
        }
        Some(self.list.element(self.node))
    }

    /// The index under the cursor; `None` at the ghost.
    pub fn index(&self) -> Option<usize> {
        if self.is_ghost() {
            return None;
        }
        Some(self.index)
    }

    /// Steps towards the back; stepping past the back rests on the ghost,
    /// and stepping off the ghost wraps to the front.
    pub fn move_next(&mut self) {
        if self.is_ghost() {
            *self = Self::from_front(self.list);
            return;
        }

        self.index += 1;
        self.node = match self.list.next_element(self.node) {
            Some(node) => node,
            None => self.list.end_node(),
        };
    }

    /// Steps towards the front; stepping past the front rests on the ghost,
    /// and stepping off the ghost wraps to the back.
    pub fn move_prev(&mut self) {
        if self.is_ghost() {
            *self = Self::from_back(self.list);
            return;
        }

        if self.index == 0 {
            self.index = self.list.len();
            self.node = self.list.end_node();
            return;
        }

        self.index -= 1;
        self.node = match self.list.prev_element(self.node) {
            Some(node) => node,
            None => self.list.end_node(),
        };
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        let mut probe = self.clone();
        probe.move_next();
        probe.current()
    }

    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut probe = self.clone();
        probe.move_prev();
        probe.current()
    }

    /// Moves the cursor `offset` elements towards the back; landing exactly
    /// one past the last element rests on the ghost.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] when the target falls past the end position;
    /// the cursor does not move.
    pub fn seek_forward(&mut self, offset: usize) -> Result<(), Error> {
        let target = self
            .index
            .checked_add(offset)
            .filter(|&target| target <= self.list.len())
            .ok_or(Error::OutOfBounds {
                index: self.index.saturating_add(offset),
                len: self.list.len(),
            })?;
        *self = Self::at_index(self.list, target);
        Ok(())
    }

    /// Moves the cursor `offset` elements towards the front.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] when the target falls before the first
    /// element; the cursor does not move.
    pub fn seek_backward(&mut self, offset: usize) -> Result<(), Error> {
        let target = self.index.checked_sub(offset).ok_or(Error::OutOfBounds {
            index: self.index.wrapping_sub(offset),
            len: self.list.len(),
        })?;
        *self = Self::at_index(self.list, target);
        Ok(())
    }

    /// Signed number of elements from this cursor to `other`; the ghost
    /// measures as the end position.
    ///
    /// # Errors
    /// [`Error::InvalidPosition`] when the cursors belong to different
    /// deques.
    pub fn distance_to(&self, other: &Cursor<'_, T, N>) -> Result<isize, Error> {
        if !std::ptr::eq(self.list, other.list) {
            return Err(Error::InvalidPosition);
        }
        Ok(other.index as isize - self.index as isize)
    }

    /// Snapshots the cursor as a detached [`Position`]; the ghost maps to
    /// the end position.
    pub fn position(&self) -> Position {
        Position {
            list: self.list.id,
            node: self.node,
        }
    }
}

impl<'a, T, const N: usize> Clone for Cursor<'a, T, N>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T, const N: usize> core::fmt::Debug for Cursor<'_, T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cursor")
            .field(self.list)
            .field(&self.index)
            .finish()
    }
}
