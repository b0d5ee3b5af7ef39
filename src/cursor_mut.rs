use crate::arena::Handle;
use crate::{BlockDeque, ChunkCapacity, Cursor, Error, Position, Usize};

/// A mutating cursor over a `BlockDeque`.
///
/// Like [`Cursor`], a `CursorMut` rests on an element and indexes in a
/// logically circular way, with a "ghost" non-element between the back and
/// the front of the deque. On top of seeking it can edit the deque around
/// its point: removing the current element moves the cursor to the
/// following one, mirroring what erasure returns elsewhere in the crate.
pub struct CursorMut<'a, T, const N: usize>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    list: &'a mut BlockDeque<T, N>,
    node: Handle,
    index: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N>
where
    T: 'a,
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_front(list: &'a mut BlockDeque<T, N>) -> Self {
        match list.first_element() {
            Some(node) => Self {
                list,
                node,
                index: 0,
            },
            None => {
                let node = list.end_node();
                Self {
                    list,
                    node,
                    index: 0,
                }
            }
        }
    }

    pub(crate) fn from_back(list: &'a mut BlockDeque<T, N>) -> Self {
        match list.last_element() {
            Some(node) => {
                let index = list.len() - 1;
                Self { list, node, index }
            }
            None => {
                let node = list.end_node();
                Self {
                    list,
                    node,
                    index: 0,
                }
            }
        }
    }

    #[inline]
    fn is_ghost(&self) -> bool {
        self.index >= self.list.len()
    }

    /// Reborrows this cursor as a read-only [`Cursor`].
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor {
            list: &*self.list,
            node: self.node,
            index: self.index,
        }
    }

    pub fn as_list(&self) -> &BlockDeque<T, N> {
        self.list
    }

    pub fn front(&self) -> Option<&T> {
        self.list.front().ok()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut().ok()
    }

    pub fn back(&self) -> Option<&T> {
        self.list.back().ok()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut().ok()
    }

    /// The element under the cursor; `None` at the ghost.
    pub fn current(&mut self) -> Option<&mut T> {
        if self.is_ghost() {
            return None;
        }
        Some(self.list.element_mut(self.node))
    }

    /// The index under the cursor; `None` at the ghost.
    pub fn index(&self) -> Option<usize> {
        if self.is_ghost() {
            return None;
        }
        Some(self.index)
    }

    /// Snapshots the cursor as a detached [`Position`]; the ghost maps to
    /// the end position.
    pub fn position(&self) -> Position {
        self.as_cursor().position()
    }

    /// Steps towards the back; stepping past the back rests on the ghost,
    /// and stepping off the ghost wraps to the front.
    pub fn move_next(&mut self) {
        if self.is_ghost() {
            self.index = 0;
            self.node = match self.list.first_element() {
                Some(node) => node,
                None => self.list.end_node(),
            };
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
            match self.list.last_element() {
                Some(node) => {
                    self.index = self.list.len() - 1;
                    self.node = node;
                }
                None => {
                    self.index = 0;
                    self.node = self.list.end_node();
                }
            }
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

    pub fn peek_next(&mut self) -> Option<&mut T> {
        let node = if self.is_ghost() {
            self.list.first_element()?
        } else {
            self.list.next_element(self.node)?
        };
        Some(self.list.element_mut(node))
    }

    pub fn peek_prev(&mut self) -> Option<&mut T> {
        if self.index == 0 {
            return None;
        }
        let node = if self.is_ghost() {
            self.list.last_element()?
        } else {
            self.list.prev_element(self.node)?
        };
        Some(self.list.element_mut(node))
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
        self.jump(target);
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
        self.jump(target);
        Ok(())
    }

    fn jump(&mut self, index: usize) {
        if index >= self.list.len() {
            self.index = self.list.len();
            self.node = self.list.end_node();
            return;
        }
        self.index = index;
        self.node = self.list.node_for(index);
    }

    /// Inserts `value` immediately before the cursor; at the ghost this
    /// appends, matching insertion before the end position.
    pub fn insert_before(&mut self, value: T) {
        let ghost = self.is_ghost();
        let at = if ghost { self.list.end_node() } else { self.node };
        self.list.insert_before_node(at, value);
        self.index += 1;
        if ghost {
            self.node = self.list.end_node();
        }
    }

    /// Inserts `value` immediately after the cursor; at the ghost this
    /// prepends, the position right after the ghost being the front.
    pub fn insert_after(&mut self, value: T) {
        if self.is_ghost() {
            self.list.push_front(value);
            self.index += 1;
            self.node = self.list.end_node();
            return;
        }

        let at = match self.list.next_element(self.node) {
            Some(node) => node,
            None => self.list.end_node(),
        };
        self.list.insert_before_node(at, value);
    }

    /// Removes and returns the element under the cursor, leaving the cursor
    /// on the following element (or on the ghost when the back was
    /// removed). Returns `None` at the ghost.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.is_ghost() {
            return None;
        }

        let (value, successor) = self.list.remove_node(self.node);
        self.node = match successor {
            Some(node) => node,
            None => self.list.end_node(),
        };
        Some(value)
    }

    /// Adds an element to the front of the deque.
    pub fn push_front(&mut self, value: T) {
        let ghost = self.is_ghost();
        self.list.push_front(value);
        self.index += 1;
        if ghost {
            self.node = self.list.end_node();
        }
    }

    /// Adds an element to the back of the deque.
    pub fn push_back(&mut self, value: T) {
        let ghost = self.is_ghost();
        self.list.push_back(value);
        if ghost {
            self.index = self.list.len();
            self.node = self.list.end_node();
        }
    }

    /// Removes and returns the first element; the cursor slides so that it
    /// keeps resting on the same element, or on its successor when it was
    /// the one removed.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.list.is_empty() {
            return None;
        }

        if self.is_ghost() {
            let value = self.list.pop_front().ok();
            self.index = self.list.len();
            self.node = self.list.end_node();
            return value;
        }

        if self.index == 0 {
            return self.remove_current();
        }

        let value = self.list.pop_front().ok();
        self.index -= 1;
        value
    }

    /// Removes and returns the last element; a cursor resting on it ends up
    /// on the ghost.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.list.is_empty() {
            return None;
        }

        if self.is_ghost() {
            let value = self.list.pop_back().ok();
            self.index = self.list.len();
            self.node = self.list.end_node();
            return value;
        }

        if self.index == self.list.len() - 1 {
            return self.remove_current();
        }

        self.list.pop_back().ok()
    }
}

impl<T, const N: usize> core::fmt::Debug for CursorMut<'_, T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&*self.list)
            .field(&self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::BlockDeque;

    #[test]
    fn cursor_mut_navigates_like_the_read_only_cursor() {
        let mut list = BlockDeque::<usize, 2>::from([0, 1, 2, 3, 4]);
        let mut sut = list.cursor_front_mut();

        for i in 0..5 {
            assert_eq!(sut.index(), Some(i));
            assert_eq!(sut.current(), Some(&mut { i }));
            sut.move_next();
        }

        assert_eq!(sut.index(), None);
        assert_eq!(sut.current(), None);

        sut.move_next();
        assert_eq!(sut.index(), Some(0));

        sut.move_prev();
        assert_eq!(sut.current(), None);

        sut.move_prev();
        assert_eq!(sut.index(), Some(4));
    }

    #[test]
    fn cursor_mut_current_allows_updates() {
        let mut list = BlockDeque::<usize, 2>::from([0, 1, 2]);
        let mut sut = list.cursor_front_mut();

        while let Some(value) = sut.current() {
            *value += 10;
            sut.move_next();
        }

        assert_eq!(list, [10, 11, 12]);
    }

    #[test]
    fn cursor_mut_peeks_allow_updates() {
        let mut list = BlockDeque::<usize, 2>::from([0, 1, 2]);
        let mut sut = list.cursor_front_mut();
        sut.move_next();

        *sut.peek_prev().unwrap() = 10;
        *sut.peek_next().unwrap() = 12;

        assert_eq!(list, [10, 1, 12]);
    }

    #[test]
    fn cursor_mut_insert_before_keeps_the_cursor_on_its_element() {
        let mut list = BlockDeque::<i64, 4>::from([1, 3]);
        let mut sut = list.cursor_front_mut();
        sut.move_next();
        assert_eq!(sut.current(), Some(&mut 3));

        sut.insert_before(2);
        assert_eq!(sut.current(), Some(&mut 3));
        assert_eq!(sut.index(), Some(2));

        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn cursor_mut_insert_before_at_the_ghost_appends() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2]);
        let mut sut = list.cursor_front_mut();
        sut.move_prev();
        assert_eq!(sut.current(), None);

        sut.insert_before(3);
        assert_eq!(sut.current(), None);

        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn cursor_mut_insert_after_leaves_the_cursor_in_place() {
        let mut list = BlockDeque::<i64, 4>::from([1, 3]);
        let mut sut = list.cursor_front_mut();

        sut.insert_after(2);
        assert_eq!(sut.current(), Some(&mut 1));
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn cursor_mut_insert_after_at_the_ghost_prepends() {
        let mut list = BlockDeque::<i64, 4>::from([2, 3]);
        let mut sut = list.cursor_front_mut();
        sut.move_prev();

        sut.insert_after(1);
        assert_eq!(sut.current(), None);

        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn cursor_mut_insert_fills_across_split_boundaries() {
        let mut list = BlockDeque::<i64, 4>::new();
        let mut sut = list.cursor_front_mut();

        for value in 0..16 {
            sut.insert_before(value);
        }

        assert_eq!(sut.current(), None);
        assert!(list.iter().copied().eq(0..16));
        list.audit().unwrap();
    }

    #[test]
    fn cursor_mut_remove_current_moves_to_the_following_element() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2, 3]);
        let mut sut = list.cursor_front_mut();
        sut.move_next();

        assert_eq!(sut.remove_current(), Some(2));
        assert_eq!(sut.current(), Some(&mut 3));
        assert_eq!(sut.index(), Some(1));

        assert_eq!(sut.remove_current(), Some(3));
        assert_eq!(sut.current(), None);

        assert_eq!(sut.remove_current(), None);
        assert_eq!(list, [1]);
    }

    #[test]
    fn cursor_mut_drains_the_whole_deque() {
        let mut list = BlockDeque::<i64, 4>::from_iter(0..32);
        let mut sut = list.cursor_front_mut();

        for expected in 0..32 {
            assert_eq!(sut.remove_current(), Some(expected));
        }

        assert_eq!(sut.remove_current(), None);
        assert!(list.is_empty());
        list.audit().unwrap();
    }

    #[test]
    fn cursor_mut_push_front_shifts_the_cursor_index() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2]);
        let mut sut = list.cursor_front_mut();
        sut.move_next();
        assert_eq!(sut.index(), Some(1));

        sut.push_front(0);
        assert_eq!(sut.index(), Some(2));
        assert_eq!(sut.current(), Some(&mut 2));

        assert_eq!(list, [0, 1, 2]);
    }

    #[test]
    fn cursor_mut_push_back_keeps_the_ghost_on_the_ghost() {
        let mut list = BlockDeque::<i64, 4>::new();
        let mut sut = list.cursor_front_mut();
        assert_eq!(sut.current(), None);

        sut.push_back(1);
        assert_eq!(sut.current(), None);

        sut.push_back(2);
        assert_eq!(sut.current(), None);

        sut.move_next();
        assert_eq!(sut.current(), Some(&mut 1));

        assert_eq!(list, [1, 2]);
    }

    #[test]
    fn cursor_mut_pop_front_slides_the_index() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2, 3]);
        let mut sut = list.cursor_front_mut();
        sut.move_next();
        assert_eq!(sut.current(), Some(&mut 2));

        assert_eq!(sut.pop_front(), Some(1));
        assert_eq!(sut.current(), Some(&mut 2));
        assert_eq!(sut.index(), Some(0));

        assert_eq!(sut.pop_front(), Some(2));
        assert_eq!(sut.current(), Some(&mut 3));

        assert_eq!(sut.pop_front(), Some(3));
        assert_eq!(sut.current(), None);

        assert_eq!(sut.pop_front(), None);
    }

    #[test]
    fn cursor_mut_pop_back_from_the_back_rests_on_the_ghost() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2, 3]);
        let mut sut = list.cursor_back_mut();

        assert_eq!(sut.pop_back(), Some(3));
        assert_eq!(sut.current(), None);

        sut.move_prev();
        assert_eq!(sut.current(), Some(&mut 2));

        assert_eq!(sut.pop_back(), Some(2));
        assert_eq!(sut.current(), None);

        assert_eq!(sut.pop_back(), Some(1));
        assert_eq!(sut.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn cursor_mut_pop_back_away_from_the_cursor_leaves_it_alone() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2, 3]);
        let mut sut = list.cursor_front_mut();

        assert_eq!(sut.pop_back(), Some(3));
        assert_eq!(sut.current(), Some(&mut 1));
        assert_eq!(sut.index(), Some(0));
    }

    #[test]
    fn cursor_mut_seek_and_edit() {
        let mut list = BlockDeque::<i64, 4>::from_iter(0..16);
        let mut sut = list.cursor_front_mut();

        sut.seek_forward(8).unwrap();
        assert_eq!(sut.remove_current(), Some(8));

        sut.seek_backward(4).unwrap();
        assert_eq!(sut.index(), Some(4));
        sut.insert_before(42);

        assert_eq!(sut.as_list().len(), 16);
        assert_eq!(sut.as_list().get(4), Some(&42));
        list.audit().unwrap();
    }

    #[test]
    fn cursor_mut_as_cursor_reads_the_same_point() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2, 3]);
        let mut sut = list.cursor_front_mut();
        sut.move_next();

        let read = sut.as_cursor();
        assert_eq!(read.current(), Some(&2));
        assert_eq!(read.index(), Some(1));
    }

    #[test]
    fn cursor_mut_position_snapshot_outlives_the_cursor() {
        let mut list = BlockDeque::<i64, 4>::from([1, 2, 3]);

        let snapshot = {
            let mut sut = list.cursor_front_mut();
            sut.move_next();
            sut.position()
        };

        assert_eq!(list.get_at(snapshot), Ok(&2));
        list.push_front(0);
        assert_eq!(list.index_of(snapshot), Ok(2));
    }
}
