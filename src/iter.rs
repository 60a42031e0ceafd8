// Iterators over a deque
use crate::{
    deque::Deque,
    ds::{DoublyLinkedList, NodeKey},
    End,
};
use std::iter::FusedIterator;

/// A borrowing iterator over the values of a [`Deque`], head to tail.
///
/// Iterating from the back walks tail to head; both cursors stop once they
/// have yielded `len` values between them.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Iter {
            list,
            front: list.anchor(End::Head),
            back: list.anchor(End::Tail),
            remaining: list.len(),
        }
    }

    fn step(&mut self, from: End) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let cursor = match from {
            End::Head => &mut self.front,
            End::Tail => &mut self.back,
        };

        let list: &'a DoublyLinkedList<T> = self.list;
        let node = list.node((*cursor)?);
        *cursor = node.link(from.opposite());
        self.remaining -= 1;

        Some(&node.item)
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.step(End::Head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.step(End::Tail)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the values of a [`Deque`].
///
/// Each step is a `get` from the matching end.
pub struct IntoIter<T> {
    pub(crate) deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.head_get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.tail_get()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
