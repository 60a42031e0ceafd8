/// Double-ended queue over a doubly linked list
use crate::{
    config::Config,
    ds::{DoublyLinkedList, NodeKey},
    iter::{IntoIter, Iter},
    prelude::*,
};
use either::Either;
use std::{
    fmt,
    iter::{FromIterator, Rev},
    ops::Deref,
};

/// The deque handle. It owns every node and every stored value.
///
/// Dropping the handle, or calling [`Deque::delete`], frees all nodes;
/// [`Deque::delete_with`] hands every value to a cleanup closure first.
///
/// ```
/// use deq::{Deque, End};
///
/// let mut deque = Deque::new();
/// deque.head_put("A");
/// deque.head_put("B");
/// deque.put(End::Tail, "C");
///
/// assert_eq!(*deque.head_ith(0), "B");
/// assert_eq!(deque.to_text(), "B A C");
/// assert_eq!(deque.tail_get(), Some("C"));
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    list: DoublyLinkedList<T>,
    config: Config,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// An empty deque with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let list = DoublyLinkedList::with_capacity(config.capacity);
        Self { list, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `value` as the new anchor of `end`.
    pub fn put(&mut self, end: End, value: T) {
        self.list.push(end, value);
        log::trace!("put at {:?}, len {}", end, self.len());
    }

    /// Remove and return the value at `end`, `None` when empty.
    pub fn get(&mut self, end: End) -> Option<T> {
        let value = self.list.pop(end)?;
        log::trace!("get from {:?}, len {}", end, self.len());
        Some(value)
    }

    /// The value `i` places inward from `end`.
    ///
    /// # Panics
    ///
    /// Panics when `i >= self.len()`, which includes every `i` on an empty
    /// deque. Use [`Deque::try_ith`] to get the condition as an error.
    pub fn ith(&self, end: End, i: usize) -> &T {
        match self.try_ith(end, i) {
            Ok(value) => value,
            Err(e) => fatal(end, e),
        }
    }

    pub fn ith_mut(&mut self, end: End, i: usize) -> &mut T {
        match self.try_ith_mut(end, i) {
            Ok(value) => value,
            Err(e) => fatal(end, e),
        }
    }

    /// Like [`Deque::ith`], but an out-of-bounds index is returned as
    /// [`Error::IndexOutOfBounds`].
    pub fn try_ith(&self, end: End, i: usize) -> IResult<&T> {
        let key = self.locate(end, i)?;
        Ok(&self.list.node(key).item)
    }

    pub fn try_ith_mut(&mut self, end: End, i: usize) -> IResult<&mut T> {
        let key = self.locate(end, i)?;
        Ok(self.list.item_mut(key))
    }

    fn locate(&self, end: End, i: usize) -> IResult<NodeKey> {
        let len = self.len();
        if i >= len {
            return Err(Error::IndexOutOfBounds { index: i, len })
        }

        self.list
            .nth(end, i)
            .ok_or(Error::Corrupted("chain is shorter than its length"))
    }

    /// Search inward from `end` for the value whose target lives at the
    /// address `target`, then unlink and return it.
    ///
    /// Values are matched by identity, never by content: two equal strings
    /// at different addresses are different values here. See
    /// [`Deque::rem_eq`] for matching by equality.
    pub fn rem(&mut self, end: End, target: *const T::Target) -> Option<T>
    where
        T: Deref,
    {
        self.rem_where(end, |value| std::ptr::eq(Deref::deref(value), target))
    }

    /// Unlink and return the first value, walking inward from `end`, that
    /// equals `target`.
    pub fn rem_eq(&mut self, end: End, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.rem_where(end, |value| value == target)
    }

    /// Unlink and return the first value, walking inward from `end`, that
    /// satisfies `pred`. Nothing changes when no value does.
    pub fn rem_where<P>(&mut self, end: End, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let key = self.list.find(end, pred)?;
        let value = self.list.unlink(key)?;
        log::trace!("rem from {:?}, len {}", end, self.len());
        Some(value)
    }

    /// The anchor value of `end`, without removing it.
    pub fn peek(&self, end: End) -> Option<&T> {
        self.list.anchor(end).map(|key| &self.list.node(key).item)
    }

    pub fn peek_mut(&mut self, end: End) -> Option<&mut T> {
        let key = self.list.anchor(end)?;
        Some(self.list.item_mut(key))
    }

    pub fn contains_eq(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.find(End::Head, |value| value == target).is_some()
    }

    /// Apply `f` to every value, head to tail.
    pub fn map<F>(&mut self, f: F)
    where
        F: FnMut(&mut T),
    {
        self.list.for_each_mut(f)
    }

    /// Drop every value, keeping the handle.
    pub fn clear(&mut self) {
        let freed = self.list.clear();
        log::debug!("cleared deque, {} nodes freed", freed);
    }

    /// Tear the deque down.
    pub fn delete(mut self) {
        let freed = self.list.clear();
        log::debug!("deleted deque, {} nodes freed", freed);
    }

    /// Hand every value to `cleanup`, head to tail, then tear the deque down.
    pub fn delete_with<F>(mut self, mut cleanup: F)
    where
        F: FnMut(T),
    {
        let mut freed = 0;
        while let Some(value) = self.list.pop(End::Head) {
            cleanup(value);
            freed += 1;
        }
        log::debug!("deleted deque, {} values cleaned up", freed);
    }

    /// The values joined by the configured separator, each used as text
    /// directly. An empty deque renders as `""`.
    pub fn to_text(&self) -> String
    where
        T: AsRef<str>,
    {
        self.render(|value, buf| buf.push_str(value.as_ref()))
    }

    /// Like [`Deque::to_text`], with `format` producing the text of each
    /// value.
    pub fn to_text_with<F>(&self, mut format: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.render(|value, buf| buf.push_str(&format(value)))
    }

    fn render<W>(&self, mut write: W) -> String
    where
        W: FnMut(&T, &mut String),
    {
        let mut buf = String::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                buf.push_str(&self.config.separator);
            }
            write(value, &mut buf);
        }
        buf
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.list)
    }

    /// Iterate inward from `end`.
    pub fn iter_from(&self, end: End) -> Either<Iter<'_, T>, Rev<Iter<'_, T>>> {
        match end {
            End::Head => Either::Left(self.iter()),
            End::Tail => Either::Right(self.iter().rev()),
        }
    }

    /// Verify the structure of the underlying chain.
    pub fn check_links(&self) -> IResult<()> {
        self.list.check()
    }
}

impl<T> Deque<T> {
    pub fn head_put(&mut self, value: T) {
        self.put(End::Head, value)
    }

    pub fn head_get(&mut self) -> Option<T> {
        self.get(End::Head)
    }

    pub fn head_ith(&self, i: usize) -> &T {
        self.ith(End::Head, i)
    }

    pub fn head_rem(&mut self, target: *const T::Target) -> Option<T>
    where
        T: Deref,
    {
        self.rem(End::Head, target)
    }

    pub fn tail_put(&mut self, value: T) {
        self.put(End::Tail, value)
    }

    pub fn tail_get(&mut self) -> Option<T> {
        self.get(End::Tail)
    }

    pub fn tail_ith(&self, i: usize) -> &T {
        self.ith(End::Tail, i)
    }

    pub fn tail_rem(&mut self, target: *const T::Target) -> Option<T>
    where
        T: Deref,
    {
        self.rem(End::Tail, target)
    }
}

#[cold]
fn fatal(end: End, e: Error) -> ! {
    log::error!("ith from {:?}: {}", end, e);
    panic!("{}", e)
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.config.separator)?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.tail_put(value);
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
