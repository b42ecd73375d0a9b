// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed doubly linked list.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

/// Generational handle for a list entry.
///
/// A key is returned by every push and stays valid until its entry is removed.
/// Slots are reused after removal with a bumped generation, so an old key can
/// never observe the new occupant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "List keys are intentionally 32-bit; a list never holds u32::MAX slots."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    generation: u32,
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An ordered sequence of owned values linked in both directions.
#[derive(Clone)]
pub struct List<T> {
    entries: Vec<Option<Entry<T>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists compare by their values in order. Keys and slot layout are ignored.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, T>(&'a List<T>);

        impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.entries.len())
            .field("items", &Items(self))
            .finish_non_exhaustive()
    }
}

impl<T> List<T> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            generations: Vec::with_capacity(n),
            ..Self::new()
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` before the first entry.
    pub fn push_front(&mut self, value: T) -> Key {
        let idx = self.alloc(value);
        match self.head {
            Some(old) => {
                self.entry_mut(old).prev = Some(idx);
                self.entry_mut(idx).next = Some(old);
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        self.key_at(idx)
    }

    /// Insert `value` after the last entry.
    pub fn push_back(&mut self, value: T) -> Key {
        let idx = self.alloc(value);
        match self.tail {
            Some(old) => {
                self.entry_mut(old).next = Some(idx);
                self.entry_mut(idx).prev = Some(old);
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        self.key_at(idx)
    }

    /// Remove and return the first value.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        Some(self.unlink(idx))
    }

    /// Remove and return the last value.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        Some(self.unlink(idx))
    }

    /// Remove the entry behind `key`. Returns `None` if the key is stale.
    pub fn remove(&mut self, key: Key) -> Option<T> {
        self.live(key)?;
        Some(self.unlink(key.idx()))
    }

    /// Remove the first entry equal to `item`.
    ///
    /// The value is the identity of an entry, so this is the operation to use when
    /// the caller holds the object but not its key. Returns `None` when no entry matches.
    pub fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let key = self.find_key(item)?;
        self.remove(key)
    }

    /// Key of the first entry equal to `item`.
    pub fn find_key(&self, item: &T) -> Option<Key>
    where
        T: PartialEq,
    {
        self.keys().find(|&k| self.get(k) == Some(item))
    }

    /// Whether an entry equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == item)
    }

    /// Key of the first entry.
    pub fn head(&self) -> Option<Key> {
        self.head.map(|idx| self.key_at(idx))
    }

    /// Key of the last entry.
    pub fn tail(&self) -> Option<Key> {
        self.tail.map(|idx| self.key_at(idx))
    }

    /// The first value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.entry(idx).value)
    }

    /// The last value.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.entry(idx).value)
    }

    /// Whether `key` refers to a live entry.
    pub fn contains_key(&self, key: Key) -> bool {
        self.live(key).is_some()
    }

    /// The value behind `key`, if the key is live.
    pub fn get(&self, key: Key) -> Option<&T> {
        self.live(key).map(|e| &e.value)
    }

    /// Mutable access to the value behind `key`, if the key is live.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        let e = self.entries.get_mut(key.idx())?.as_mut()?;
        if e.generation != key.1 {
            return None;
        }
        Some(&mut e.value)
    }

    /// Key of the entry after `key`.
    pub fn next(&self, key: Key) -> Option<Key> {
        let next = self.live(key)?.next?;
        Some(self.key_at(next))
    }

    /// Key of the entry before `key`.
    pub fn prev(&self, key: Key) -> Option<Key> {
        let prev = self.live(key)?.prev?;
        Some(self.key_at(prev))
    }

    /// The value at position `n`, counting from the front.
    pub fn nth(&self, n: usize) -> Option<&T> {
        self.iter().nth(n)
    }

    /// Iterate values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Iterate keys front to back.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        core::iter::successors(self.head, |&idx| self.entry(idx).next)
            .map(|idx| self.key_at(idx))
    }

    /// Copy every value of `other` to the end of this list, in order.
    ///
    /// `other` is left untouched, so both lists hold the same values afterwards.
    pub fn append(&mut self, other: &Self)
    where
        T: Clone,
    {
        for value in other.iter() {
            self.push_back(value.clone());
        }
    }

    /// Remove every entry front to back, handing each value to `release`.
    pub fn clear_with(&mut self, mut release: impl FnMut(T)) {
        while let Some(value) = self.pop_front() {
            release(value);
        }
    }

    /// Remove and drop every entry.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Consume an empty list.
    ///
    /// # Panics
    ///
    /// Panics if the list still holds entries. Empty it with [`List::clear_with`]
    /// first so every value goes through the caller's release path.
    pub fn release(self) {
        assert!(self.is_empty(), "releasing a non-empty list");
    }

    // --- internals ---

    fn alloc(&mut self, value: T) -> usize {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = Some(Entry {
                generation,
                value,
                prev: None,
                next: None,
            });
            idx
        } else {
            self.entries.push(Some(Entry {
                generation: 1,
                value,
                prev: None,
                next: None,
            }));
            self.generations.push(1);
            self.entries.len() - 1
        }
    }

    fn unlink(&mut self, idx: usize) -> T {
        let entry = self.entries[idx].take().expect("unlinking a free slot");
        match entry.prev {
            Some(p) => self.entry_mut(p).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(n) => self.entry_mut(n).prev = entry.prev,
            None => self.tail = entry.prev,
        }
        self.free_list.push(idx);
        self.len -= 1;
        entry.value
    }

    fn live(&self, key: Key) -> Option<&Entry<T>> {
        let e = self.entries.get(key.idx())?.as_ref()?;
        (e.generation == key.1).then_some(e)
    }

    fn key_at(&self, idx: usize) -> Key {
        Key::new(idx, self.generations[idx])
    }

    fn entry(&self, idx: usize) -> &Entry<T> {
        self.entries[idx].as_ref().expect("dangling list link")
    }

    fn entry_mut(&mut self, idx: usize) -> &mut Entry<T> {
        self.entries[idx].as_mut().expect("dangling list link")
    }
}

/// Borrowing iterator over a [`List`], front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.entry(self.front?);
        self.front = entry.next;
        self.remaining -= 1;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.entry(self.back?);
        self.back = entry.prev;
        self.remaining -= 1;
        Some(&entry.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`List`], front to back.
#[derive(Debug)]
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
