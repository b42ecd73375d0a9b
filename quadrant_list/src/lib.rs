// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant List: an ordered, doubly linked container with stable handles.
//!
//! [`List`] keeps its entries in an arena and links them in both directions, so the
//! operations a tree needs from its child and data collections stay cheap:
//!
//! - Push at either end and pop from either end.
//! - Remove an entry by its [`Key`] or by the identity of its value.
//! - Walk forwards and backwards from any live entry.
//! - Hand every entry back to a release callback in one sweep ([`List::clear_with`]).
//!
//! Keys are generational. Removing an entry makes its key stale, and a stale key
//! never resolves to a different live entry even after its slot is reused.
//!
//! # Example
//!
//! ```rust
//! use quadrant_list::List;
//!
//! let mut list = List::new();
//! let one = list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
//!
//! // Remove the middle entry by key; the key is stale afterwards.
//! assert_eq!(list.remove(one), Some(1));
//! assert_eq!(list.get(one), None);
//!
//! // Release the rest front to back.
//! let mut released = Vec::new();
//! list.clear_with(|v| released.push(v));
//! assert_eq!(released, [0, 2]);
//! list.release();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod list;

pub use list::{IntoIter, Iter, Key, List};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn collects_and_extends_in_order() {
        let mut list: List<u32> = (1..=3).collect();
        list.extend([4, 5]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn borrowed_iteration_matches_keys() {
        let list: List<char> = ['a', 'b', 'c'].into_iter().collect();
        let via_keys: Vec<char> = list.keys().filter_map(|k| list.get(k).copied()).collect();
        let via_iter: Vec<char> = (&list).into_iter().copied().collect();
        assert_eq!(via_keys, via_iter);
    }
}
