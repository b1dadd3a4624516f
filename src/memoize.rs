// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Memoization table for pure functions over a bounded key space.
//!
//! Quantizing the same color literal over and over is the common case when
//! a CLI re-decorates many text spans, so both the RGB → xterm index and
//! hex → RGB conversions sit behind one of these tables for the lifetime
//! of the process. There is no eviction: the practical key space is the
//! handful of colors a program actually uses.

use std::{borrow::Borrow,
          hash::Hash,
          sync::{Mutex, MutexGuard, PoisonError}};

use rustc_hash::FxHashMap;

/// A process-lifetime cache for a pure function.
///
/// The check-then-insert sequence runs under a [`Mutex`], so concurrent
/// callers never observe a torn entry; because the wrapped functions are
/// pure, a lost race would only ever recompute the same value.
#[derive(Debug, Default)]
pub struct Memoize<K, V> {
    cells: Mutex<FxHashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> Memoize<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Mutex::new(FxHashMap::default()),
        }
    }

    /// Returns the cached value for `key`, computing and storing it on the
    /// first call. `compute` is not invoked on a hit.
    pub fn get_or_insert_with<Q>(&self, key: &Q, compute: impl FnOnce(&Q) -> V) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let mut cells = self.lock();
        if let Some(hit) = cells.get(key) {
            return hit.clone();
        }
        let value = compute(key);
        cells.insert(key.to_owned(), value.clone());
        value
    }

    /// Fallible variant of [`Self::get_or_insert_with`]. Only `Ok` results
    /// are stored; a failed computation leaves the table untouched.
    pub fn get_or_try_insert_with<Q, E>(
        &self,
        key: &Q,
        compute: impl FnOnce(&Q) -> Result<V, E>,
    ) -> Result<V, E>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        let mut cells = self.lock();
        if let Some(hit) = cells.get(key) {
            return Ok(hit.clone());
        }
        let value = compute(key)?;
        cells.insert(key.to_owned(), value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize { self.lock().len() }

    pub fn is_empty(&self) -> bool { self.lock().is_empty() }

    /// A poisoned lock only means another thread panicked mid-insert; the
    /// map itself is still a valid cache of pure results.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<K, V>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn second_call_does_not_recompute() {
        let table: Memoize<u8, u8> = Memoize::new();
        let call_count = AtomicUsize::new(0);
        let double = |key: &u8| {
            call_count.fetch_add(1, Ordering::SeqCst);
            key * 2
        };

        assert_eq!(table.get_or_insert_with(&21, double), 42);
        assert_eq!(table.get_or_insert_with(&21, double), 42);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn distinct_keys_compute_independently() {
        let table: Memoize<u8, u8> = Memoize::new();
        assert_eq!(table.get_or_insert_with(&1, |key| key + 1), 2);
        assert_eq!(table.get_or_insert_with(&2, |key| key + 1), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn failed_computation_is_not_cached() {
        let table: Memoize<String, u8> = Memoize::new();
        let call_count = AtomicUsize::new(0);
        let parse = |key: &str| {
            call_count.fetch_add(1, Ordering::SeqCst);
            key.parse::<u8>().map_err(|_| "not a number")
        };

        assert_eq!(table.get_or_try_insert_with("nope", parse), Err("not a number"));
        assert_eq!(table.get_or_try_insert_with("nope", parse), Err("not a number"));
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
        assert!(table.is_empty());

        assert_eq!(table.get_or_try_insert_with("7", parse), Ok(7));
        assert_eq!(table.get_or_try_insert_with("7", parse), Ok(7));
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn str_keys_are_stored_owned() {
        let table: Memoize<String, usize> = Memoize::new();
        let length = String::from("transient");
        assert_eq!(table.get_or_insert_with(length.as_str(), str::len), 9);
        drop(length);
        assert_eq!(table.get_or_insert_with("transient", |_| 0), 9);
    }
}
