//! Per-year memoisation.
//!
//! [`YearCache`] is a read-through cache keyed by a calendar year.  It is an
//! ordinary owned value: each owner (typically one calendar manager) holds its
//! own cache.
//!
//! The cached computation must be pure.  Two threads racing on the same cold
//! year may both compute the value; whichever inserts first wins and both get
//! equal results.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::Result;

/// A thread-safe memo table from year to a computed value.
#[derive(Debug)]
pub struct YearCache<V> {
    entries: Mutex<HashMap<i32, V>>,
}

impl<V: Clone> Default for YearCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> YearCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `year`, computing and storing it with
    /// `compute` on a miss.  Errors from `compute` are returned and nothing is
    /// cached.
    pub fn get_or_try_insert_with<F>(&self, year: i32, compute: F) -> Result<V>
    where
        F: FnOnce(i32) -> Result<V>,
    {
        if let Some(hit) = self.lock().get(&year) {
            return Ok(hit.clone());
        }
        // Computed outside the lock; a racing insert for the same year wins.
        let value = compute(year)?;
        Ok(self.lock().entry(year).or_insert(value).clone())
    }

    /// Return the cached value for `year` without computing it.
    pub fn get(&self, year: i32) -> Option<V> {
        self.lock().get(&year).cloned()
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave a half-written entry, so a
    // poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<i32, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_year() {
        let cache = YearCache::new();
        let calls = Cell::new(0);
        let square = |y: i32| {
            calls.set(calls.get() + 1);
            Ok(y * y)
        };
        assert_eq!(cache.get_or_try_insert_with(12, square), Ok(144));
        assert_eq!(cache.get_or_try_insert_with(12, square), Ok(144));
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(12), Some(144));
    }

    #[test]
    fn default_is_empty() {
        let cache: YearCache<String> = YearCache::default();
        assert!(cache.is_empty());
        let v = cache.get_or_try_insert_with(2018, |y| Ok(y.to_string()));
        assert_eq!(v.as_deref(), Ok("2018"));
    }

    #[test]
    fn errors_are_not_cached() {
        let cache: YearCache<i32> = YearCache::new();
        let r = cache.get_or_try_insert_with(-5, |y| {
            Err(Error::UnsupportedYearRange {
                year: y,
                min: 0,
                max: 10,
            })
        });
        assert!(r.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        let cache = std::sync::Arc::new(YearCache::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for y in 0..50 {
                        let v = cache.get_or_try_insert_with(y, |y| Ok(y + 1)).unwrap();
                        assert_eq!(v, y + 1, "thread {t}");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cache.len(), 50);
        cache.clear();
        assert!(cache.is_empty());
    }
}
