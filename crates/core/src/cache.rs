//! Time-bounded memoization of query results.
//!
//! [`TimedCache`] recomputes its value at most once per TTL window. A failed
//! recompute is logged and the previous value kept — stale-but-valid beats
//! empty, and the next cycle gets another chance. Not thread-safe by
//! contract: single writer, single reader, one coordination loop.

use std::time::{Duration, Instant};

use crate::error::QueryError;

/// Zero-argument producer stored by a cache.
pub type Producer<T> = Box<dyn FnMut() -> Result<T, QueryError>>;

/// Memoizing container around a fallible producer.
///
/// Holds the last computed value (initially `T::default()`), the timestamp of
/// the last *successful* compute, and the TTL. The successful recompute path
/// is the only place the timestamp advances, so a persistently failing
/// producer retries on every call until one succeeds.
pub struct TimedCache<T> {
    label: &'static str,
    value: T,
    refreshed_at: Option<Instant>,
    ttl: Duration,
    produce: Producer<T>,
}

impl<T: Default> TimedCache<T> {
    /// Create a cache that recomputes through `produce` at most once per
    /// `ttl`. The label names this cache in failure logs.
    pub fn new(label: &'static str, ttl: Duration, produce: Producer<T>) -> Self {
        Self {
            label,
            value: T::default(),
            refreshed_at: None,
            ttl,
            produce,
        }
    }

    /// Current value, recomputed first if the TTL has elapsed.
    ///
    /// On producer failure the previous value and timestamp are left
    /// untouched and the failure is logged.
    pub fn value(&mut self) -> &T {
        if self.is_due() {
            match (self.produce)() {
                Ok(fresh) => {
                    self.value = fresh;
                    self.refreshed_at = Some(Instant::now());
                }
                Err(error) => {
                    tracing::warn!(
                        cache = self.label,
                        %error,
                        "refresh failed, keeping previous value"
                    );
                }
            }
        }
        &self.value
    }

    /// Last value without triggering a recompute.
    pub fn peek(&self) -> &T {
        &self.value
    }

    /// Timestamp of the last successful compute, if any.
    pub fn last_refresh(&self) -> Option<Instant> {
        self.refreshed_at
    }

    fn is_due(&self) -> bool {
        match self.refreshed_at {
            Some(at) => at.elapsed() >= self.ttl,
            None => true,
        }
    }
}

/// Adapt a previous-value-consuming producer into a zero-argument one.
///
/// The wrapped producer receives the result of its last successful run
/// (`T::default()` on the first call), letting a category reconcile partial
/// failures against prior state instead of refreshing all-or-nothing. The
/// adapter adds no fallback of its own — it purely threads state; a failed
/// run leaves the remembered value as it was.
pub fn remember_last_value<T, F>(mut produce: F) -> Producer<T>
where
    T: Clone + Default + 'static,
    F: FnMut(T) -> Result<T, QueryError> + 'static,
{
    let mut last = T::default();
    Box::new(move || {
        let fresh = produce(last.clone())?;
        last = fresh.clone();
        Ok(fresh)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn second_read_within_ttl_reuses_value() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut cache = TimedCache::new(
            "test",
            Duration::from_secs(60),
            Box::new(move || {
                counter.set(counter.get() + 1);
                Ok(vec![counter.get()])
            }),
        );

        let first = cache.value().clone();
        let second = cache.value().clone();

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_ttl_recomputes_every_read() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut cache = TimedCache::new(
            "test",
            Duration::ZERO,
            Box::new(move || {
                counter.set(counter.get() + 1);
                Ok(counter.get())
            }),
        );

        assert_eq!(*cache.value(), 1);
        assert_eq!(*cache.value(), 2);
    }

    #[test]
    fn failed_recompute_keeps_value_and_timestamp() {
        let fail = Rc::new(Cell::new(false));
        let trigger = Rc::clone(&fail);
        let mut cache = TimedCache::new(
            "test",
            Duration::ZERO,
            Box::new(move || {
                if trigger.get() {
                    Err(QueryError::HostRead("injected".into()))
                } else {
                    Ok(vec!["alpha".to_string()])
                }
            }),
        );

        assert_eq!(cache.value(), &["alpha".to_string()]);
        let stamp = cache.last_refresh();
        assert!(stamp.is_some());

        fail.set(true);
        assert_eq!(cache.value(), &["alpha".to_string()]);
        assert_eq!(cache.last_refresh(), stamp);
    }

    #[test]
    fn first_read_starts_from_default() {
        let mut cache: TimedCache<Vec<u32>> = TimedCache::new(
            "test",
            Duration::from_secs(60),
            Box::new(|| Err(QueryError::HostRead("down".into()))),
        );

        assert!(cache.value().is_empty());
        assert!(cache.last_refresh().is_none());
    }

    #[test]
    fn remember_last_value_threads_previous_result() {
        let seen = Rc::new(Cell::new(0u32));
        let observed = Rc::clone(&seen);
        let mut produce = remember_last_value(move |previous: u32| {
            observed.set(previous);
            Ok(previous + 1)
        });

        assert_eq!(produce().unwrap(), 1);
        assert_eq!(seen.get(), 0); // first call sees the default
        assert_eq!(produce().unwrap(), 2);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn remember_last_value_keeps_previous_across_failures() {
        let fail = Rc::new(Cell::new(false));
        let trigger = Rc::clone(&fail);
        let mut produce = remember_last_value(move |previous: u32| {
            if trigger.get() {
                Err(QueryError::HostRead("injected".into()))
            } else {
                Ok(previous + 1)
            }
        });

        assert_eq!(produce().unwrap(), 1);
        fail.set(true);
        assert!(produce().is_err());
        fail.set(false);
        // the failed run did not clobber the remembered value
        assert_eq!(produce().unwrap(), 2);
    }
}
