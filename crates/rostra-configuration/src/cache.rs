use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

/// An explicitly injected cache slot: the value, when it was last fetched,
/// and how long it stays fresh. Freshness is always judged against a passed
/// `now`, so cache behavior is deterministic under test and no clock is read
/// behind the caller's back.
#[derive(Clone, Debug)]
pub struct Cached<T> {
    value: T,
    last_updated: DateTime<Utc>,
    ttl: Duration,
}

impl<T> Cached<T> {
    pub fn new(value: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        Cached {
            value,
            last_updated: now,
            ttl,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_updated) >= self.ttl
    }

    /// Returns the cached value, refreshing it first when stale. A failed
    /// refresh leaves the previous value and timestamp in place and surfaces
    /// the error.
    pub fn get_or_refresh<F>(&mut self, now: DateTime<Utc>, refresh: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if self.is_stale(now) {
            self.value = refresh()?;
            self.last_updated = now;
        }
        Ok(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use chrono::TimeZone;

    use super::*;

    fn at_minute(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_fresh_value_is_not_refreshed() {
        let mut cached = Cached::new(1, at_minute(0), Duration::minutes(10));

        let value = cached
            .get_or_refresh(at_minute(5), || Ok(2))
            .unwrap();

        assert_eq!(*value, 1);
    }

    #[test]
    fn test_stale_value_is_refreshed() {
        let mut cached = Cached::new(1, at_minute(0), Duration::minutes(10));

        let value = cached
            .get_or_refresh(at_minute(10), || Ok(2))
            .unwrap();

        assert_eq!(*value, 2);
        assert_eq!(cached.last_updated(), at_minute(10));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_value() {
        let mut cached = Cached::new(1, at_minute(0), Duration::minutes(10));

        let result = cached.get_or_refresh(at_minute(30), || Err(anyhow!("source down")));

        assert!(result.is_err());
        assert_eq!(*cached.value(), 1);
        assert_eq!(cached.last_updated(), at_minute(0));
    }
}
