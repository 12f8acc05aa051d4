//! Time sources used for post/comment ids and date stamps.
//!
//! [`SystemClock`] is platform-aware: it uses `js_sys::Date::now()` on WASM,
//! where `std::time::SystemTime` is unavailable, and `chrono::Utc::now()` on
//! native targets.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

/// Current-time source.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now(&self) -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a caller can keep a handle after moving
/// one into a [`crate::BlogStore`].
#[derive(Clone, Debug)]
pub struct ManualClock {
    millis: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: Rc::new(Cell::new(millis)),
        }
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, by: Duration) {
        self.millis.set(self.millis.get() + by.num_milliseconds());
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.get()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::at_millis(1_000);
        let handle = clock.clone();
        handle.advance(Duration::seconds(2));
        assert_eq!(clock.now().timestamp_millis(), 3_000);

        handle.set_millis(42);
        assert_eq!(clock.now().timestamp_millis(), 42);
    }
}
