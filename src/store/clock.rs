//! Time source for note timestamps.

use chrono::{DateTime, SubsecRound, Utc};

/// Supplies the current time to the store.
///
/// Timestamps are kept at whole-second precision; implementations may return
/// sub-second values and the store truncates them.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Current time from `clock`, truncated to whole seconds.
pub(crate) fn now_secs(clock: &dyn Clock) -> DateTime<Utc> {
    clock.now().trunc_subsecs(0)
}
