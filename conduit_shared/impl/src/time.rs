use chrono::{DateTime, SubsecRound, Utc};
use conduit_di::Build;
use conduit_shared_contracts::time::TimeService;
use conduit_utils::trace_instrument;

/// Reads the system clock.
///
/// Timestamps are truncated to whole milliseconds, the resolution of
/// timestamp cursors, so an item's cursor never sorts before the item.
#[derive(Debug, Clone, Copy, Default, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_has_millisecond_resolution() {
        let now = TimeServiceImpl.now();

        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(DateTime::from_timestamp_millis(now.timestamp_millis()), Some(now));
    }
}
