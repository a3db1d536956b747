use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::model::TimeRemaining;

const MS_PER_MINUTE: u64 = 60 * 1000;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Minutes are the finest unit shown, so once a minute is enough.
pub const TICK_PERIOD: Duration = Duration::from_secs(60);

/// Whole days, hours and minutes from `now` until `target`.
///
/// A target at or before `now` gives all zeros, which reads as passed.
pub fn time_remaining(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> TimeRemaining {
    let total = target.signed_duration_since(now).num_milliseconds();
    if total <= 0 {
        return TimeRemaining::default();
    }

    let total = total as u64;
    TimeRemaining {
        days: total / MS_PER_DAY,
        hours: (total % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (total % MS_PER_HOUR) / MS_PER_MINUTE,
        total_millis: total,
    }
}

/// Recomputes the time remaining on a fixed period.
///
/// The callback runs once right away and then every `period`. Each tick is
/// computed from the wall clock, so nothing accumulates between ticks. The
/// ticker ends by itself after reporting a passed deadline, and is cancelled
/// when dropped.
pub struct CountdownTicker {
    handle: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start ticking on the current tokio runtime.
    pub fn spawn<F>(target: DateTime<FixedOffset>, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(TimeRemaining) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                let remaining = time_remaining(target, Utc::now());
                on_tick(remaining);
                if remaining.is_passed() {
                    debug!(%target, "deadline passed, ticker stopping");
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Stop ticking. No callback runs after this returns.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the ticker stops, either because the deadline passed or
    /// because it was cancelled.
    pub async fn finished(&mut self) {
        let _ = (&mut self.handle).await;
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use tokio::sync::mpsc;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_ninety_minutes_out() {
        let now = Utc::now();
        let target = (now + TimeDelta::minutes(90)).fixed_offset();
        let remaining = time_remaining(target, now);

        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 1);
        assert_eq!(remaining.minutes, 30);
        assert!(!remaining.is_passed());
    }

    #[test]
    fn test_just_passed() {
        let now = Utc::now();
        let target = (now - TimeDelta::milliseconds(1)).fixed_offset();
        let remaining = time_remaining(target, now);

        assert_eq!(remaining, TimeRemaining::default());
        assert!(remaining.is_passed());
        assert!(time_remaining(now.fixed_offset(), now).is_passed());
    }

    #[test]
    fn test_floors_each_unit() {
        let target = at("2026-04-18T17:00:00-07:00");
        let now = at("2026-04-16T23:58:30Z").with_timezone(&Utc);
        // 2 days, 0 hours, 1 minute and 30 seconds before the deadline
        let remaining = time_remaining(target, now);

        assert_eq!(remaining.days, 2);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 1);
        assert_eq!(
            remaining.total_millis,
            2 * MS_PER_DAY + MS_PER_MINUTE + 30_000
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_ticks_every_period() {
        let target = (Utc::now() + TimeDelta::days(30)).fixed_offset();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = CountdownTicker::spawn(target, TICK_PERIOD, move |remaining| {
            let _ = tx.send(remaining);
        });

        tokio::time::sleep(Duration::from_secs(150)).await;
        let mut ticks = Vec::new();
        while let Ok(remaining) = rx.try_recv() {
            ticks.push(remaining);
        }

        // Immediately, then at one and two minutes.
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|t| !t.is_passed()));
        assert!(!ticker.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_after_deadline() {
        let target = (Utc::now() - TimeDelta::minutes(5)).fixed_offset();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = CountdownTicker::spawn(target, TICK_PERIOD, move |remaining| {
            let _ = tx.send(remaining);
        });

        ticker.finished().await;
        assert!(ticker.is_finished());
        assert!(rx.recv().await.unwrap().is_passed());
        // The sender was dropped with the task.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let target = (Utc::now() + TimeDelta::days(1)).fixed_offset();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = CountdownTicker::spawn(target, TICK_PERIOD, move |remaining| {
            let _ = tx.send(remaining);
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        ticker.cancel();
        ticker.finished().await;

        let mut count = 0;
        while rx.recv().await.is_some() {
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
