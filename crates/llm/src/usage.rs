//! Monthly AI call budget
//!
//! One tracker per dispatcher. A call slot is reserved under the lock before
//! a provider is contacted, so concurrent sessions can never overshoot the
//! budget; the slot is released again if the call does not pay off.

use chrono::{DateTime, Datelike, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use voice_command_core::Error;

/// Calendar month the counters belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UsagePeriod {
    pub year: i32,
    pub month: u32,
}

impl UsagePeriod {
    pub fn of(now: DateTime<Utc>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Successful AI calls this month
    pub calls: u32,
    /// Calls currently in flight
    pub in_flight: u32,
    /// USD accrued this month
    pub cost_usd: f64,
    pub budget: u32,
    pub period: UsagePeriod,
}

impl UsageSnapshot {
    pub fn remaining(&self) -> u32 {
        self.budget.saturating_sub(self.calls + self.in_flight)
    }
}

#[derive(Debug)]
struct UsageState {
    calls: u32,
    reserved: u32,
    cost_usd: f64,
    period: UsagePeriod,
}

/// Thread-safe monthly usage counter
#[derive(Debug)]
pub struct UsageTracker {
    budget: u32,
    state: Mutex<UsageState>,
}

impl UsageTracker {
    pub fn new(budget: u32, now: DateTime<Utc>) -> Self {
        Self {
            budget,
            state: Mutex::new(UsageState {
                calls: 0,
                reserved: 0,
                cost_usd: 0.0,
                period: UsagePeriod::of(now),
            }),
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Zero the counters if `now` falls in a different month
    ///
    /// Returns whether a reset happened. Calling it again in the same month
    /// is a no-op. In-flight reservations survive the reset.
    pub fn reset_if_new_month(&self, now: DateTime<Utc>) -> bool {
        let period = UsagePeriod::of(now);
        let mut state = self.state.lock();
        if state.period == period {
            return false;
        }

        tracing::info!(
            previous_calls = state.calls,
            previous_cost_usd = state.cost_usd,
            year = period.year,
            month = period.month,
            "Monthly AI usage reset"
        );
        state.calls = 0;
        state.cost_usd = 0.0;
        state.period = period;
        true
    }

    /// Reserve one call slot, or fail if the budget is used up
    pub fn try_reserve(&self) -> Result<BudgetSlot<'_>, Error> {
        let mut state = self.state.lock();
        let used = state.calls + state.reserved;
        if used >= self.budget {
            return Err(Error::BudgetExhausted {
                used,
                budget: self.budget,
            });
        }
        state.reserved += 1;
        Ok(BudgetSlot {
            tracker: self,
            settled: false,
        })
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        let state = self.state.lock();
        UsageSnapshot {
            calls: state.calls,
            in_flight: state.reserved,
            cost_usd: state.cost_usd,
            budget: self.budget,
            period: state.period,
        }
    }

    fn commit(&self, cost_usd: f64) {
        let mut state = self.state.lock();
        state.reserved = state.reserved.saturating_sub(1);
        state.calls += 1;
        state.cost_usd += cost_usd;
    }

    fn release(&self) {
        let mut state = self.state.lock();
        state.reserved = state.reserved.saturating_sub(1);
    }
}

/// A reserved call slot
///
/// Dropping it without [`commit`](BudgetSlot::commit) gives the slot back,
/// which also covers a caller abandoning the request mid-flight.
#[derive(Debug)]
pub struct BudgetSlot<'a> {
    tracker: &'a UsageTracker,
    settled: bool,
}

impl BudgetSlot<'_> {
    /// Count the call and accrue its cost
    pub fn commit(mut self, cost_usd: f64) {
        self.tracker.commit(cost_usd);
        self.settled = true;
    }
}

impl Drop for BudgetSlot<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.tracker.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_commit_counts_and_accrues() {
        let tracker = UsageTracker::new(10, at(2025, 3, 1));
        tracker.try_reserve().unwrap().commit(0.002);
        tracker.try_reserve().unwrap().commit(0.003);

        let usage = tracker.snapshot();
        assert_eq!(usage.calls, 2);
        assert_eq!(usage.in_flight, 0);
        assert!((usage.cost_usd - 0.005).abs() < 1e-12);
        assert_eq!(usage.remaining(), 8);
    }

    #[test]
    fn test_dropped_slot_is_released() {
        let tracker = UsageTracker::new(1, at(2025, 3, 1));
        {
            let _slot = tracker.try_reserve().unwrap();
            assert_eq!(tracker.snapshot().in_flight, 1);
            assert!(tracker.try_reserve().is_err());
        }
        let usage = tracker.snapshot();
        assert_eq!(usage.calls, 0);
        assert_eq!(usage.in_flight, 0);
        assert!(tracker.try_reserve().is_ok());
    }

    #[test]
    fn test_budget_exhausted() {
        let tracker = UsageTracker::new(2, at(2025, 3, 1));
        tracker.try_reserve().unwrap().commit(0.0);
        tracker.try_reserve().unwrap().commit(0.0);
        let outcome = tracker.try_reserve().map(|_| ());
        match outcome {
            Err(Error::BudgetExhausted { used, budget }) => {
                assert_eq!(used, 2);
                assert_eq!(budget, 2);
            }
            other => panic!("expected budget error, got {:?}", other),
        }
        assert_eq!(tracker.snapshot().in_flight, 0);
    }

    #[test]
    fn test_zero_budget_never_reserves() {
        let tracker = UsageTracker::new(0, at(2025, 3, 1));
        assert!(tracker.try_reserve().is_err());
    }

    #[test]
    fn test_month_rollover_is_idempotent() {
        let tracker = UsageTracker::new(1, at(2025, 1, 31));
        tracker.try_reserve().unwrap().commit(0.01);
        assert!(!tracker.reset_if_new_month(at(2025, 1, 31)));
        assert_eq!(tracker.snapshot().calls, 1);

        assert!(tracker.reset_if_new_month(at(2025, 2, 1)));
        assert!(!tracker.reset_if_new_month(at(2025, 2, 28)));
        let usage = tracker.snapshot();
        assert_eq!(usage.calls, 0);
        assert_eq!(usage.cost_usd, 0.0);
        assert_eq!(usage.period, UsagePeriod { year: 2025, month: 2 });
    }

    #[test]
    fn test_same_month_next_year_resets() {
        let tracker = UsageTracker::new(5, at(2024, 6, 10));
        tracker.try_reserve().unwrap().commit(0.0);
        assert!(tracker.reset_if_new_month(at(2025, 6, 10)));
        assert_eq!(tracker.snapshot().calls, 0);
    }

    #[test]
    fn test_concurrent_reservations_respect_budget() {
        let tracker = Arc::new(UsageTracker::new(25, at(2025, 3, 1)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || {
                    let mut won = 0;
                    for _ in 0..10 {
                        if let Ok(slot) = tracker.try_reserve() {
                            slot.commit(0.001);
                            won += 1;
                        }
                    }
                    won
                })
            })
            .collect();

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 25);
        assert_eq!(tracker.snapshot().calls, 25);
    }
}
