use chrono::{DateTime, DurationRound, TimeDelta, Utc};

use crate::{
    core::policy::{Location, WaitPolicy},
    error::ScheduleError,
};

/// One optimizer call's worth of parameters, derived from a policy
/// and «now». Built, sent, and discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationRequest {
    /// Earliest instant the work may start. Hour-aligned, strictly future.
    pub start_window: DateTime<Utc>,

    /// Latest instant the work may start. Hour-aligned, never before
    /// [`Self::start_window`].
    pub end_window: DateTime<Utc>,

    /// Whole hours reserved for the work.
    pub duration_hours: i64,

    pub location: Location,

    pub metric: String,
}

/// Turn the policy into a concrete optimization window.
///
/// Pure: the caller supplies «now», and identical inputs produce identical
/// requests. Fails only on an invalid policy, never on the clock.
pub fn plan(
    now: DateTime<Utc>,
    policy: &WaitPolicy,
) -> Result<OptimizationRequest, ScheduleError> {
    policy.validate()?;
    let start_window = next_hour_after(now);
    // A patience shorter than the gap to the next hour collapses the window
    // to a single point; the optimizer then has exactly one answer.
    let end_window = ceil_to_hour(now + policy.patience).max(start_window);
    Ok(OptimizationRequest {
        start_window,
        end_window,
        duration_hours: duration_hours(policy.expected_duration),
        location: policy.location,
        metric: policy.metric.clone(),
    })
}

/// The next hour boundary strictly after `instant`.
///
/// An instant already on a boundary still advances a full hour: the
/// optimizer is only ever handed a window that lies entirely in the future.
fn next_hour_after(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.duration_trunc(TimeDelta::hours(1)).unwrap() + TimeDelta::hours(1)
}

/// The nearest hour boundary at or after `instant`.
fn ceil_to_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    let floor = instant.duration_trunc(TimeDelta::hours(1)).unwrap();
    if floor == instant { floor } else { floor + TimeDelta::hours(1) }
}

/// Whole hours to reserve: a sub-hour expected duration still books one.
fn duration_hours(expected_duration: TimeDelta) -> i64 {
    let whole_hours = expected_duration.num_hours();
    let rounded_up = if expected_duration > TimeDelta::hours(whole_hours) {
        whole_hours + 1
    } else {
        whole_hours
    };
    rounded_up.max(1)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
            .and_utc()
    }

    fn policy(patience: TimeDelta, expected_duration: TimeDelta) -> WaitPolicy {
        WaitPolicy::builder()
            .patience(patience)
            .expected_duration(expected_duration)
            .location(Location::new(48.8566, 2.3522))
            .build()
    }

    #[test]
    fn test_start_window_is_the_next_hour() -> Result<(), ScheduleError> {
        let request = plan(at(10, 45, 30), &policy(TimeDelta::hours(4), TimeDelta::hours(1)))?;
        assert_eq!(request.start_window, at(11, 0, 0));
        Ok(())
    }

    #[test]
    fn test_start_window_advances_on_an_exact_boundary() -> Result<(), ScheduleError> {
        let request = plan(at(10, 0, 0), &policy(TimeDelta::hours(4), TimeDelta::hours(1)))?;
        assert_eq!(request.start_window, at(11, 0, 0));
        Ok(())
    }

    #[test]
    fn test_end_window_rounds_up_to_the_next_hour() -> Result<(), ScheduleError> {
        // 10:45:30 with 4 hours of patience ends the window at 15:00.
        let request = plan(at(10, 45, 30), &policy(TimeDelta::hours(4), TimeDelta::hours(1)))?;
        assert_eq!(request.end_window, at(15, 0, 0));
        Ok(())
    }

    #[test]
    fn test_end_window_stays_on_an_exact_boundary() -> Result<(), ScheduleError> {
        let request = plan(at(10, 0, 0), &policy(TimeDelta::hours(4), TimeDelta::hours(1)))?;
        assert_eq!(request.end_window, at(14, 0, 0));
        Ok(())
    }

    #[test]
    fn test_short_patience_collapses_to_a_one_point_window() -> Result<(), ScheduleError> {
        let request = plan(at(10, 10, 0), &policy(TimeDelta::minutes(5), TimeDelta::hours(1)))?;
        assert_eq!(request.start_window, at(11, 0, 0));
        assert_eq!(request.end_window, request.start_window);
        Ok(())
    }

    #[test]
    fn test_duration_rounds_up_to_whole_hours() -> Result<(), ScheduleError> {
        let request = plan(at(10, 0, 0), &policy(TimeDelta::hours(4), TimeDelta::minutes(90)))?;
        assert_eq!(request.duration_hours, 2);
        Ok(())
    }

    #[test]
    fn test_sub_hour_duration_still_books_one_hour() -> Result<(), ScheduleError> {
        let request = plan(at(10, 0, 0), &policy(TimeDelta::hours(4), TimeDelta::minutes(10)))?;
        assert_eq!(request.duration_hours, 1);
        Ok(())
    }

    #[test]
    fn test_exact_hours_are_not_rounded_up() -> Result<(), ScheduleError> {
        let request = plan(at(10, 0, 0), &policy(TimeDelta::hours(4), TimeDelta::hours(2)))?;
        assert_eq!(request.duration_hours, 2);
        Ok(())
    }

    #[test]
    fn test_plan_is_deterministic() -> Result<(), ScheduleError> {
        let policy = policy(TimeDelta::hours(4), TimeDelta::minutes(90));
        let now = at(10, 45, 30);
        assert_eq!(plan(now, &policy)?, plan(now, &policy)?);
        Ok(())
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let result = plan(at(10, 0, 0), &policy(TimeDelta::zero(), TimeDelta::hours(1)));
        assert!(matches!(result, Err(ScheduleError::InvalidPolicy(_))));
    }
}
