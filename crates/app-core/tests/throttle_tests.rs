// Host-side tests for the trailing-edge throttle window arithmetic.

use app_core::{Gate, Throttle};

#[test]
fn first_call_runs_immediately() {
    let mut th = Throttle::new(120);
    assert_eq!(th.submit(0, "a"), Gate::Run("a"));
    assert!(!th.is_armed());
}

#[test]
fn rapid_calls_collapse_to_one_trailing_run_with_latest_args() {
    // Calls at t=0, 50, 90 with a 120 ms window: one immediate run, one
    // trailing run at t=120 carrying the t=90 arguments.
    let mut th = Throttle::new(120);
    assert_eq!(th.submit(0, "t0"), Gate::Run("t0"));
    assert_eq!(th.submit(50, "t50"), Gate::Arm { delay_ms: 70 });
    assert_eq!(th.submit(90, "t90"), Gate::Pending);
    assert_eq!(th.take_pending(120), Some("t90"));
    assert!(!th.is_armed());
}

#[test]
fn window_reopens_after_trailing_run() {
    let mut th = Throttle::new(120);
    assert_eq!(th.submit(0, 1), Gate::Run(1));
    assert_eq!(th.submit(50, 2), Gate::Arm { delay_ms: 70 });
    assert_eq!(th.take_pending(120), Some(2));
    // the trailing run at t=120 opened a fresh window
    assert_eq!(th.submit(150, 3), Gate::Arm { delay_ms: 90 });
    assert_eq!(th.take_pending(240), Some(3));
    assert_eq!(th.submit(400, 4), Gate::Run(4));
}

#[test]
fn idle_gap_longer_than_window_runs_on_leading_edge() {
    let mut th = Throttle::new(120);
    assert_eq!(th.submit(0, 1), Gate::Run(1));
    assert_eq!(th.submit(121, 2), Gate::Run(2));
    assert_eq!(th.submit(500, 3), Gate::Run(3));
}

#[test]
fn cancel_drops_the_pending_call() {
    let mut th = Throttle::new(120);
    assert_eq!(th.submit(0, "a"), Gate::Run("a"));
    assert_eq!(th.submit(50, "b"), Gate::Arm { delay_ms: 70 });
    th.cancel();
    assert!(!th.is_armed());
    assert_eq!(th.take_pending(120), None);
    // a cancelled trailing run must not count as a run
    assert_eq!(th.submit(121, "c"), Gate::Run("c"));
}

#[test]
fn take_pending_without_pending_is_none() {
    let mut th: Throttle<u32> = Throttle::new(120);
    assert_eq!(th.take_pending(0), None);
}
