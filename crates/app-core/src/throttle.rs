//! Trailing-edge throttle state, kept separate from browser timers so the
//! window arithmetic is testable on the host.
//!
//! The caller owns the actual timer: `submit` says whether to run now, arm a
//! timer, or do nothing; `take_pending` is what the armed timer consumes when
//! it fires. At most one run happens per `limit_ms` window, and the most
//! recent pending call's arguments are the ones that survive to the trailing
//! run.

/// What the caller should do with a submitted call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate<T> {
    /// The window has elapsed: run immediately, args handed back.
    Run(T),
    /// First deferred call in this window: arm a timer for `delay_ms`.
    Arm { delay_ms: u64 },
    /// A timer is already armed; the stored args were replaced.
    Pending,
}

#[derive(Debug)]
pub struct Throttle<T> {
    limit_ms: u64,
    last_run_ms: Option<u64>,
    pending: Option<T>,
    armed: bool,
}

impl<T> Throttle<T> {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            last_run_ms: None,
            pending: None,
            armed: false,
        }
    }

    pub fn limit_ms(&self) -> u64 {
        self.limit_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn submit(&mut self, now_ms: u64, args: T) -> Gate<T> {
        if self.armed {
            self.pending = Some(args);
            return Gate::Pending;
        }
        let remaining = match self.last_run_ms {
            Some(last) => self.limit_ms.saturating_sub(now_ms.saturating_sub(last)),
            None => 0,
        };
        if remaining == 0 {
            self.last_run_ms = Some(now_ms);
            return Gate::Run(args);
        }
        self.pending = Some(args);
        self.armed = true;
        Gate::Arm {
            delay_ms: remaining,
        }
    }

    /// Consume the deferred call when the armed timer fires. Returns `None`
    /// if the pending call was cancelled in the meantime.
    pub fn take_pending(&mut self, now_ms: u64) -> Option<T> {
        self.armed = false;
        let args = self.pending.take();
        if args.is_some() {
            self.last_run_ms = Some(now_ms);
        }
        args
    }

    /// Drop any deferred call. The caller must also clear its timer.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.pending = None;
    }
}
