//! Tick scheduling without async/await or platform timers.
//!
//! [`TickTimer`] is a software timer polled from the owner's loop. The
//! controller keeps at most one periodic registration alive at a time;
//! handles are generation counters so a stale cancel is a no-op.

use embassy_time::{Duration, Instant};

/// Handle identifying one periodic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskHandle(u32);

#[derive(Debug, Clone, Copy)]
struct Registration {
    handle: TaskHandle,
    interval: Duration,
    next_due: Instant,
}

/// Polled software timer with a single periodic slot
#[derive(Debug, Default)]
pub struct TickTimer {
    registration: Option<Registration>,
    next_id: u32,
}

impl TickTimer {
    pub const fn new() -> Self {
        Self {
            registration: None,
            next_id: 0,
        }
    }

    /// Register a periodic tick at `interval`, starting from `now`.
    ///
    /// The first tick becomes due one full interval after `now`. Any
    /// previous registration is replaced; callers that care about the
    /// old slot cancel it first.
    pub fn register(&mut self, interval: Duration, now: Instant) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.registration = Some(Registration {
            handle,
            interval,
            next_due: now + interval,
        });
        handle
    }

    /// Cancel a registration by handle.
    ///
    /// Stale handles are ignored, so cancel is idempotent.
    pub fn cancel(&mut self, handle: TaskHandle) {
        if let Some(registration) = self.registration {
            if registration.handle == handle {
                self.registration = None;
            }
        }
    }

    /// Advance the timer clock; returns whether a tick is due.
    ///
    /// Fires at most once per call. If the owner stalls for more than
    /// two intervals the backlog is skipped instead of replayed, so a
    /// long pause never causes a burst of ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(registration) = &mut self.registration else {
            return false;
        };

        if now.as_millis() < registration.next_due.as_millis() {
            return false;
        }

        let interval_ms = registration.interval.as_millis();
        let behind_ms = now.as_millis() - registration.next_due.as_millis();
        if behind_ms > interval_ms * 2 {
            registration.next_due = now + registration.interval;
        } else {
            registration.next_due += registration.interval;
        }
        true
    }

    /// Number of live registrations (0 or 1)
    pub const fn active_registrations(&self) -> usize {
        if self.registration.is_some() { 1 } else { 0 }
    }

    /// Interval of the live registration, if any
    pub fn interval(&self) -> Option<Duration> {
        self.registration.map(|registration| registration.interval)
    }
}
