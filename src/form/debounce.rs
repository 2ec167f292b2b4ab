use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Debounce handle
// ---------------------------------------------------------------------------

/// An explicit, owned trailing-edge debounce.
///
/// Each [`poke`](Debounce::poke) pushes the deadline to `now + window`;
/// [`poll`](Debounce::poll) reports expiry exactly once and disarms. Time is
/// always injected, so the handle is testable without sleeping.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Debounce {
            window,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the handle: the deadline moves to `now + window`.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until expiry, if armed. Zero when already past due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns `true` exactly once when the deadline has passed, disarming
    /// the handle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(1000);

    #[test]
    fn fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debounce::new(WINDOW);

        d.poke(t0);
        assert!(!d.poll(t0 + Duration::from_millis(999)));
        assert!(d.poll(t0 + Duration::from_millis(1000)));
        // Already fired; stays quiet until the next poke.
        assert!(!d.poll(t0 + Duration::from_millis(5000)));
    }

    #[test]
    fn each_poke_resets_the_deadline() {
        let t0 = Instant::now();
        let mut d = Debounce::new(WINDOW);

        d.poke(t0);
        d.poke(t0 + Duration::from_millis(800));
        assert!(!d.poll(t0 + Duration::from_millis(1500)));
        assert!(d.poll(t0 + Duration::from_millis(1800)));
    }

    #[test]
    fn cancel_disarms() {
        let t0 = Instant::now();
        let mut d = Debounce::new(WINDOW);

        d.poke(t0);
        d.cancel();
        assert!(!d.is_armed());
        assert!(!d.poll(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let t0 = Instant::now();
        let mut d = Debounce::new(WINDOW);

        assert_eq!(d.remaining(t0), None);
        d.poke(t0);
        assert_eq!(d.remaining(t0 + Duration::from_millis(400)), Some(Duration::from_millis(600)));
        assert_eq!(d.remaining(t0 + Duration::from_millis(1200)), Some(Duration::ZERO));
    }
}
