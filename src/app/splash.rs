//! One-shot loading gate shown right after mount.

use std::time::{Duration, Instant};

/// How long the loading screen stays up.
pub const SPLASH_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Pending { deadline: Instant },
    Fired,
    Cancelled,
}

/// Deadline that ends the loading phase exactly once.
///
/// The gate never reads the clock itself; callers pass `now` so the
/// transition is deterministic in tests.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    state: GateState,
}

impl LoadingGate {
    /// Arm a gate that fires `delay` after `now`.
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            state: GateState::Pending {
                deadline: now + delay,
            },
        }
    }

    /// Returns `true` on the single poll where the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            GateState::Pending { deadline } if now >= deadline => {
                self.state = GateState::Fired;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending transition. No effect once fired.
    pub fn cancel(&mut self) {
        if let GateState::Pending { .. } = self.state {
            self.state = GateState::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut gate = LoadingGate::new(start, SPLASH_DELAY);

        assert!(!gate.poll(start));
        assert!(!gate.poll(start + Duration::from_millis(799)));
        assert!(gate.poll(start + SPLASH_DELAY));
        assert_eq!(gate.state, GateState::Fired);
        assert!(!gate.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut gate = LoadingGate::new(start, SPLASH_DELAY);
        gate.cancel();
        assert!(!gate.poll(start + Duration::from_secs(1)));
        assert_eq!(gate.state, GateState::Cancelled);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let start = Instant::now();
        let mut gate = LoadingGate::new(start, Duration::ZERO);
        assert!(gate.poll(start));
        gate.cancel();
        assert_eq!(gate.state, GateState::Fired);
    }
}
