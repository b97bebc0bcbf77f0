//! Fixed inter-request pacing.
//!
//! The platform rate-limits anonymous GraphQL callers without telling us the
//! budget, so every snippet fetch is followed by a fixed pause. Tests inject
//! [`NoPacing`] to stay fast.

use std::time::Duration;

/// Invoked once after every snippet fetch attempt, success or failure.
pub trait Pacer {
    fn pause(&self);
}

/// Blocks the calling thread for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self) {}
}
