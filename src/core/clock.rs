//! Injectable time sources.
//!
//! The engine never reads a global clock directly: it samples a [`Clock`]
//! once per tick, which keeps the whole pipeline deterministic under test.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// A source of the current time, in seconds.
///
/// Only deltas between readings matter; the origin is arbitrary.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time measured from the moment the clock was created.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A manually advanced clock for deterministic tests and headless runs.
///
/// Clones share the same underlying time cell, so a test can hand one clone
/// to the engine and keep another to drive time forward.
#[derive(Clone, Default)]
pub struct ManualClock {
    time: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `dt` seconds.
    pub fn advance(&self, dt: f64) {
        self.time.set(self.time.get() + dt);
    }

    /// Set the clock to an absolute time in seconds.
    pub fn set(&self, t: f64) {
        self.time.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}
