//! Barrel launch timer
//!
//! Unlike everything else, barrel launches run on wall-clock time rather
//! than frame count.

use rand::Rng;

use crate::difficulty::Difficulty;
use crate::entities::BarrelPool;

/// Interval per point of `barrel_frequency`
pub const SPAWN_BASE_MS: u64 = 1000;

/// Random extra delay added to each interval, exclusive upper bound
pub const SPAWN_JITTER_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnScheduler {
    last_spawn_ms: u64,
    interval_ms: u64,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing from `now_ms` with a freshly drawn interval
    pub fn arm<R: Rng>(&mut self, now_ms: u64, difficulty: &Difficulty, rng: &mut R) {
        self.last_spawn_ms = now_ms;
        self.interval_ms = draw_interval(difficulty, rng);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.last_spawn_ms + self.interval_ms
    }

    /// On expiry, re-arm and fire one idle barrel. Returns the fired slot.
    pub fn tick<R: Rng>(
        &mut self,
        now_ms: u64,
        difficulty: &Difficulty,
        rng: &mut R,
        pool: &mut BarrelPool,
    ) -> Option<usize> {
        if !self.is_due(now_ms) {
            return None;
        }
        self.arm(now_ms, difficulty, rng);

        let fired = pool.activate_next();
        match fired {
            Some(slot) => log::debug!(
                "Barrel {} launched, next in {}ms",
                slot,
                self.interval_ms
            ),
            None => log::debug!("Spawn tick with no idle barrel"),
        }
        fired
    }
}

fn draw_interval<R: Rng>(difficulty: &Difficulty, rng: &mut R) -> u64 {
    let frequency = difficulty.barrel_frequency.max(0) as u64;
    SPAWN_BASE_MS * frequency + rng.random_range(0..SPAWN_JITTER_MS)
}
