//! Time-gated spawning.

/// Countdown timer for one spawn category.
///
/// Decremented once per tick; `tick` reports `true` on the tick the
/// countdown reaches zero. The caller spawns and then calls `reset` with
/// the next interval, which may shrink with difficulty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// A countdown that fires on its first tick.
    pub fn ready() -> Self {
        Self { remaining: 0 }
    }

    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    pub fn reset(&mut self, ticks: u32) {
        self.remaining = ticks;
    }
}

/// Interval that shrinks by `step` per level but never below `floor`.
pub fn scaled_interval(base: u32, step: u32, level: u32, floor: u32) -> u32 {
    base.saturating_sub(step.saturating_mul(level)).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_fires_immediately() {
        let mut c = Countdown::ready();
        assert!(c.tick());
    }

    #[test]
    fn next_spawn_after_exactly_the_interval() {
        let mut c = Countdown::ready();
        let mut fired = Vec::new();
        for t in 0..25u32 {
            if c.tick() {
                fired.push(t);
                c.reset(10);
            }
        }
        assert_eq!(fired, vec![0, 10, 20]);
    }

    #[test]
    fn interval_is_non_increasing_with_floor() {
        let intervals: Vec<u32> = (0..30).map(|l| scaled_interval(60, 3, l, 20)).collect();
        assert!(intervals.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(intervals[1], 57);
        assert_eq!(*intervals.last().unwrap(), 20);
    }
}
