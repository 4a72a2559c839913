use std::time::Duration;

/// Fixed-interval timer driven by the frame clock. Owned by whoever needs the
/// tick; dropping the owner stops the ticks with it.
pub struct Ticker {
    period: Duration,
    elapsed: Duration,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::default(),
        }
    }

    /// Feeds one frame's delta and returns how many whole periods elapsed,
    /// so a slow frame still fires the right number of catch-up ticks.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.elapsed += delta;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_period_delta_fires_nothing() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        assert_eq!(ticker.tick(Duration::from_millis(99)), 0);
    }

    #[test]
    fn accumulated_deltas_fire_once() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        assert_eq!(ticker.tick(Duration::from_millis(60)), 0);
        assert_eq!(ticker.tick(Duration::from_millis(60)), 1);
        // 20ms carried over
        assert_eq!(ticker.tick(Duration::from_millis(80)), 1);
    }

    #[test]
    fn slow_frame_fires_catch_up_ticks() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        assert_eq!(ticker.tick(Duration::from_millis(350)), 3);
        assert_eq!(ticker.tick(Duration::from_millis(50)), 1);
    }
}
