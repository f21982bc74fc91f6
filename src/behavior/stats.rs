//! Stats counter: a stepped count-up from zero, fired once for all counters.

/// Steps a displayed integer from 0 to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    current: i64,
    target: i64,
    step: i64,
    interval_ms: u32,
    done: bool,
}

impl CounterAnimation {
    /// `steps` is the divisor for the per-tick increment (`ceil(|target| / steps)`).
    pub fn new(target: i64, duration_ms: u32, steps: i64) -> Self {
        if target == 0 {
            return Self {
                current: 0,
                target,
                step: 0,
                interval_ms: 0,
                done: true,
            };
        }

        let magnitude = target.unsigned_abs();
        let steps = steps.max(1).unsigned_abs();
        let step = magnitude.div_ceil(steps) as i64 * target.signum();
        // Sub-millisecond intervals are clamped to 1ms, the browser clamps harder anyway.
        let interval_ms = (f64::from(duration_ms) / target as f64).floor().abs().max(1.0) as u32;

        Self {
            current: 0,
            target,
            step,
            interval_ms,
            done: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one step. The final step lands exactly on the target.
    pub fn tick(&mut self) -> i64 {
        if self.done {
            return self.current;
        }
        self.current += self.step;
        let overshot = (self.step > 0 && self.current >= self.target)
            || (self.step < 0 && self.current <= self.target);
        if overshot {
            self.current = self.target;
            self.done = true;
        }
        self.current
    }
}

/// Compact display of a counter value: `1.5M`, `3K`, `42`.
pub fn format_stat(value: i64) -> String {
    if value >= 1_000_000 {
        let tenths = (value as f64 / 100_000.0).round() / 10.0;
        format!("{:.1}M", tenths)
    } else if value >= 1_000 {
        format!("{}K", (value as f64 / 1_000.0).round() as i64)
    } else {
        value.to_string()
    }
}

/// Single "has animated" latch shared by every counter on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsTrigger {
    has_animated: bool,
}

impl StatsTrigger {
    /// Returns true exactly once: the first time any counter is visible.
    pub fn should_start(&mut self, any_visible: bool) -> bool {
        if self.has_animated || !any_visible {
            return false;
        }
        self.has_animated = true;
        true
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: i64) -> Vec<i64> {
        let mut counter = CounterAnimation::new(target, 2000, 50);
        let mut values = Vec::new();
        while !counter.is_done() {
            values.push(counter.tick());
            assert!(values.len() <= 1_000, "counter never finished");
        }
        values
    }

    #[test]
    fn test_counter_reaches_target_exactly() {
        for target in [1, 7, 49, 50, 51, 250, 1_234, 1_500_000] {
            let values = run(target);
            assert_eq!(*values.last().unwrap(), target);
            assert!(values.windows(2).all(|w| w[0] < w[1]), "not increasing for {}", target);
        }
    }

    #[test]
    fn test_counter_negative_target_decreases() {
        let values = run(-120);
        assert_eq!(*values.last().unwrap(), -120);
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_counter_step_and_interval() {
        let counter = CounterAnimation::new(250, 2000, 50);
        assert_eq!(counter.interval_ms(), 8);

        let mut counter = CounterAnimation::new(120, 2000, 50);
        assert_eq!(counter.interval_ms(), 16);
        assert_eq!(counter.tick(), 3);
        assert_eq!(counter.tick(), 6);
    }

    #[test]
    fn test_counter_large_target_interval_clamped() {
        let counter = CounterAnimation::new(1_500_000, 2000, 50);
        assert_eq!(counter.interval_ms(), 1);
    }

    #[test]
    fn test_counter_zero_target_completes_immediately() {
        let mut counter = CounterAnimation::new(0, 2000, 50);
        assert!(counter.is_done());
        assert_eq!(counter.tick(), 0);
    }

    #[test]
    fn test_tick_after_done_is_stable() {
        let mut counter = CounterAnimation::new(3, 2000, 50);
        assert_eq!(counter.tick(), 1);
        assert_eq!(counter.tick(), 2);
        assert_eq!(counter.tick(), 3);
        assert!(counter.is_done());
        assert_eq!(counter.tick(), 3);
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(1_500_000), "1.5M");
        assert_eq!(format_stat(1_000_000), "1.0M");
        assert_eq!(format_stat(2_500), "3K");
        assert_eq!(format_stat(1_000), "1K");
        assert_eq!(format_stat(999_499), "999K");
        assert_eq!(format_stat(42), "42");
        assert_eq!(format_stat(0), "0");
    }

    #[test]
    fn test_trigger_fires_once() {
        let mut trigger = StatsTrigger::default();
        assert!(!trigger.should_start(false));
        assert!(trigger.should_start(true));
        assert!(trigger.has_animated());
        assert!(!trigger.should_start(true));
    }
}
