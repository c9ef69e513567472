use crate::constants::MAX_TIMER_FIRES;

// Frame-driven repeating timer. Time is fed in by the render loop, the
// same way the slideshow states accumulate `dt` against their durations.
#[derive(Debug, Clone)]
pub struct RecurringTimer {
    interval: f32,
    elapsed: f32,
    running: bool,
}

impl RecurringTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the timer by `dt` seconds and returns how many times it fired.
    /// A long frame may fire more than once (capped at `MAX_TIMER_FIRES`);
    /// the remainder carries over.
    pub fn update(&mut self, dt: f32) -> u32 {
        if !self.running || self.interval <= 0.0 {
            return 0;
        }

        self.elapsed += dt;
        let fired = (self.elapsed / self.interval).floor();
        self.elapsed -= fired * self.interval;
        // Rounding can leave the remainder just outside [0, interval)
        if !(0.0..self.interval).contains(&self.elapsed) {
            self.elapsed = 0.0;
        }
        fired.min(MAX_TIMER_FIRES as f32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let mut timer = RecurringTimer::new(1.0);
        assert_eq!(timer.update(5.0), 0);
        timer.start();
        assert_eq!(timer.update(1.0), 1);
    }

    #[test]
    fn fires_once_per_interval_and_carries_remainder() {
        let mut timer = RecurringTimer::new(4.5);
        timer.start();
        assert_eq!(timer.update(1.5), 0);
        assert_eq!(timer.update(1.5), 0);
        assert_eq!(timer.update(1.5), 1);
        assert_eq!(timer.update(4.0), 0);
        assert_eq!(timer.update(0.5), 1);
    }

    #[test]
    fn long_frame_fires_multiple_times() {
        let mut timer = RecurringTimer::new(0.5);
        timer.start();
        assert_eq!(timer.update(1.75), 3);
        assert_eq!(timer.update(0.25), 1);
    }

    #[test]
    fn tiny_interval_returns_capped_fire_count() {
        let mut timer = RecurringTimer::new(1e-10);
        timer.start();
        assert_eq!(timer.update(0.016), MAX_TIMER_FIRES);
        assert_eq!(timer.update(0.016), MAX_TIMER_FIRES);
    }

    #[test]
    fn huge_frame_is_capped() {
        let mut timer = RecurringTimer::new(0.5);
        timer.start();
        assert_eq!(timer.update(1000.0), MAX_TIMER_FIRES);
        assert_eq!(timer.update(0.25), 0);
    }

    #[test]
    fn stop_cancels_future_fires() {
        let mut timer = RecurringTimer::new(0.5);
        timer.start();
        assert_eq!(timer.update(0.25), 0);
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.update(10.0), 0);
    }
}
