//! Value tween driven by the millisecond clock

use mint_hal::elapsed_ms;

use super::easing::EasingCurve;

/// A time-bounded tween from one value to another
///
/// The tween is a pure function of `now - start`. It is armed by
/// [`Animation::start`] and completes lazily: nothing happens when the
/// duration runs out, the next [`Animation::tick`] (or
/// [`Animation::sample`]) observes the end and clears the running flag.
/// When idle it returns its end value, which is the resting value of
/// whatever it animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    start_ms: u32,
    duration_ms: u32,
    from: f32,
    to: f32,
    running: bool,
    curve: EasingCurve,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation {
    /// Idle animation resting at 0 on the spring curve
    pub const fn new() -> Self {
        Self::resting(0.0)
    }

    /// Idle animation resting at `value`
    pub const fn resting(value: f32) -> Self {
        Self {
            start_ms: 0,
            duration_ms: 0,
            from: value,
            to: value,
            running: false,
            curve: EasingCurve::SPRING,
        }
    }

    /// Use a different easing curve
    pub const fn with_curve(mut self, curve: EasingCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Arm the tween with `now_ms` as its origin
    pub fn start(&mut self, from: f32, to: f32, duration_ms: u32, now_ms: u32) {
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        self.from = from;
        self.to = to;
        self.running = true;
    }

    /// Value at `now_ms`, without changing state
    pub fn value(&self, now_ms: u32) -> f32 {
        if !self.is_active(now_ms) {
            return self.to;
        }
        let t = self.progress(now_ms);
        self.from + (self.to - self.from) * self.curve.ease(t)
    }

    /// Value at `now_ms`, finalizing the tween if it has run its course
    pub fn sample(&mut self, now_ms: u32) -> f32 {
        self.tick(now_ms);
        self.value(now_ms)
    }

    /// Observe completion at `now_ms`; returns whether still running
    pub fn tick(&mut self, now_ms: u32) -> bool {
        if self.running && elapsed_ms(now_ms, self.start_ms) >= self.duration_ms {
            self.running = false;
        }
        self.running
    }

    /// Running flag as of the last tick
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while running and the duration has not yet elapsed at `now_ms`
    pub fn is_active(&self, now_ms: u32) -> bool {
        self.running && elapsed_ms(now_ms, self.start_ms) < self.duration_ms
    }

    /// Elapsed fraction of the duration at `now_ms`, in [0, 1]
    pub fn progress(&self, now_ms: u32) -> f32 {
        if !self.is_active(now_ms) {
            return 1.0;
        }
        elapsed_ms(now_ms, self.start_ms) as f32 / self.duration_ms as f32
    }

    /// Settle immediately at the end value
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// End value (the resting value once finished or stopped)
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start value of the current or last run
    pub fn origin(&self) -> f32 {
        self.from
    }

    /// Configured duration in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_returns_resting_value() {
        let anim = Animation::resting(3.0);
        assert_eq!(anim.value(12345), 3.0);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_starts_at_from() {
        let mut anim = Animation::new();
        anim.start(10.0, 20.0, 100, 1000);
        assert_eq!(anim.value(1000), 10.0);
        assert!(anim.is_running());
    }

    #[test]
    fn test_ends_at_to_and_finalizes_lazily() {
        let mut anim = Animation::new();
        anim.start(0.0, 128.0, 250, 0);

        // Pure query does not clear the flag
        assert_eq!(anim.value(250), 128.0);
        assert!(anim.is_running());

        assert!(!anim.tick(250));
        assert!(!anim.is_running());
    }

    #[test]
    fn test_sample_finalizes() {
        let mut anim = Animation::new();
        anim.start(0.0, 1.0, 150, 0);
        assert!(anim.sample(100) > 0.0);
        assert!(anim.is_running());
        assert_eq!(anim.sample(150), 1.0);
        assert!(!anim.is_running());
    }

    #[test]
    fn test_stop_freezes_at_end() {
        let mut anim = Animation::new();
        anim.start(128.0, 0.0, 250, 0);
        anim.stop();
        assert_eq!(anim.value(10), 0.0);
        assert_eq!(anim.sample(10), 0.0);
        // Idempotent
        anim.stop();
        assert!(!anim.is_running());
    }

    #[test]
    fn test_survives_clock_wrap() {
        let mut anim = Animation::new().with_curve(EasingCurve::LINEAR);
        let start = u32::MAX - 49;
        anim.start(0.0, 100.0, 100, start);

        let mid = start.wrapping_add(50);
        let v = anim.value(mid);
        assert!(v > 49.0 && v < 51.0);
        assert!(anim.tick(mid));
        assert!(!anim.tick(start.wrapping_add(100)));
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut anim = Animation::new();
        anim.start(5.0, 9.0, 0, 42);
        assert_eq!(anim.value(42), 9.0);
        assert!(!anim.tick(42));
    }

    #[test]
    fn test_spring_overshoots_target() {
        let mut anim = Animation::new();
        anim.start(0.0, 8.0, 150, 0);
        // Around a third of the way the spring curve peaks above 1.0
        assert!(anim.value(50) > 8.0);
    }

    #[test]
    fn test_progress() {
        let mut anim = Animation::new();
        assert_eq!(anim.progress(0), 1.0);
        anim.start(0.0, 1.0, 200, 100);
        assert_eq!(anim.progress(150), 0.25);
        assert_eq!(anim.progress(400), 1.0);
    }
}
