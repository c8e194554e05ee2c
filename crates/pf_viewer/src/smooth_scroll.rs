use std::time::{Duration, Instant};

/// Fixed-duration eased offset animation used to honour ScrollTo requests.
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        SmoothScroll {
            from,
            to,
            started: now,
            duration: Duration::from_millis(600),
        }
    }

    pub fn offset_at(&self, now: Instant) -> f32 {
        let progress = now.duration_since(self.started).as_secs_f32()
            / self.duration.as_secs_f32();
        let clamped = progress.min(1.0);

        // Ease-out cubic
        let eased = 1.0 - (1.0 - clamped).powi(3);

        self.from + (self.to - self.from) * eased
    }

    pub fn finished(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {

    use std::time::{Duration, Instant};

    use crate::smooth_scroll::SmoothScroll;

    #[test]
    fn animation_runs_from_start_to_target() {
        let t0 = Instant::now();
        let sut = SmoothScroll::new(100.0, 900.0, t0);

        assert_eq!(sut.offset_at(t0), 100.0);
        assert_eq!(sut.offset_at(t0 + Duration::from_millis(600)), 900.0);
        assert_eq!(sut.offset_at(t0 + Duration::from_millis(900)), 900.0);
    }

    #[test]
    fn animation_is_monotonic() {
        let t0 = Instant::now();
        let sut = SmoothScroll::new(0.0, 1000.0, t0);

        let mut previous = sut.offset_at(t0);
        for ms in (0..=600).step_by(50) {
            let offset = sut.offset_at(t0 + Duration::from_millis(ms));
            assert!(offset >= previous);
            previous = offset;
        }
    }

    #[test]
    fn finished_after_the_full_duration() {
        let t0 = Instant::now();
        let sut = SmoothScroll::new(0.0, 1000.0, t0);

        assert!(!sut.finished(t0 + Duration::from_millis(599)));
        assert!(sut.finished(t0 + Duration::from_millis(600)));
    }
}
