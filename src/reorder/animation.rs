use egui::emath::easing;

/// A fixed-duration eased transition between two values, evaluated against host time (seconds).
///
/// Purely visual: nothing in the reorder logic waits on a tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Tween {
    from: f32,
    to: f32,
    start_time: f64,
    duration: f32,
}

impl Tween {
    /// A tween that is already finished at `value`.
    pub(super) fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start_time: f64::NEG_INFINITY,
            duration: 0.0,
        }
    }

    pub(super) fn new(from: f32, to: f32, start_time: f64, duration: f32) -> Self {
        Self {
            from,
            to,
            start_time,
            duration: duration.max(0.0),
        }
    }

    fn progress(&self, time: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = (time - self.start_time) as f32;
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub(super) fn value_at(&self, time: f64) -> f32 {
        let t = self.progress(time);
        if t >= 1.0 {
            return self.to;
        }
        egui::lerp(self.from..=self.to, easing::cubic_out(t))
    }

    pub(super) fn is_finished(&self, time: f64) -> bool {
        self.progress(time) >= 1.0
    }
}
