/// Quadratic ease-in-out.
///
/// `t` elapsed time, `b` start value, `c` total change, `d` duration.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// Progress of one smooth scroll, driven by frame timestamps.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTween {
    start: f64,
    distance: f64,
    duration: f64,
    started_at: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    pub position: f64,
    pub finished: bool,
}

impl ScrollTween {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration: duration_ms,
            started_at: None,
        }
    }

    /// Advance to the frame timestamp `now_ms`. The first call anchors the
    /// start time. The final step lands exactly on the target.
    pub fn step(&mut self, now_ms: f64) -> TweenStep {
        let started = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started;
        if elapsed >= self.duration {
            return TweenStep {
                position: self.start + self.distance,
                finished: true,
            };
        }
        TweenStep {
            position: ease_in_out_quad(elapsed, self.start, self.distance, self.duration),
            finished: false,
        }
    }
}
