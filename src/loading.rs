/// Seconds the loading view stays up before content is revealed.
pub const LOADING_DELAY: f64 = 2.0;

/// Seconds the progress bar takes to fill.
pub const PROGRESS_DURATION: f64 = 1.5;

/// One-off simulated start-up. Not tied to any real readiness signal.
#[derive(Clone, Copy, Debug)]
pub struct LoadingSequence {
    started: f64,
}

impl LoadingSequence {
    pub fn start(now: f64) -> Self {
        Self { started: now }
    }

    pub fn is_loading(&self, now: f64) -> bool {
        now - self.started < LOADING_DELAY
    }

    /// Progress bar fill in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        let t = ((now - self.started) / PROGRESS_DURATION).clamp(0.0, 1.0);
        ease_in_out(t) as f32
    }
}

/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(t: f64) -> f64 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, t)
}

/// Evaluates a CSS timing function at time `t`: solve the x curve for the
/// curve parameter by bisection, then read y.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    fn coord(a: f64, b: f64, s: f64) -> f64 {
        let r = 1.0 - s;
        3.0 * r * r * s * a + 3.0 * r * s * s * b + s * s * s
    }

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let (mut low, mut high) = (0.0, 1.0);
    let mut s = t;
    for _ in 0..48 {
        let x = coord(x1, x2, s);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            low = s;
        } else {
            high = s;
        }
        s = 0.5 * (low + high);
    }
    coord(y1, y2, s)
}
