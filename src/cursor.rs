use cgmath::prelude::*;

/// The follower is hidden on viewports narrower than this.
pub const CURSOR_BREAKPOINT: f32 = 768.0;

/// Seconds the outline takes to catch up with the pointer.
pub const OUTLINE_LAG: f64 = 0.5;

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: cgmath::Vector2<f32>,
    to: cgmath::Vector2<f32>,
    started: f64,
}

impl Tween {
    fn at(&self, now: f64) -> cgmath::Vector2<f32> {
        let t = ((now - self.started) / OUTLINE_LAG).clamp(0.0, 1.0) as f32;
        self.from.lerp(self.to, t)
    }
}

/// A dot glued to the pointer and an outline that trails it.
#[derive(Debug, Default)]
pub struct CursorFollower {
    dot: Option<cgmath::Vector2<f32>>,
    outline: Option<Tween>,
}

pub fn is_enabled(viewport_width: f32) -> bool {
    viewport_width >= CURSOR_BREAKPOINT
}

impl CursorFollower {
    /// Every move restarts the outline animation from wherever the outline
    /// currently is, and the outline holds the target once it arrives.
    pub fn on_pointer_move(&mut self, pos: cgmath::Vector2<f32>, now: f64) {
        if self.dot == Some(pos) {
            return;
        }
        self.dot = Some(pos);
        let from = self.outline(now).unwrap_or(pos);
        self.outline = Some(Tween {
            from,
            to: pos,
            started: now,
        });
    }

    pub fn dot(&self) -> Option<cgmath::Vector2<f32>> {
        self.dot
    }

    pub fn outline(&self, now: f64) -> Option<cgmath::Vector2<f32>> {
        self.outline.map(|tween| tween.at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nothing_before_first_move() {
        let cursor = CursorFollower::default();
        assert_eq!(cursor.dot(), None);
        assert_eq!(cursor.outline(10.0), None);
    }

    #[test]
    fn dot_is_immediate_outline_lags() {
        let mut cursor = CursorFollower::default();
        cursor.on_pointer_move(cgmath::vec2(0.0, 0.0), 0.0);
        cursor.on_pointer_move(cgmath::vec2(100.0, 50.0), 1.0);

        assert_eq!(cursor.dot(), Some(cgmath::vec2(100.0, 50.0)));

        let halfway = cursor.outline(1.25).unwrap();
        assert_relative_eq!(halfway.x, 50.0);
        assert_relative_eq!(halfway.y, 25.0);

        assert_eq!(cursor.outline(1.5), Some(cgmath::vec2(100.0, 50.0)));
        assert_eq!(cursor.outline(9.0), Some(cgmath::vec2(100.0, 50.0)));
    }

    #[test]
    fn new_move_starts_from_current_outline() {
        let mut cursor = CursorFollower::default();
        cursor.on_pointer_move(cgmath::vec2(0.0, 0.0), 0.0);
        cursor.on_pointer_move(cgmath::vec2(100.0, 0.0), 1.0);
        // Interrupted a quarter of the way in.
        cursor.on_pointer_move(cgmath::vec2(100.0, 100.0), 1.125);

        let start = cursor.outline(1.125).unwrap();
        assert_relative_eq!(start.x, 25.0);
        assert_relative_eq!(start.y, 0.0);

        let end = cursor.outline(1.625).unwrap();
        assert_relative_eq!(end.x, 100.0);
        assert_relative_eq!(end.y, 100.0);
    }

    #[test]
    fn hidden_below_breakpoint() {
        assert!(!is_enabled(767.0));
        assert!(is_enabled(768.0));
        assert!(is_enabled(1440.0));
    }
}
