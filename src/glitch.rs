//! Font rotation for the hero title.
//!
//! The title cycles through a short font stack in a burst when it first
//! appears (and again whenever its text changes), and keeps cycling for as
//! long as the pointer hovers it. Everything is a function of the frame
//! clock, so there are no timers to cancel.

use crate::i18n::TextDirection;

pub const BURST_STEP: f64 = 0.15;
pub const BURST_LENGTH: f64 = 1.5;
pub const HOVER_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleFont {
    Sans,
    Mono,
    Serif,
    Impact,
    Courier,
    Tahoma,
    Arial,
}

const LTR_FONTS: [TitleFont; 5] = [
    TitleFont::Sans,
    TitleFont::Mono,
    TitleFont::Serif,
    TitleFont::Impact,
    TitleFont::Courier,
];

const RTL_FONTS: [TitleFont; 5] = [
    TitleFont::Sans,
    TitleFont::Mono,
    TitleFont::Serif,
    TitleFont::Tahoma,
    TitleFont::Arial,
];

pub fn font_stack(direction: TextDirection) -> &'static [TitleFont] {
    match direction {
        TextDirection::Ltr => &LTR_FONTS,
        TextDirection::Rtl => &RTL_FONTS,
    }
}

#[derive(Clone, Debug)]
pub struct GlitchTitle {
    text: &'static str,
    direction: TextDirection,
    burst_started: f64,
    hover_started: Option<f64>,
}

impl GlitchTitle {
    pub fn new(text: &'static str, direction: TextDirection, now: f64) -> Self {
        Self {
            text,
            direction,
            burst_started: now,
            hover_started: None,
        }
    }

    /// Restarts the burst if the text differs from what is shown.
    pub fn set_text(&mut self, text: &'static str, direction: TextDirection, now: f64) {
        self.direction = direction;
        if self.text != text {
            self.text = text;
            self.burst_started = now;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        match (hovered, self.hover_started) {
            (true, None) => self.hover_started = Some(now),
            (false, Some(_)) => self.hover_started = None,
            _ => {}
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn font_index(&self, now: f64) -> usize {
        let len = font_stack(self.direction).len();
        if let Some(started) = self.hover_started {
            return ticks(now - started, HOVER_STEP) % len;
        }
        let elapsed = now - self.burst_started;
        if elapsed < BURST_LENGTH {
            ticks(elapsed, BURST_STEP) % len
        } else {
            0
        }
    }

    pub fn font(&self, now: f64) -> TitleFont {
        font_stack(self.direction)[self.font_index(now)]
    }
}

fn ticks(elapsed: f64, step: f64) -> usize {
    if elapsed <= 0.0 {
        0
    } else {
        (elapsed / step).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_cycles_then_settles() {
        let title = GlitchTitle::new("Under Construction", TextDirection::Ltr, 10.0);
        assert_eq!(title.font(10.0), TitleFont::Sans);
        assert_eq!(title.font(10.16), TitleFont::Mono);
        assert_eq!(title.font(10.31), TitleFont::Serif);
        assert_eq!(title.font(10.46), TitleFont::Impact);
        assert_eq!(title.font(10.61), TitleFont::Courier);
        assert_eq!(title.font(10.76), TitleFont::Sans);
        assert_eq!(title.font(11.4), TitleFont::Courier);
        assert_eq!(title.font(11.5), TitleFont::Sans);
        assert_eq!(title.font(30.0), TitleFont::Sans);
    }

    #[test]
    fn rtl_stack_uses_arabic_friendly_fonts() {
        let title = GlitchTitle::new("در حال ساخت", TextDirection::Rtl, 0.0);
        assert_eq!(title.font(0.46), TitleFont::Tahoma);
        assert_eq!(title.font(0.61), TitleFont::Arial);
    }

    #[test]
    fn text_change_restarts_burst() {
        let mut title = GlitchTitle::new("Under Construction", TextDirection::Ltr, 0.0);
        assert_eq!(title.font(5.2), TitleFont::Sans);

        // Same text: the burst is not restarted.
        title.set_text("Under Construction", TextDirection::Ltr, 5.0);
        assert_eq!(title.font(5.2), TitleFont::Sans);

        title.set_text("تر کار لاندې", TextDirection::Rtl, 5.0);
        assert_eq!(title.text(), "تر کار لاندې");
        assert_eq!(title.font(5.2), TitleFont::Mono);
        assert_eq!(title.font(5.5), TitleFont::Tahoma);
        assert_eq!(title.font(6.5), TitleFont::Sans);
    }

    #[test]
    fn hover_cycles_faster_and_resets() {
        let mut title = GlitchTitle::new("Under Construction", TextDirection::Ltr, 0.0);
        title.set_hovered(true, 20.0);
        assert_eq!(title.font(20.05), TitleFont::Sans);
        assert_eq!(title.font(20.15), TitleFont::Mono);
        assert_eq!(title.font(20.45), TitleFont::Courier);
        assert_eq!(title.font(20.55), TitleFont::Sans);
        assert_eq!(title.font(100.45), TitleFont::Courier);

        // Staying hovered does not restart the cycle.
        title.set_hovered(true, 20.3);
        assert_eq!(title.font(20.35), TitleFont::Impact);

        title.set_hovered(false, 21.0);
        assert_eq!(title.font(21.0), TitleFont::Sans);
        assert_eq!(title.font(21.15), TitleFont::Sans);
    }
}
