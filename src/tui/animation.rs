//! Presentation-only timing: the message cross-fade and the blessing slide.
//!
//! Animations are started by diffing the controller state before and after a
//! transition. Every query takes the current instant explicitly, so all of
//! this is pure and testable without a clock.

use std::time::{Duration, Instant};

use crate::greeting::GreetingState;

/// Message cross-fade length.
pub const FADE_DURATION: Duration = Duration::from_millis(600);

/// Blessing slide length, hidden to fully shown.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

// ============================================================================
// FADE
// ============================================================================

/// Cross-fade from the previous message to the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    /// Text being faded out.
    pub previous: String,
    /// Opacity `previous` had when this fade began; below 1 if it cut into another fade.
    pub from: f32,
    pub started: Instant,
}

/// What the message slot shows at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeFrame<'a> {
    /// First half: the old text, fading out.
    Outgoing { text: &'a str, opacity: f32 },
    /// Second half: the current text, fading in.
    Incoming { opacity: f32 },
}

impl Fade {
    pub fn new(previous: impl Into<String>, from: f32, started: Instant) -> Self {
        Self {
            previous: previous.into(),
            from,
            started,
        }
    }

    pub fn frame(&self, now: Instant) -> FadeFrame<'_> {
        let p = progress(now.saturating_duration_since(self.started), FADE_DURATION);
        if p < 0.5 {
            FadeFrame::Outgoing {
                text: &self.previous,
                opacity: self.from * (1.0 - p * 2.0),
            }
        } else {
            FadeFrame::Incoming {
                opacity: (p - 0.5) * 2.0,
            }
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= FADE_DURATION
    }
}

// ============================================================================
// SLIDE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Sliding up into view.
    Enter,
    /// Sliding down out of view.
    Exit,
}

/// Blessing slide. Visibility runs from 0 (hidden, fully below) to 1 (in place).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub direction: SlideDirection,
    /// Visibility when this slide began; non-trivial if it reversed a running slide.
    pub from: f32,
    pub started: Instant,
}

impl Slide {
    pub fn visibility(&self, now: Instant) -> f32 {
        let step = progress(now.saturating_duration_since(self.started), SLIDE_DURATION);
        match self.direction {
            SlideDirection::Enter => (self.from + step).min(1.0),
            SlideDirection::Exit => (self.from - step).max(0.0),
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        let v = self.visibility(now);
        match self.direction {
            SlideDirection::Enter => v >= 1.0,
            SlideDirection::Exit => v <= 0.0,
        }
    }
}

// ============================================================================
// ANIMATIONS
// ============================================================================

/// Every animation currently running on the screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animations {
    pub fade: Option<Fade>,
    pub slide: Option<Slide>,
}

impl Animations {
    /// Start whatever effects a transition from `before` to `after` calls for.
    pub fn observe(&mut self, before: &GreetingState, after: &GreetingState, now: Instant) {
        if before.message() != after.message() {
            let incoming_opacity = self.fade.as_ref().map(|f| match f.frame(now) {
                FadeFrame::Outgoing { .. } => None,
                FadeFrame::Incoming { opacity } => Some(opacity),
            });
            match incoming_opacity {
                // Old text is still on its way out; the new target fades in after it.
                Some(None) => {}
                Some(Some(opacity)) => self.fade = Some(Fade::new(before.message(), opacity, now)),
                None => self.fade = Some(Fade::new(before.message(), 1.0, now)),
            }
        }

        if before.show_extra_message() != after.show_extra_message() {
            let from = self.blessing_visibility(before.show_extra_message(), now);
            let direction = if after.show_extra_message() {
                SlideDirection::Enter
            } else {
                SlideDirection::Exit
            };
            self.slide = Some(Slide {
                direction,
                from,
                started: now,
            });
        }
    }

    /// Drop animations that have finished.
    pub fn settle(&mut self, now: Instant) {
        if self.fade.as_ref().is_some_and(|f| f.is_done(now)) {
            self.fade = None;
        }
        if self.slide.is_some_and(|s| s.is_done(now)) {
            self.slide = None;
        }
    }

    pub fn is_idle(&self) -> bool {
        self.fade.is_none() && self.slide.is_none()
    }

    /// How far the blessing is in view, given whether the controller says it is shown.
    pub fn blessing_visibility(&self, shown: bool, now: Instant) -> f32 {
        match &self.slide {
            Some(slide) => slide.visibility(now),
            None if shown => 1.0,
            None => 0.0,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn greeted(name: &str) -> GreetingState {
        let mut state = GreetingState::default();
        state.on_name_changed(name);
        state.on_greet_pressed();
        state
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(ms(0), ms(100)), 0.0);
        assert!((progress(ms(50), ms(100)) - 0.5).abs() < 1e-6);
        assert_eq!(progress(ms(500), ms(100)), 1.0);
        assert_eq!(progress(ms(5), Duration::ZERO), 1.0);
    }

    #[test]
    fn fade_shows_old_text_then_new() {
        let t0 = Instant::now();
        let fade = Fade::new("old", 1.0, t0);

        match fade.frame(t0 + ms(150)) {
            FadeFrame::Outgoing { text, opacity } => {
                assert_eq!(text, "old");
                assert!((opacity - 0.5).abs() < 1e-3);
            }
            other => panic!("expected outgoing, got {:?}", other),
        }

        match fade.frame(t0 + ms(450)) {
            FadeFrame::Incoming { opacity } => assert!((opacity - 0.5).abs() < 1e-3),
            other => panic!("expected incoming, got {:?}", other),
        }

        assert!(!fade.is_done(t0 + ms(599)));
        assert!(fade.is_done(t0 + FADE_DURATION));
    }

    #[test]
    fn slide_enter_and_exit() {
        let t0 = Instant::now();
        let enter = Slide {
            direction: SlideDirection::Enter,
            from: 0.0,
            started: t0,
        };
        assert_eq!(enter.visibility(t0), 0.0);
        assert!((enter.visibility(t0 + ms(150)) - 0.5).abs() < 1e-3);
        assert!(enter.is_done(t0 + SLIDE_DURATION));

        let exit = Slide {
            direction: SlideDirection::Exit,
            from: 1.0,
            started: t0,
        };
        assert_eq!(exit.visibility(t0), 1.0);
        assert_eq!(exit.visibility(t0 + ms(1000)), 0.0);
    }

    #[test]
    fn message_change_starts_fade() {
        let t0 = Instant::now();
        let before = GreetingState::default();
        let after = greeted("Mary");

        let mut animations = Animations::default();
        animations.observe(&before, &after, t0);

        let fade = animations.fade.as_ref().expect("fade should start");
        assert_eq!(fade.previous, "Rejoice in the Lord always!");
        assert!(animations.slide.is_none());
    }

    #[test]
    fn greeting_again_while_fading_out_keeps_old_text() {
        let t0 = Instant::now();
        let fresh = GreetingState::default();
        let mary = greeted("Mary");
        let mut anna = mary.clone();
        anna.on_name_changed("Anna");
        anna.on_greet_pressed();

        let mut animations = Animations::default();
        animations.observe(&fresh, &mary, t0);
        let fade_before = animations.fade.clone().unwrap();
        let on_screen = fade_before.frame(t0 + ms(100));
        animations.observe(&mary, &anna, t0 + ms(100));

        let fade = animations.fade.as_ref().expect("fade still running");
        assert_eq!(fade.frame(t0 + ms(100)), on_screen);
        match fade.frame(t0 + ms(100)) {
            FadeFrame::Outgoing { text, opacity } => {
                assert_eq!(text, "Rejoice in the Lord always!");
                assert!(opacity < 1.0);
            }
            other => panic!("expected outgoing, got {:?}", other),
        }
    }

    #[test]
    fn greeting_again_while_fading_in_fades_out_from_current_opacity() {
        let t0 = Instant::now();
        let fresh = GreetingState::default();
        let mary = greeted("Mary");
        let mut anna = mary.clone();
        anna.on_name_changed("Anna");
        anna.on_greet_pressed();

        let mut animations = Animations::default();
        animations.observe(&fresh, &mary, t0);
        // 450ms in: "Hello Mary!" is half faded in
        animations.observe(&mary, &anna, t0 + ms(450));

        let fade = animations.fade.as_ref().expect("fade restarted");
        assert_eq!(fade.previous, "Hello Mary!");
        assert!((fade.from - 0.5).abs() < 1e-3);
        match fade.frame(t0 + ms(450)) {
            FadeFrame::Outgoing { text, opacity } => {
                assert_eq!(text, "Hello Mary!");
                assert!((opacity - 0.5).abs() < 1e-3);
            }
            other => panic!("expected outgoing, got {:?}", other),
        }
    }

    #[test]
    fn unchanged_message_does_not_fade() {
        let before = GreetingState::default();
        let after = greeted("   ");
        let mut animations = Animations::default();
        animations.observe(&before, &after, Instant::now());
        assert!(animations.fade.is_none());
    }

    #[test]
    fn toggle_starts_slide_in() {
        let t0 = Instant::now();
        let before = GreetingState::default();
        let mut after = before.clone();
        after.on_toggle_pressed();

        let mut animations = Animations::default();
        animations.observe(&before, &after, t0);

        assert_eq!(animations.blessing_visibility(true, t0), 0.0);
        assert_eq!(animations.blessing_visibility(true, t0 + SLIDE_DURATION), 1.0);
    }

    #[test]
    fn reversed_slide_starts_where_the_last_one_was() {
        let t0 = Instant::now();
        let hidden = GreetingState::default();
        let mut shown = hidden.clone();
        shown.on_toggle_pressed();
        let mut hidden_again = shown.clone();
        hidden_again.on_toggle_pressed();

        let mut animations = Animations::default();
        animations.observe(&hidden, &shown, t0);
        animations.observe(&shown, &hidden_again, t0 + ms(150));

        let slide = animations.slide.expect("slide running");
        assert_eq!(slide.direction, SlideDirection::Exit);
        assert!((slide.from - 0.5).abs() < 1e-3);
        assert!(slide.is_done(t0 + ms(300)));
    }

    #[test]
    fn settle_clears_finished_animations() {
        let t0 = Instant::now();
        let before = GreetingState::default();
        let mut after = greeted("Mary");
        after.on_toggle_pressed();

        let mut animations = Animations::default();
        animations.observe(&before, &after, t0);
        assert!(!animations.is_idle());

        animations.settle(t0 + ms(400));
        assert!(animations.slide.is_none());
        assert!(animations.fade.is_some());

        animations.settle(t0 + ms(700));
        assert!(animations.is_idle());
    }

    #[test]
    fn idle_visibility_follows_controller() {
        let animations = Animations::default();
        let now = Instant::now();
        assert_eq!(animations.blessing_visibility(true, now), 1.0);
        assert_eq!(animations.blessing_visibility(false, now), 0.0);
    }
}
