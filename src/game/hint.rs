//! Hint Overlay
//!
//! Transient subtitle shown at scene start and briefly again whenever a door
//! opens. Only the timing lives here; drawing it is up to the host.
//!
//! Every show arms its own hide timer and any timer that fires hides the
//! hint, including one armed before a later show. A door opened 6s into an
//! 8s intro is therefore hidden again at 8s, not at 8.5s.

use super::config::HintConfig;

/// Timer-driven subtitle visibility.
#[derive(Debug, Clone)]
pub struct HintOverlay {
    text: String,
    on_open_seconds: f32,
    /// Seconds since the overlay was created
    clock: f32,
    /// Hide deadlines on `clock`, one per pending show
    hide_at: Vec<f32>,
    visible: bool,
}

impl HintOverlay {
    /// Create the overlay already showing its intro.
    pub fn new(config: &HintConfig) -> Self {
        let mut overlay = Self {
            text: config.text.clone(),
            on_open_seconds: config.on_open_seconds,
            clock: 0.0,
            hide_at: Vec::new(),
            visible: false,
        };
        overlay.show(config.intro_seconds);
        overlay
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Seconds until the next pending timer hides the hint, 0 when hidden.
    pub fn remaining(&self) -> f32 {
        if !self.visible {
            return 0.0;
        }
        self.hide_at
            .iter()
            .copied()
            .fold(f32::INFINITY, f32::min)
            .max(self.clock)
            - self.clock
    }

    /// Show the hint and arm a timer that hides it after `seconds`.
    ///
    /// Timers armed by earlier shows keep running.
    pub fn show(&mut self, seconds: f32) {
        self.visible = true;
        self.hide_at.push(self.clock + seconds.max(0.0));
    }

    /// Re-show the hint for the configured door-open duration.
    pub fn door_opened(&mut self) {
        self.show(self.on_open_seconds);
    }

    /// Advance the clock by `dt` seconds, firing every expired timer.
    pub fn tick(&mut self, dt: f32) {
        self.clock += dt.max(0.0);
        let before = self.hide_at.len();
        let clock = self.clock;
        self.hide_at.retain(|&deadline| deadline > clock);
        if self.hide_at.len() != before {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_intro_visible_then_fades() {
        let mut hint = HintOverlay::new(&HintConfig::default());
        assert!(hint.is_visible());
        assert_eq!(hint.text(), "approach the door");

        for _ in 0..(7 * 60) {
            hint.tick(1.0 / 60.0);
        }
        assert!(hint.is_visible());

        for _ in 0..(2 * 60) {
            hint.tick(1.0 / 60.0);
        }
        assert!(!hint.is_visible());
        assert_eq!(hint.remaining(), 0.0);
    }

    #[test]
    fn test_door_open_after_intro_shows_full_duration() {
        let mut hint = HintOverlay::new(&HintConfig::default());
        hint.tick(100.0);
        assert!(!hint.is_visible());

        hint.door_opened();
        assert!(hint.is_visible());
        assert!(approx_eq(hint.remaining(), 2.5));

        hint.tick(2.4);
        assert!(hint.is_visible());
        hint.tick(0.2);
        assert!(!hint.is_visible());
    }

    #[test]
    fn test_intro_timer_hides_door_hint_early() {
        let mut hint = HintOverlay::new(&HintConfig::default());
        hint.tick(6.0);
        hint.door_opened();
        assert!(approx_eq(hint.remaining(), 2.0));

        // Intro timer fires at 8s even though the door asked for 8.5s
        hint.tick(2.2);
        assert!(!hint.is_visible());

        // The door timer still fires later without re-showing anything
        hint.tick(1.0);
        assert!(!hint.is_visible());
    }

    #[test]
    fn test_earlier_door_timer_hides_later_show() {
        let mut hint = HintOverlay::new(&HintConfig::default());
        hint.tick(20.0);
        hint.door_opened();
        hint.tick(2.0);
        hint.door_opened();

        hint.tick(0.6);
        assert!(!hint.is_visible());
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut hint = HintOverlay::new(&HintConfig::default());
        hint.tick(-5.0);
        assert_eq!(hint.remaining(), 8.0);
    }
}
