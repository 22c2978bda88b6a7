//! Shared motion presets and the clocks that drive looping animations.
//!
//! Entrance presets are CSS transitions: a component renders an element with
//! `Preset::class()` and the preset's inline timing, and the element animates
//! to rest once an ancestor gains the `revealed` class. Loops (marquee,
//! floating badge) are computed here from an elapsed-time clock so the
//! timer can be released when the owning component unmounts.

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::js_sys::Date;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Fade in while rising 24px, 600ms ease-out.
    FadeUp,
    /// Fade in while scaling up from 0.9, 500ms.
    Pop,
}

impl Preset {
    pub fn class(self) -> &'static str {
        match self {
            Preset::FadeUp => "motion-fade-up",
            Preset::Pop => "motion-pop",
        }
    }

    pub fn duration_ms(self) -> u32 {
        match self {
            Preset::FadeUp => 600,
            Preset::Pop => 500,
        }
    }

    pub fn style(self, delay_ms: u32) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            self.duration_ms(),
            delay_ms
        )
    }
}

/// Delays for children revealed one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub step_ms: u32,
}

pub const STAGGER: Stagger = Stagger {
    delay_children_ms: 100,
    step_ms: 120,
};

impl Stagger {
    pub fn delay(&self, index: usize) -> u32 {
        self.delay_children_ms + self.step_ms * index as u32
    }

    pub fn style(&self, preset: Preset, index: usize) -> String {
        preset.style(self.delay(index))
    }
}

/// Horizontal auto-scroll over a list rendered twice back to back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub card_width: f64,
    pub gap: f64,
    pub px_per_sec: f64,
}

pub const TESTIMONIAL_MARQUEE: Marquee = Marquee {
    card_width: 360.0,
    gap: 24.0,
    px_per_sec: 600.0 / 18.0,
};

impl Marquee {
    /// Width of one un-duplicated copy of the list, gap after each card.
    pub fn loop_distance(&self, items: usize) -> f64 {
        items as f64 * (self.card_width + self.gap)
    }

    /// Track translation in px (always in `(-distance, 0]`). Wrapping at
    /// exactly one copy's width lands the second copy where the first
    /// started, hiding the seam.
    pub fn offset(&self, items: usize, elapsed_ms: f64) -> f64 {
        let distance = self.loop_distance(items);
        if distance <= 0.0 {
            return 0.0;
        }
        -(elapsed_ms / 1000.0 * self.px_per_sec).rem_euclid(distance)
    }
}

pub fn doubled<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

/// Vertical bob that eases out to `amplitude` and back, one leg per `leg_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bob {
    pub amplitude: f64,
    pub leg_ms: f64,
}

pub const FLOATING_BADGE: Bob = Bob {
    amplitude: 10.0,
    leg_ms: 2200.0,
};

impl Bob {
    pub fn offset(&self, elapsed_ms: f64) -> f64 {
        let cycle = (elapsed_ms / self.leg_ms).rem_euclid(2.0);
        let t = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        let eased = (1.0 - (std::f64::consts::PI * t).cos()) / 2.0;
        -self.amplitude + 2.0 * self.amplitude * eased
    }
}

/// Milliseconds since mount, refreshed every `tick_ms`. The interval is
/// dropped, and so cancelled, when the calling component unmounts.
#[hook]
pub fn use_animation_clock(tick_ms: u32) -> f64 {
    let elapsed = use_state_eq(|| 0.0_f64);

    {
        let elapsed = elapsed.setter();
        use_effect_with_deps(
            move |tick_ms: &u32| {
                let started = Date::now();
                let interval = Interval::new(*tick_ms, move || {
                    elapsed.set(Date::now() - started);
                });
                debug!("animation clock started ({}ms tick)", tick_ms);

                move || {
                    drop(interval);
                    debug!("animation clock released");
                }
            },
            tick_ms,
        );
    }

    *elapsed
}

/// Flips to true shortly after mount so entrance transitions have a painted
/// starting frame to run from.
#[hook]
pub fn use_entered(delay_ms: u32) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.setter();
        use_effect_with_deps(
            move |delay_ms: &u32| {
                let timeout = Timeout::new(*delay_ms, move || entered.set(true));
                move || drop(timeout)
            },
            delay_ms,
        );
    }

    *entered
}

pub const STYLES: &str = r#"
.motion-fade-up {
    opacity: 0;
    transform: translateY(24px);
    transition-property: opacity, transform;
    transition-timing-function: ease-out;
}

.motion-pop {
    opacity: 0;
    transform: scale(0.9);
    transition-property: opacity, transform;
}

.revealed .motion-fade-up,
.revealed .motion-pop {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .motion-fade-up,
    .motion-pop {
        transition: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_matches_preset_timing() {
        assert_eq!(STAGGER.delay(0), 100);
        assert_eq!(STAGGER.delay(1), 220);
        assert_eq!(STAGGER.delay(3), 460);
        assert_eq!(
            STAGGER.style(Preset::FadeUp, 1),
            "transition-duration: 600ms; transition-delay: 220ms;"
        );
    }

    #[test]
    fn doubled_track_repeats_the_list() {
        let items = ["a", "b", "c"];
        let track = doubled(&items);
        assert_eq!(track.len(), 2 * items.len());
        assert_eq!(&track[items.len()..], &track[..items.len()]);
        assert_eq!(&track[..items.len()], &items[..]);
    }

    #[test]
    fn marquee_loops_after_one_copy() {
        let m = TESTIMONIAL_MARQUEE;
        assert_eq!(m.loop_distance(3), 1152.0);
        assert_eq!(m.offset(3, 0.0), 0.0);
        assert!((m.offset(3, 9000.0) + 300.0).abs() < 1e-9);

        for t in [0.0, 5_000.0, 123_456.0, 1_000_000.0] {
            let x = m.offset(3, t);
            assert!(x <= 0.0 && x > -m.loop_distance(3), "offset {} out of range", x);
        }
    }

    #[test]
    fn marquee_moves_at_constant_speed_across_the_seam() {
        let m = TESTIMONIAL_MARQUEE;
        let distance = m.loop_distance(3);
        let period_ms = distance / m.px_per_sec * 1000.0;
        let step = m.px_per_sec / 1000.0;

        for t in [period_ms - 1.0, period_ms - 0.5, period_ms, period_ms + 1.0] {
            let moved = (m.offset(3, t) - m.offset(3, t + 1.0)).rem_euclid(distance);
            assert!((moved - step).abs() < 1e-6, "jump of {} at {}", moved, t);
        }
    }

    #[test]
    fn empty_marquee_stays_still() {
        assert_eq!(TESTIMONIAL_MARQUEE.offset(0, 10_000.0), 0.0);
    }

    #[test]
    fn badge_reverses_each_leg() {
        let b = FLOATING_BADGE;
        assert!((b.offset(0.0) + 10.0).abs() < 1e-9);
        assert!(b.offset(1100.0).abs() < 1e-9);
        assert!((b.offset(2200.0) - 10.0).abs() < 1e-9);
        assert!((b.offset(4400.0) + 10.0).abs() < 1e-9);

        let mut t = 0.0;
        while t < 10_000.0 {
            let y = b.offset(t);
            assert!((-10.0..=10.0).contains(&y));
            t += 37.0;
        }
    }
}
