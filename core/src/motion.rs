//! Finite transition descriptors consumed by the rendering layer.
//!
//! Every visual change on the card is described here as either a timed
//! tween or a spring. The web crate turns them into CSS `transition` and
//! `animation` declarations; nothing in this module touches the DOM.

use std::fmt;

const SPRING_SETTLE_MIN_MS: f64 = 120.0;
const SPRING_SETTLE_MAX_MS: f64 = 2400.0;
const SPRING_SETTLE_FALLBACK_MS: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1:.3}, {y1:.3}, {x2:.3}, {y2:.3})")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
    /// Forever, reversing direction on every other cycle.
    Mirror,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Tween {
    pub const fn once(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
        }
    }

    pub const fn forever(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
            repeat: Repeat::Forever,
        }
    }

    pub const fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Damped harmonic spring, unit mass unless stated otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical <= 0.0 {
            return 1.0;
        }
        self.damping / critical
    }

    /// Time for the envelope to fall under ~2% of the initial offset.
    pub fn settle_ms(&self) -> f64 {
        if self.stiffness <= 0.0 || self.mass <= 0.0 {
            return SPRING_SETTLE_FALLBACK_MS;
        }
        let omega = (self.stiffness / self.mass).sqrt();
        let decay = self.damping_ratio().min(1.0) * omega;
        if decay <= f64::EPSILON {
            return SPRING_SETTLE_MAX_MS;
        }
        (4.0 / decay * 1000.0).clamp(SPRING_SETTLE_MIN_MS, SPRING_SETTLE_MAX_MS)
    }

    /// Peak overshoot as a fraction of the travel; zero when not underdamped.
    pub fn overshoot(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            return 0.0;
        }
        (-zeta * std::f64::consts::PI / (1.0 - zeta * zeta).sqrt()).exp()
    }

    pub fn easing(&self) -> Easing {
        let overshoot = self.overshoot();
        if overshoot <= 0.0 {
            return Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
        }
        Easing::CubicBezier(0.34, 1.0 + overshoot * 4.0, 0.64, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Tween(Tween),
    Spring { spring: Spring, delay_ms: f64 },
}

impl Transition {
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Transition::Spring {
            spring: Spring::new(stiffness, damping),
            delay_ms: 0.0,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        match self {
            Transition::Tween(tween) => tween.duration_ms,
            Transition::Spring { spring, .. } => spring.settle_ms(),
        }
    }

    pub fn delay_ms(&self) -> f64 {
        match self {
            Transition::Tween(tween) => tween.delay_ms,
            Transition::Spring { delay_ms, .. } => *delay_ms,
        }
    }

    pub fn easing(&self) -> Easing {
        match self {
            Transition::Tween(tween) => tween.easing,
            Transition::Spring { spring, .. } => spring.easing(),
        }
    }

    fn repeat(&self) -> Repeat {
        match self {
            Transition::Tween(tween) => tween.repeat,
            Transition::Spring { .. } => Repeat::Once,
        }
    }

    /// Value for a CSS `transition` declaration on `property`.
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{property} {:.0}ms {} {:.0}ms",
            self.duration_ms(),
            self.easing(),
            self.delay_ms()
        )
    }

    /// Value for a CSS `animation` declaration running `keyframes`.
    pub fn css_animation(&self, keyframes: &str) -> String {
        let iteration = match self.repeat() {
            Repeat::Once => "1 both",
            Repeat::Forever => "infinite",
            Repeat::Mirror => "infinite alternate",
        };
        format!(
            "{keyframes} {:.0}ms {} {:.0}ms {iteration}",
            self.duration_ms(),
            self.easing(),
            self.delay_ms()
        )
    }
}

impl From<Tween> for Transition {
    fn from(tween: Tween) -> Self {
        Transition::Tween(tween)
    }
}
