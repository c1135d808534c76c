use rand::Rng;

use crate::motion::Transition;

pub const EVADE_PADDING_PX: i32 = 40;
pub const FALLBACK_CONTROL_WIDTH: i32 = 140;
pub const FALLBACK_CONTROL_HEIGHT: i32 = 56;
pub const EVADE_SPRING_STIFFNESS: f64 = 200.0;
pub const EVADE_SPRING_DAMPING: f64 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportPosition {
    pub x: i32,
    pub y: i32,
}

impl ViewportPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn fallback_control() -> Self {
        Self::new(FALLBACK_CONTROL_WIDTH, FALLBACK_CONTROL_HEIGHT)
    }

    /// `None` for an element that has not been laid out yet.
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self::new(width.round() as i32, height.round() as i32))
    }
}

/// Picks a random top-left corner for a control of `control` size that keeps
/// it `padding` away from the viewport edges.
///
/// A missing measurement uses the nominal 140x56 control. When the viewport
/// is too small for the control plus padding on both sides the span collapses
/// to zero and the control sits at `(padding, padding)`.
pub fn relocate<R: Rng + ?Sized>(
    viewport: Size,
    control: Option<Size>,
    padding: i32,
    rng: &mut R,
) -> ViewportPosition {
    let control = control.unwrap_or_else(Size::fallback_control);
    let max_x = viewport.width - control.width - padding;
    let max_y = viewport.height - control.height - padding;
    ViewportPosition {
        x: sample_axis(padding, max_x, rng),
        y: sample_axis(padding, max_y, rng),
    }
}

fn sample_axis<R: Rng + ?Sized>(min: i32, max: i32, rng: &mut R) -> i32 {
    let span = (max - min).max(0) as f64;
    (rng.random::<f64>() * span).floor() as i32 + min
}

pub fn evade_transition() -> Transition {
    Transition::spring(EVADE_SPRING_STIFFNESS, EVADE_SPRING_DAMPING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unmeasured_sizes_are_rejected() {
        assert_eq!(Size::measured(0.0, 56.0), None);
        assert_eq!(Size::measured(140.0, f64::NAN), None);
        assert_eq!(Size::measured(139.6, 55.5), Some(Size::new(140, 56)));
    }

    #[test]
    fn degenerate_viewport_pins_to_padding() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let pos = relocate(Size::new(100, 60), None, EVADE_PADDING_PX, &mut rng);
            assert_eq!(pos, ViewportPosition::new(EVADE_PADDING_PX, EVADE_PADDING_PX));
        }
    }

    #[test]
    fn evade_transition_is_a_spring() {
        assert!(matches!(evade_transition(), Transition::Spring { .. }));
    }
}
