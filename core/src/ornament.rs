use rand::Rng;

use crate::motion::{Easing, Transition, Tween};
use crate::site::ORNAMENT_IMAGES;

pub const FLOATERS_COUNT: usize = 90;

const CLOUD_THRESHOLD: f64 = 0.30;
const HEART_THRESHOLD: f64 = 0.60;
const BRANDED_SIZE_BASE: f64 = 70.0;
const BRANDED_SIZE_SPREAD: f64 = 80.0;
const ICON_SIZE_BASE: f64 = 25.0;
const ICON_SIZE_SPREAD: f64 = 50.0;
const DELAY_SPREAD_SECS: f64 = 5.0;
const DURATION_BASE_SECS: f64 = 12.0;
const DURATION_SPREAD_SECS: f64 = 15.0;

pub const RISE_PX: f64 = -150.0;
pub const SWAY_AMPLITUDE_PX: f64 = 60.0;
pub const PEAK_OPACITY: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    Cloud,
    Heart,
    Branded,
}

impl OrnamentKind {
    fn from_roll(roll: f64) -> Self {
        if roll < CLOUD_THRESHOLD {
            OrnamentKind::Cloud
        } else if roll < HEART_THRESHOLD {
            OrnamentKind::Heart
        } else {
            OrnamentKind::Branded
        }
    }

    /// Base size and random spread in pixels. Branded sprites are drawn larger.
    pub fn size_range(self) -> (f64, f64) {
        match self {
            OrnamentKind::Branded => (BRANDED_SIZE_BASE, BRANDED_SIZE_SPREAD),
            OrnamentKind::Cloud | OrnamentKind::Heart => (ICON_SIZE_BASE, ICON_SIZE_SPREAD),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentDescriptor {
    pub id: u32,
    pub left_percent: f64,
    pub top_percent: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub size_px: f64,
    pub rotate_deg: f64,
    pub kind: OrnamentKind,
    /// Set only for `OrnamentKind::Branded`.
    pub image: Option<&'static str>,
}

impl OrnamentDescriptor {
    /// Horizontal sway reached at the top of the rise. Fixed per id so the
    /// path repeats identically on every loop.
    pub fn sway_px(&self) -> f64 {
        sway_amplitude(self.id)
    }

    pub fn motion(&self) -> OrnamentMotion {
        OrnamentMotion {
            rise_px: RISE_PX,
            sway_px: self.sway_px(),
            opacity: [0.0, PEAK_OPACITY, 0.0],
            transition: Tween::forever(self.duration_secs * 1000.0, Easing::Linear)
                .delayed(self.delay_secs * 1000.0)
                .into(),
        }
    }
}

/// Looping rise/sway/fade of a single ornament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentMotion {
    pub rise_px: f64,
    pub sway_px: f64,
    pub opacity: [f64; 3],
    pub transition: Transition,
}

pub fn sway_amplitude(id: u32) -> f64 {
    (id as f64).sin() * SWAY_AMPLITUDE_PX
}

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<OrnamentDescriptor> {
    (0..count)
        .map(|index| generate_one(index as u32, rng))
        .collect()
}

fn generate_one<R: Rng + ?Sized>(id: u32, rng: &mut R) -> OrnamentDescriptor {
    let kind = OrnamentKind::from_roll(rng.random::<f64>());
    let image = match kind {
        OrnamentKind::Branded => Some(ORNAMENT_IMAGES[rng.random_range(0..ORNAMENT_IMAGES.len())]),
        OrnamentKind::Cloud | OrnamentKind::Heart => None,
    };
    let (size_base, size_spread) = kind.size_range();
    OrnamentDescriptor {
        id,
        left_percent: rng.random::<f64>() * 100.0,
        top_percent: rng.random::<f64>() * 100.0,
        delay_secs: rng.random::<f64>() * DELAY_SPREAD_SECS,
        duration_secs: DURATION_BASE_SECS + rng.random::<f64>() * DURATION_SPREAD_SECS,
        size_px: size_base + rng.random::<f64>() * size_spread,
        rotate_deg: rng.random::<f64>() * 360.0,
        kind,
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn roll_thresholds_split_kinds() {
        assert_eq!(OrnamentKind::from_roll(0.0), OrnamentKind::Cloud);
        assert_eq!(OrnamentKind::from_roll(0.2999), OrnamentKind::Cloud);
        assert_eq!(OrnamentKind::from_roll(0.30), OrnamentKind::Heart);
        assert_eq!(OrnamentKind::from_roll(0.5999), OrnamentKind::Heart);
        assert_eq!(OrnamentKind::from_roll(0.60), OrnamentKind::Branded);
        assert_eq!(OrnamentKind::from_roll(0.9999), OrnamentKind::Branded);
    }

    #[test]
    fn sway_depends_only_on_id() {
        assert_eq!(sway_amplitude(0), 0.0);
        assert!((sway_amplitude(1) - 1f64.sin() * 60.0).abs() < 1e-12);
        let mut rng = StdRng::seed_from_u64(7);
        let first = generate(3, &mut rng);
        assert_eq!(first[2].sway_px(), sway_amplitude(2));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate(0, &mut rng).is_empty());
    }

    #[test]
    fn motion_loops_forever_with_descriptor_timing() {
        let mut rng = StdRng::seed_from_u64(7);
        let ornament = generate(1, &mut rng).remove(0);
        let motion = ornament.motion();
        assert_eq!(motion.rise_px, RISE_PX);
        assert_eq!(motion.opacity, [0.0, PEAK_OPACITY, 0.0]);
        assert_eq!(motion.transition.duration_ms(), ornament.duration_secs * 1000.0);
        assert!(motion.transition.css_animation("float").ends_with("infinite"));
    }
}
