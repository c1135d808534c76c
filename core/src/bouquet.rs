use rand::Rng;

use crate::motion::{Easing, Repeat, Spring, Transition, Tween};

const POP_STIFFNESS: f64 = 100.0;
const POP_DAMPING: f64 = 10.0;
const SWAY_BASE_MS: f64 = 2_000.0;
const SWAY_SPREAD_MS: f64 = 2_000.0;
const SWAY_MAX_DEG: f64 = 5.0;
const LEFT_LEAF_DELAY_MS: f64 = 500.0;
const RIGHT_LEAF_DELAY_MS: f64 = 700.0;
const LEAF_GROW_MS: f64 = 800.0;
pub const FOOTER_DELAY_MS: f64 = 1_500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TulipStyle {
    pub color: &'static str,
    pub leaf_color: &'static str,
    pub delay_ms: u32,
}

pub const BOUQUET: [TulipStyle; 5] = [
    TulipStyle { color: "tulip-sky", leaf_color: "leaf-emerald-light", delay_ms: 200 },
    TulipStyle { color: "tulip-blue", leaf_color: "leaf-emerald", delay_ms: 400 },
    TulipStyle { color: "tulip-indigo", leaf_color: "leaf-teal", delay_ms: 600 },
    TulipStyle { color: "tulip-mist", leaf_color: "leaf-emerald-light", delay_ms: 800 },
    TulipStyle { color: "tulip-pale", leaf_color: "leaf-teal-light", delay_ms: 1_000 },
];

/// Per-tulip animation, rolled once when the bouquet mounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TulipMotion {
    pub pop: Transition,
    pub sway: Transition,
    pub sway_from_deg: f64,
    pub sway_to_deg: f64,
    pub left_leaf: Transition,
    pub right_leaf: Transition,
}

impl TulipMotion {
    pub fn roll<R: Rng + ?Sized>(style: &TulipStyle, rng: &mut R) -> Self {
        let delay_ms = style.delay_ms as f64;
        let sway_ms = SWAY_BASE_MS + rng.random::<f64>() * SWAY_SPREAD_MS;
        Self {
            pop: Transition::Spring {
                spring: Spring::new(POP_STIFFNESS, POP_DAMPING),
                delay_ms,
            },
            sway: Tween::forever(sway_ms, Easing::EaseInOut)
                .with_repeat(Repeat::Mirror)
                .into(),
            sway_from_deg: -rng.random::<f64>() * SWAY_MAX_DEG,
            sway_to_deg: rng.random::<f64>() * SWAY_MAX_DEG,
            left_leaf: Tween::once(LEAF_GROW_MS)
                .delayed(delay_ms + LEFT_LEAF_DELAY_MS)
                .into(),
            right_leaf: Tween::once(LEAF_GROW_MS)
                .delayed(delay_ms + RIGHT_LEAF_DELAY_MS)
                .into(),
        }
    }
}

pub fn roll_bouquet<R: Rng + ?Sized>(rng: &mut R) -> Vec<(TulipStyle, TulipMotion)> {
    BOUQUET
        .iter()
        .map(|style| (*style, TulipMotion::roll(style, rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tulips_bloom_in_order() {
        let mut rng = StdRng::seed_from_u64(9);
        let bouquet = roll_bouquet(&mut rng);
        assert_eq!(bouquet.len(), 5);
        let delays: Vec<f64> = bouquet.iter().map(|(_, motion)| motion.pop.delay_ms()).collect();
        assert_eq!(delays, vec![200.0, 400.0, 600.0, 800.0, 1_000.0]);
    }

    #[test]
    fn sway_stays_within_five_degrees() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let motion = TulipMotion::roll(&BOUQUET[0], &mut rng);
            assert!(motion.sway_from_deg <= 0.0 && motion.sway_from_deg > -5.0);
            assert!(motion.sway_to_deg >= 0.0 && motion.sway_to_deg < 5.0);
            let duration = motion.sway.duration_ms();
            assert!((2_000.0..4_000.0).contains(&duration));
        }
    }

    #[test]
    fn leaves_follow_the_flower() {
        let mut rng = StdRng::seed_from_u64(1);
        let motion = TulipMotion::roll(&BOUQUET[2], &mut rng);
        assert_eq!(motion.left_leaf.delay_ms(), 1_100.0);
        assert_eq!(motion.right_leaf.delay_ms(), 1_300.0);
    }
}
