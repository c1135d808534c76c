//! Time-bounded confetti emission that follows an accepted proposal.
//!
//! The schedule is a plain state machine driven by the caller's clock so the
//! web runtime can tick it from an interval timer and tests can tick it with
//! simulated time.

use rand::Rng;

pub const CELEBRATION_WINDOW_MS: f64 = 15_000.0;
pub const EMISSION_INTERVAL_MS: u32 = 250;

const OPENING_PARTICLES: u32 = 150;
const OPENING_SPREAD_DEG: f64 = 70.0;
const OPENING_ORIGIN: Origin = Origin { x: 0.5, y: 0.6 };
const TICK_PEAK_PARTICLES: f64 = 50.0;
const TICK_SPREAD_DEG: f64 = 360.0;
const TICK_START_VELOCITY: f64 = 30.0;
const TICK_LIFETIME: u32 = 60;
const TICK_Z_INDEX: i32 = 50;
const LEFT_ORIGIN_X: (f64, f64) = (0.1, 0.3);
const RIGHT_ORIGIN_X: (f64, f64) = (0.7, 0.9);
const ORIGIN_Y_OFFSET: f64 = 0.2;

/// Normalized viewport point; `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    pub spread_deg: f64,
    pub origin: Origin,
    pub start_velocity: Option<f64>,
    pub ticks: Option<u32>,
    pub z_index: Option<i32>,
}

pub fn opening_burst() -> Burst {
    Burst {
        particle_count: OPENING_PARTICLES,
        spread_deg: OPENING_SPREAD_DEG,
        origin: OPENING_ORIGIN,
        start_velocity: None,
        ticks: None,
        z_index: None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    Emit([Burst; 2]),
    /// The window has elapsed; the caller should cancel its timer.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelebrationSchedule {
    deadline_ms: f64,
    finished: bool,
}

impl CelebrationSchedule {
    pub fn start(now_ms: f64) -> Self {
        Self {
            deadline_ms: now_ms + CELEBRATION_WINDOW_MS,
            finished: false,
        }
    }

    pub fn deadline_ms(&self) -> f64 {
        self.deadline_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn time_left_ms(&self, now_ms: f64) -> f64 {
        (self.deadline_ms - now_ms).max(0.0)
    }

    /// Particles per side burst, decaying linearly from 50 to 0 across the window.
    pub fn particle_count(&self, now_ms: f64) -> u32 {
        let fraction = (self.time_left_ms(now_ms) / CELEBRATION_WINDOW_MS).min(1.0);
        (TICK_PEAK_PARTICLES * fraction).floor() as u32
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Tick {
        if self.finished || self.deadline_ms - now_ms <= 0.0 {
            self.finished = true;
            return Tick::Finished;
        }
        let particle_count = self.particle_count(now_ms);
        Tick::Emit([
            side_burst(particle_count, LEFT_ORIGIN_X, rng),
            side_burst(particle_count, RIGHT_ORIGIN_X, rng),
        ])
    }
}

fn side_burst<R: Rng + ?Sized>(particle_count: u32, x_range: (f64, f64), rng: &mut R) -> Burst {
    let (min, max) = x_range;
    Burst {
        particle_count,
        spread_deg: TICK_SPREAD_DEG,
        origin: Origin {
            x: min + rng.random::<f64>() * (max - min),
            y: rng.random::<f64>() - ORIGIN_Y_OFFSET,
        },
        start_velocity: Some(TICK_START_VELOCITY),
        ticks: Some(TICK_LIFETIME),
        z_index: Some(TICK_Z_INDEX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn opening_burst_matches_card_defaults() {
        let burst = opening_burst();
        assert_eq!(burst.particle_count, 150);
        assert_eq!(burst.spread_deg, 70.0);
        assert_eq!(burst.origin, Origin { x: 0.5, y: 0.6 });
        assert_eq!(burst.start_velocity, None);
    }

    #[test]
    fn particle_count_decays_linearly() {
        let schedule = CelebrationSchedule::start(1_000.0);
        assert_eq!(schedule.particle_count(1_000.0), 50);
        assert_eq!(schedule.particle_count(8_500.0), 25);
        assert_eq!(schedule.particle_count(16_000.0), 0);
        assert_eq!(schedule.particle_count(99_000.0), 0);
    }

    #[test]
    fn side_bursts_come_from_lower_corners() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut schedule = CelebrationSchedule::start(0.0);
        for step in 1..20 {
            let Tick::Emit([left, right]) = schedule.tick(step as f64 * 250.0, &mut rng) else {
                panic!("expected emission at step {step}");
            };
            assert!(left.origin.x >= 0.1 && left.origin.x < 0.3);
            assert!(right.origin.x >= 0.7 && right.origin.x < 0.9);
            for burst in [left, right] {
                assert!(burst.origin.y >= -0.2 && burst.origin.y < 0.8);
                assert_eq!(burst.spread_deg, 360.0);
                assert_eq!(burst.ticks, Some(60));
                assert_eq!(burst.z_index, Some(50));
            }
            assert_eq!(left.particle_count, right.particle_count);
        }
    }

    #[test]
    fn finished_is_sticky() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut schedule = CelebrationSchedule::start(0.0);
        assert_eq!(schedule.tick(15_000.0, &mut rng), Tick::Finished);
        assert!(schedule.is_finished());
        assert_eq!(schedule.tick(100.0, &mut rng), Tick::Finished);
    }
}
