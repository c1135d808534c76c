use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_card_core::celebration::{CELEBRATION_WINDOW_MS, EMISSION_INTERVAL_MS};
use valentine_card_core::{
    opening_burst, relocate, AcceptOutcome, CardContent, CardState, CelebrationSchedule,
    NoControl, Size, Tick, EVADE_PADDING_PX,
};

#[test]
fn accept_is_one_way_and_idempotent() {
    let mut state = CardState::new();
    assert!(!state.accepted());
    assert_eq!(state.accept(), AcceptOutcome::Started);
    assert!(state.accepted());
    assert_eq!(state.accept(), AcceptOutcome::AlreadyAccepted);
    assert!(state.accepted());
    state.evade(Default::default());
    assert!(state.accepted());
    assert_eq!(state.content(), CardContent::Celebration);
}

#[test]
fn evasion_then_acceptance_walkthrough() {
    let mut rng = StdRng::seed_from_u64(0xCA4D);
    let viewport = Size::new(1000, 800);
    let mut state = CardState::new();

    assert_eq!(state.content(), CardContent::Question);
    assert_eq!(state.no_control(), NoControl::Inline);
    assert!(!state.accepted());
    assert!(!state.evaded());

    // Hover on the inline control: not measured yet.
    let first = relocate(viewport, None, EVADE_PADDING_PX, &mut rng);
    assert!(state.evade(first));
    assert!(state.evaded());
    let NoControl::Floating(pos) = state.no_control() else {
        panic!("control should float after evasion");
    };
    assert_eq!(pos, first);
    assert!(pos.x >= 40 && pos.x < 820);
    assert!(pos.y >= 40 && pos.y < 704);

    // Floating control keeps running away once it has a size.
    for _ in 0..25 {
        let next = relocate(viewport, Some(Size::new(132, 60)), EVADE_PADDING_PX, &mut rng);
        state.evade(next);
        let NoControl::Floating(pos) = state.no_control() else {
            panic!("control should stay floating");
        };
        assert!(pos.x >= 40 && pos.x < 1000 - 132 - 40);
        assert!(pos.y >= 40 && pos.y < 800 - 60 - 40);
    }

    let start_ms = 10_000.0;
    assert_eq!(state.accept(), AcceptOutcome::Started);
    assert_eq!(state.content(), CardContent::Celebration);
    assert_eq!(state.no_control(), NoControl::Hidden);
    assert_eq!(state.content().subtitle(), None);
    assert_eq!(opening_burst().particle_count, 150);

    let mut schedule = CelebrationSchedule::start(start_ms);
    let mut now = start_ms;
    let mut emissions = 0u32;
    let mut last_count = u32::MAX;
    loop {
        now += EMISSION_INTERVAL_MS as f64;
        match schedule.tick(now, &mut rng) {
            Tick::Emit([left, right]) => {
                emissions += 1;
                assert!(left.particle_count <= last_count);
                last_count = left.particle_count;
                assert_eq!(right.particle_count, left.particle_count);
            }
            Tick::Finished => break,
        }
        assert!(now < start_ms + CELEBRATION_WINDOW_MS + 1_000.0, "emission never stopped");
    }
    // 15s window at 250ms: ticks at 250..14750 emit, 15000 finishes.
    assert_eq!(emissions, 59);
    assert_eq!(now, start_ms + CELEBRATION_WINDOW_MS);
    assert!(schedule.is_finished());
    assert_eq!(schedule.tick(now + 250.0, &mut rng), Tick::Finished);

    // A second accept never starts another schedule.
    assert_eq!(state.accept(), AcceptOutcome::AlreadyAccepted);
}
