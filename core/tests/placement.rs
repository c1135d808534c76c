use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_card_core::{relocate, Size, EVADE_PADDING_PX};

#[test]
fn relocation_keeps_the_control_inside_the_viewport() {
    let mut rng = StdRng::seed_from_u64(1);
    let viewport = Size::new(1000, 800);
    let control = Some(Size::new(140, 56));
    for _ in 0..1000 {
        let pos = relocate(viewport, control, 40, &mut rng);
        assert!(pos.x >= 40 && pos.x < 1000 - 140 - 40, "x out of range: {}", pos.x);
        assert!(pos.y >= 40 && pos.y < 800 - 56 - 40, "y out of range: {}", pos.y);
    }
}

#[test]
fn unmeasured_control_uses_nominal_size() {
    let mut rng = StdRng::seed_from_u64(2);
    let viewport = Size::new(1000, 800);
    for _ in 0..1000 {
        let pos = relocate(viewport, None, EVADE_PADDING_PX, &mut rng);
        assert!(pos.x >= 40 && pos.x < 820);
        assert!(pos.y >= 40 && pos.y < 704);
    }
}

#[test]
fn relocation_spreads_across_the_span() {
    let mut rng = StdRng::seed_from_u64(3);
    let viewport = Size::new(1000, 800);
    let xs: Vec<i32> = (0..500)
        .map(|_| relocate(viewport, None, EVADE_PADDING_PX, &mut rng).x)
        .collect();
    let min = *xs.iter().min().unwrap();
    let max = *xs.iter().max().unwrap();
    assert!(min < 200, "min x {min}");
    assert!(max > 660, "max x {max}");
}

#[test]
fn larger_controls_shrink_the_span() {
    let mut rng = StdRng::seed_from_u64(4);
    let viewport = Size::new(400, 300);
    let control = Some(Size::new(300, 200));
    for _ in 0..200 {
        let pos = relocate(viewport, control, 10, &mut rng);
        assert!(pos.x >= 10 && pos.x < 90);
        assert!(pos.y >= 10 && pos.y < 90);
    }
}
