use damped::{damper_decay_exact, damper_exact, damper_fast};

const EPS: f64 = 1e-5;

#[test]
fn zero_halflife_snaps_to_goal() {
    for &dt in &[1.0 / 240.0, 1.0 / 60.0, 0.1, 1.0] {
        assert_eq!(damper_exact(-37.5, 12.0, 0.0, dt, EPS), 12.0);
    }
}

#[test]
fn huge_halflife_is_noop() {
    let x = damper_exact(3.0, 100.0, 1e12, 1.0 / 60.0, EPS);
    assert!((x - 3.0).abs() < 1e-6);
}

#[test]
fn never_overshoots() {
    let mut x = 0.0;
    for _ in 0..1000 {
        let next = damper_exact(x, 10.0, 0.15, 1.0 / 60.0, EPS);
        assert!(next >= x - 1e-12);
        assert!(next <= 10.0 + 1e-12);
        x = next;
    }
    assert!((x - 10.0).abs() < 1e-6);
}

#[test]
fn split_steps_compose() {
    let positions = [-1e4, -3.7, 0.0, 250.0, 1e4];
    let halflives = [0.01, 0.1, 1.0, 10.0];
    let steps = [0.0, 1.0 / 60.0, 0.25, 1.0];

    for &x in &positions {
        for &g in &positions {
            for &h in &halflives {
                for &dt1 in &steps {
                    for &dt2 in &steps {
                        let split = damper_exact(damper_exact(x, g, h, dt1, EPS), g, h, dt2, EPS);
                        let whole = damper_exact(x, g, h, dt1 + dt2, EPS);
                        let scale = split.abs().max(whole.abs()).max(1.0);
                        assert!(
                            (split - whole).abs() <= 1e-4 * scale,
                            "x={} g={} h={} dt1={} dt2={}: {} vs {}",
                            x, g, h, dt1, dt2, split, whole
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn frame_rate_independent() {
    let mut at_60 = 0.0;
    for _ in 0..60 {
        at_60 = damper_exact(at_60, 1.0, 0.3, 1.0 / 60.0, EPS);
    }
    let mut at_20 = 0.0;
    for _ in 0..20 {
        at_20 = damper_exact(at_20, 1.0, 0.3, 1.0 / 20.0, EPS);
    }
    assert!((at_60 - at_20).abs() < 1e-9);
}

#[test]
fn fast_damper_stays_close() {
    let exact = damper_exact(0.0, 1.0, 0.2, 1.0 / 60.0, EPS);
    let fast = damper_fast(0.0, 1.0, 0.2, 1.0 / 60.0, EPS);
    assert!((exact - fast).abs() < 1e-3);
}

#[test]
fn decay_halves_per_halflife() {
    let x: f64 = damper_decay_exact(8.0, 0.5, 1.0, 0.0);
    assert!((x - 2.0).abs() < 1e-9);
}
