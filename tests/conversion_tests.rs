use damped::{
    critical_frequency, critical_halflife, damping_ratio_to_damping, damping_ratio_to_stiffness,
    damping_to_halflife, frequency_to_stiffness, halflife_to_damping, resonant_frequency,
    spring_energy, stiffness_to_frequency, DampingRegime, SpringError, SpringParams,
};

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1e-12)
}

#[test]
fn round_trips_without_guard() {
    for &h in &[0.01, 0.1, 0.5, 2.0] {
        assert!(close(damping_to_halflife(halflife_to_damping(h, 0.0), 0.0), h, 1e-12));
    }
    for &f in &[0.1, 1.0, 3.5, 20.0] {
        assert!(close(stiffness_to_frequency(frequency_to_stiffness(f)), f, 1e-12));
    }
    let damping = 6.0;
    for &ratio in &[0.2, 1.0, 3.0] {
        let s = damping_ratio_to_stiffness(ratio, damping);
        assert!(close(damping_ratio_to_damping(ratio, s), damping, 1e-12));
    }
}

#[test]
fn round_trips_with_default_guard() {
    let eps = 1e-5;
    for &h in &[0.05, 0.1, 0.5, 2.0] {
        assert!(close(damping_to_halflife(halflife_to_damping(h, eps), eps), h, 1e-3));
    }
}

#[test]
fn zero_halflife_stays_finite() {
    assert!(halflife_to_damping(0.0f32, 1e-5).is_finite());
    assert!(damping_to_halflife(0.0f32, 1e-5).is_finite());
}

#[test]
fn critical_pairs_are_inverse() {
    let eps = 1e-5;
    for &h in &[0.05, 0.2, 1.0] {
        let f = critical_frequency(h, eps);
        assert!(close(critical_halflife(f, eps), h, 1e-3));

        let params = SpringParams::FrequencyHalflife { frequency: f, halflife: h };
        let SpringParams::RatioHalflife { damping_ratio, .. } = params.to_ratio_halflife(eps) else {
            panic!("expected ratio form");
        };
        assert!(close(damping_ratio, 1.0, 1e-3));
    }
}

#[test]
fn resonant_frequency_needs_room() {
    let eps: f64 = 1e-5;
    let f = resonant_frequency(2.0, 0.5, eps);
    assert!(f > 0.0 && f < 2.0);
    // Damping this strong leaves no oscillation to match.
    assert!(resonant_frequency(0.1, 0.01, eps).is_nan());
}

#[test]
fn parameter_forms_agree() {
    let eps = 1e-5;
    let params = SpringParams::FrequencyHalflife { frequency: 1.5, halflife: 0.3 };
    let (s, d) = params.stiffness_damping(eps);

    let ratio = params.to_ratio_halflife(eps);
    let (s2, d2) = ratio.stiffness_damping(eps);
    assert!(close(s, s2, 1e-3));
    assert!(close(d, d2, 1e-3));

    let back = ratio.to_frequency_halflife(eps);
    let (s3, d3) = back.stiffness_damping(eps);
    assert!(close(s, s3, 1e-3));
    assert!(close(d, d3, 1e-3));

    assert_eq!(
        DampingRegime::of(&params, eps),
        DampingRegime::of(&SpringParams::StiffnessDamping { stiffness: s, damping: d }, eps)
    );
}

#[test]
fn checked_constructors_reject_bad_values() {
    assert_eq!(
        SpringParams::try_frequency_halflife(-1.0f32, 0.1),
        Err(SpringError::InvalidFrequency)
    );
    assert_eq!(
        SpringParams::try_frequency_halflife(1.0f32, f32::NAN),
        Err(SpringError::InvalidHalflife)
    );
    assert_eq!(
        SpringParams::try_ratio_halflife(0.0f64, 0.1),
        Err(SpringError::InvalidDampingRatio)
    );
    assert_eq!(
        SpringParams::try_stiffness_damping(4.0f64, f64::INFINITY),
        Err(SpringError::InvalidDamping)
    );
    assert_eq!(
        SpringParams::try_stiffness_damping(-4.0f64, 1.0),
        Err(SpringError::InvalidStiffness)
    );
    assert_eq!(
        SpringParams::try_ratio_halflife(0.5f64, 0.2),
        Ok(SpringParams::RatioHalflife { damping_ratio: 0.5, halflife: 0.2 })
    );
}

#[test]
fn energy_at_rest_is_zero() {
    assert_eq!(spring_energy(3.0f64, 1.0, 2.0, 3.0, 1.0, 1.0), 0.0);
    let e = spring_energy(1.0f64, 0.0, 1.0, 0.0, 0.0, 1.0);
    let expected = frequency_to_stiffness(1.0f64) / 2.0;
    assert!(close(e, expected, 1e-12));
}

#[test]
fn errors_describe_the_field() {
    assert_eq!(
        SpringError::InvalidHalflife.to_string(),
        "halflife must be finite and non-negative"
    );
    assert_eq!(
        SpringError::InvalidEpsilon.to_string(),
        "epsilon must be finite and positive"
    );
}
