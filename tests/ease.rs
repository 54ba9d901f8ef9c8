use assert_approx_eq::assert_approx_eq;
use easer::functions::{Bounce, Circ, Cubic, Easing, Expo, Quart, Quint, Sine};

use easetab::{evaluate, evaluate_int, Ease, Family, Kind, RoundingMode};

fn unit_steps(n: usize) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| i as f64 / n as f64)
}

#[test]
fn linear_is_identity() {
    for t in [-2.0f32, -0.5, 0.0, 0.123, 0.5, 1.0, 7.25] {
        assert_eq!(evaluate(Ease::Linear, t), t);
    }
}

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for ease in Ease::iter() {
        assert_approx_eq!(ease.eval(0.0f64), 0.0, 1e-12);
        assert_approx_eq!(ease.eval(1.0f64), 1.0, 1e-12);
        assert_approx_eq!(ease.eval(0.0f32), 0.0, 1e-6);
        assert_approx_eq!(ease.eval(1.0f32), 1.0, 1e-6);
    }
}

#[test]
fn exact_endpoints_where_special_cased() {
    for ease in [
        Ease::InExpo,
        Ease::InOutExpo,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
    ] {
        assert_eq!(ease.eval(0.0f32), 0.0);
    }
    for ease in [
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::OutBack,
    ] {
        assert_eq!(ease.eval(1.0f32), 1.0);
    }
}

#[test]
fn in_mirrors_out() {
    let families = [
        Family::Sine,
        Family::Cubic,
        Family::Quart,
        Family::Quint,
        Family::Circ,
    ];

    for family in families {
        let ease_in = Ease::from_parts(family, Kind::In).unwrap();
        let ease_out = Ease::from_parts(family, Kind::Out).unwrap();

        for t in unit_steps(50).map(|t| t as f32) {
            assert_approx_eq!(ease_in.eval(t), 1.0 - ease_out.eval(1.0 - t), 1e-5);
        }
    }
}

#[test]
fn in_out_is_point_symmetric() {
    for ease in Ease::iter().filter(|ease| ease.kind() == Kind::InOut) {
        for t in unit_steps(40) {
            assert_approx_eq!(ease.eval(t), 1.0 - ease.eval(1.0 - t), 1e-9);
        }
        assert_approx_eq!(ease.eval(0.5f64), 0.5, 1e-12);
    }
}

#[test]
fn in_out_bounce_blends_out_bounce() {
    let expected = (1.0 - Ease::OutBounce.eval(0.5f32)) / 2.0;

    assert_eq!(Ease::InOutBounce.eval(0.25f32), expected);
}

#[test]
fn known_values() {
    assert_approx_eq!(Ease::OutBounce.eval(0.2f32), 0.3025, 1e-3);
    assert_approx_eq!(Ease::InElastic.eval(0.5f64), -0.015625, 1e-9);
    assert_eq!(Ease::OutBack.eval(1.0f32), 1.0);
    assert_approx_eq!(Ease::InSine.eval(0.5f64), 1.0 - 0.5f64.sqrt(), 1e-12);
    assert_approx_eq!(Ease::InExpo.eval(0.5f64), 2f64.powi(-5), 1e-12);
    assert_approx_eq!(Ease::InOutCirc.eval(0.25f64), (1.0 - 0.75f64.sqrt()) / 2.0, 1e-12);
}

#[test]
fn overshooting_curves_leave_the_unit_range() {
    assert!(Ease::InBack.eval(0.2f32) < 0.0);
    assert!(Ease::OutBack.eval(0.8f32) > 1.0);
    assert!(Ease::InOutBack.eval(0.1f32) < 0.0);
    assert!(Ease::OutElastic.eval(0.1f32) > 1.0);
    assert!(Ease::InElastic.eval(0.9f32) < 0.0);
}

#[test]
fn bounce_stays_in_unit_range() {
    for ease in [Ease::InBounce, Ease::OutBounce, Ease::InOutBounce] {
        for t in unit_steps(200) {
            let v = ease.eval(t);
            assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{} at {}: {}", ease, t, v);
        }
    }
}

#[test]
fn out_of_range_input_is_evaluated() {
    assert_eq!(Ease::InCubic.eval(2.0f64), 8.0);
    assert_eq!(Ease::Linear.eval(-1.0f64), -1.0);
    assert!(Ease::InExpo.eval(10.0f64) > 1e20);
    assert!(Ease::InCirc.eval(2.0f64).is_nan());
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    for ease in Ease::iter() {
        for t in unit_steps(16) {
            let first = ease.eval(t as f32).to_bits();

            for _ in 0..3 {
                assert_eq!(ease.eval(t as f32).to_bits(), first);
            }
        }
    }
}

#[test]
fn integer_rounding_modes_are_ordered() {
    for ease in Ease::iter() {
        for t in 0..=3 {
            let floor = evaluate_int(ease, t, RoundingMode::Floor);
            let round = evaluate_int(ease, t, RoundingMode::Round);
            let ceil = evaluate_int(ease, t, RoundingMode::Ceil);

            assert!(floor <= round && round <= ceil, "{} at {}", ease, t);
        }
    }
}

#[test]
fn integer_evaluation() {
    assert_eq!(Ease::Linear.eval_int_round(0), 0);
    assert_eq!(Ease::OutElastic.eval_int_round(1), 1);
    assert_eq!(Ease::InQuart.eval_int(2, RoundingMode::Ceil), 16);
    assert_eq!(Ease::InBack.eval_int(-1, RoundingMode::Floor), -5);
}

// The Penner functions in `easer` share their formulas with easings.net for
// these families.
fn check_penner<E: Easing<f64>>(family: Family) {
    let curve = |kind| Ease::from_parts(family, kind).unwrap();

    for t in unit_steps(64) {
        assert_approx_eq!(curve(Kind::In).eval(t), E::ease_in(t, 0.0, 1.0, 1.0), 1e-9);
        assert_approx_eq!(curve(Kind::Out).eval(t), E::ease_out(t, 0.0, 1.0, 1.0), 1e-9);
        assert_approx_eq!(
            curve(Kind::InOut).eval(t),
            E::ease_in_out(t, 0.0, 1.0, 1.0),
            1e-9
        );
    }
}

#[test]
fn matches_penner_functions() {
    check_penner::<Sine>(Family::Sine);
    check_penner::<Cubic>(Family::Cubic);
    check_penner::<Quart>(Family::Quart);
    check_penner::<Quint>(Family::Quint);
    check_penner::<Expo>(Family::Expo);
    check_penner::<Circ>(Family::Circ);
    check_penner::<Bounce>(Family::Bounce);
}

#[test]
fn ordinal_conversions() {
    assert_eq!(Ease::try_from(26u8), Ok(Ease::OutBounce));
    assert_eq!(u8::from(Ease::InOutElastic), 24);
    assert_eq!(
        Ease::try_from(200u8),
        Err(easetab::EaseError::UnknownOrdinal(200))
    );
    assert_eq!(Ease::ALL.len(), 28);
}
