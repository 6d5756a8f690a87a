use proptest::prelude::*;
use slip_estimator::slip::{self, Recommendation, SlipError, SlipInputs, NO_SLIP_THRESHOLD};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= b.abs() * 1e-9
}

#[test]
fn default_inputs_recommend_no_slip() {
    let res = slip::evaluate(&SlipInputs::default()).expect("default calc");
    assert!(close(res.gap_m, 1e-7), "gap={}", res.gap_m);
    assert!(close(res.shear_rate, 1e7));
    assert!(close(res.shear_stress_pa, 1e4));
    assert!(close(res.baseline_slip_length_m, 1e-10));
    assert!(close(res.effective_slip_length_m, 2e-10));
    assert!(close(res.slip_ratio, 2e-3));
    assert_eq!(res.recommendation, Recommendation::NoSlip);
    assert!(res.cfd_suggestion.contains("no-slip"));
}

#[test]
fn high_speed_recommends_slip() {
    let res = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 1e5,
        ..SlipInputs::default()
    })
    .expect("high speed calc");
    assert!(close(res.shear_rate, 1e12));
    assert!(close(res.effective_slip_length_m, 1.0));
    assert!(close(res.slip_ratio, 1e7));
    assert_eq!(res.recommendation, Recommendation::Slip);
    assert!(res.cfd_suggestion.contains("1.000e+00"), "{}", res.cfd_suggestion);
}

#[test]
fn ratio_at_threshold_is_slip() {
    // b0 = 1e-3 / 1e6 = 1e-9 m, no shear term, h = 1e-7 m
    let res = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 0.0,
        friction_coefficient: 1e6,
        ..SlipInputs::default()
    })
    .expect("threshold calc");
    assert_eq!(res.slip_ratio, NO_SLIP_THRESHOLD, "ratio={}", res.slip_ratio);
    assert_eq!(res.recommendation, Recommendation::Slip);
}

#[test]
fn ratio_just_below_threshold_is_no_slip() {
    let below = NO_SLIP_THRESHOLD - f64::EPSILON * NO_SLIP_THRESHOLD;
    assert_eq!(Recommendation::from_slip_ratio(below), Recommendation::NoSlip);
    let res = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 0.0,
        friction_coefficient: 1.01e6,
        ..SlipInputs::default()
    })
    .unwrap();
    assert!(res.slip_ratio < NO_SLIP_THRESHOLD);
    assert_eq!(res.recommendation, Recommendation::NoSlip);
}

#[test]
fn zero_denominators_are_rejected() {
    let base = SlipInputs::default();
    let cases = [
        (SlipInputs { gap_height_nm: 0.0, ..base }, "gap_height"),
        (SlipInputs { friction_coefficient: 0.0, ..base }, "friction_coefficient"),
        (SlipInputs { critical_shear_rate: 0.0, ..base }, "critical_shear_rate"),
        (SlipInputs { viscosity_pa_s: -1.0, ..base }, "viscosity"),
        (SlipInputs { exponent: f64::NAN, ..base }, "exponent"),
    ];
    for (inputs, field) in cases {
        let err = slip::evaluate(&inputs).unwrap_err();
        assert_eq!(err.field(), field, "{err}");
        assert!(matches!(err, SlipError::InvalidInput { .. }));
    }
}

#[test]
fn negative_speed_keeps_sign_but_not_slip_length() {
    let forward = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 3.0,
        exponent: 1.5,
        ..SlipInputs::default()
    })
    .unwrap();
    let backward = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: -3.0,
        exponent: 1.5,
        ..SlipInputs::default()
    })
    .unwrap();
    assert!(backward.shear_rate < 0.0);
    assert!(backward.shear_stress_pa < 0.0);
    assert_eq!(backward.effective_slip_length_m, forward.effective_slip_length_m);
    assert_eq!(backward.recommendation, forward.recommendation);
}

#[test]
fn low_shear_approaches_baseline() {
    let res = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 1e-6,
        ..SlipInputs::default()
    })
    .unwrap();
    assert!(close(res.effective_slip_length_m, res.baseline_slip_length_m));
}

#[test]
fn zero_speed_with_negative_exponent_is_rejected() {
    let err = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 0.0,
        exponent: -1.0,
        ..SlipInputs::default()
    })
    .unwrap_err();
    assert_eq!(err.field(), "effective_slip_length");
}

#[test]
fn evaluation_is_deterministic() {
    let inputs = SlipInputs {
        gap_height_nm: 37.5,
        sliding_speed_m_per_s: 12.0,
        ..SlipInputs::default()
    };
    assert_eq!(slip::evaluate(&inputs), slip::evaluate(&inputs));
}

proptest! {
    #[test]
    fn slip_length_grows_with_speed(
        u1 in 0.0f64..1e4,
        du in 0.0f64..1e4,
        m in 0.0f64..4.0,
    ) {
        let a = SlipInputs { sliding_speed_m_per_s: u1, exponent: m, ..SlipInputs::default() };
        let b = SlipInputs { sliding_speed_m_per_s: u1 + du, ..a };
        if let (Ok(ra), Ok(rb)) = (slip::evaluate(&a), slip::evaluate(&b)) {
            prop_assert!(rb.effective_slip_length_m >= ra.effective_slip_length_m * (1.0 - 1e-12));
            prop_assert!(ra.effective_slip_length_m >= ra.baseline_slip_length_m * (1.0 - 1e-12));
        }
    }
}
