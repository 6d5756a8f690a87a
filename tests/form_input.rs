use slip_estimator::{
    slip::{FormInputs, Recommendation},
    units::{LengthUnit, ViscosityUnit},
};

#[test]
fn empty_and_non_numeric_fields_are_reported() {
    let form = FormInputs {
        gap_height: "   ".into(),
        ..FormInputs::default()
    };
    assert_eq!(form.parse().unwrap_err().field(), "gap_height");

    let form = FormInputs {
        exponent: "two".into(),
        ..FormInputs::default()
    };
    assert_eq!(form.evaluate().unwrap_err().field(), "exponent");
}

#[test]
fn units_are_converted_before_evaluation() {
    let form = FormInputs {
        gap_height: "0.1".into(),
        gap_unit: LengthUnit::Micrometer,
        viscosity: "1".into(),
        viscosity_unit: ViscosityUnit::Centipoise,
        ..FormInputs::default()
    };
    let inputs = form.parse().unwrap();
    assert!((inputs.gap_height_nm - 100.0).abs() < 1e-9);
    assert!((inputs.viscosity_pa_s - 0.001).abs() < 1e-15);
    assert_eq!(form.evaluate().unwrap().recommendation, Recommendation::NoSlip);
}

#[test]
fn scientific_notation_is_accepted() {
    let form = FormInputs {
        sliding_speed: " 1e5 ".into(),
        ..FormInputs::default()
    };
    assert_eq!(form.evaluate().unwrap().recommendation, Recommendation::Slip);
}
