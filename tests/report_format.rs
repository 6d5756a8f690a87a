use slip_estimator::{
    i18n::Translator,
    slip::{self, format_sci, ResultReport, SlipInputs},
};

#[test]
fn format_sci_matches_printf_style() {
    assert_eq!(format_sci(1.0), "1.000e+00");
    assert_eq!(format_sci(2e-10), "2.000e-10");
    assert_eq!(format_sci(1e7), "1.000e+07");
    assert_eq!(format_sci(-12346.0), "-1.235e+04");
    assert_eq!(format_sci(0.0), "0.000e+00");
    assert_eq!(format_sci(1.5e123), "1.500e+123");
}

#[test]
fn report_has_seven_formatted_rows() {
    let res = slip::evaluate(&SlipInputs::default()).unwrap();
    let report = ResultReport::new(&res, &Translator::new("en-us"));
    assert_eq!(report.rows.len(), 7);
    assert_eq!(report.rows[0].label, "Gap (m)");
    assert_eq!(report.rows[0].value, "1.000e-07");
    assert_eq!(report.rows[6].value, "2.000e-03");
    assert_eq!(report.headline, "No-slip condition is appropriate");
}

#[test]
fn rendered_text_contains_suggestion() {
    let res = slip::evaluate(&SlipInputs {
        sliding_speed_m_per_s: 1e5,
        ..SlipInputs::default()
    })
    .unwrap();
    let text = ResultReport::new(&res, &Translator::new("en-us")).render_text();
    assert!(text.starts_with("CALCULATION RESULTS\n"));
    assert!(text.contains("Effective Slip Length, bₑff (m): 1.000e+00"));
    assert!(text.contains("slip length of 1.000e+00 m."));
}
