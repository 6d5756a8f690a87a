use slip_estimator::methodology;

#[test]
fn html_lists_formulas_threshold_and_year() {
    let html = methodology::methodology_html(2031);
    assert!(html.contains("MathJax"));
    assert!(html.contains("0.01"));
    assert!(html.contains("&copy; 2031"));
    assert!(html.contains("Thompson"));
    assert!(!html.contains("{threshold}"));
}

#[test]
fn html_is_written_to_disk() {
    let path = methodology::write_methodology_html(2030).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("&copy; 2030"));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn criteria_summary_mentions_both_outcomes() {
    let s = methodology::criteria_summary();
    assert!(s.contains("No-Slip"));
    assert!(s.contains("Slip condition recommended"));
}
