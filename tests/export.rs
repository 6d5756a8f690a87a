use chrono::{Local, TimeZone};
use slip_estimator::{
    export::{self, to_ascii_safe, ExportDocument, ExportEncoding, ExportError},
    i18n::Translator,
    slip::{FormInputs, ResultReport},
};

fn document(form: &FormInputs) -> ExportDocument {
    let res = form.evaluate().unwrap();
    let report = ResultReport::new(&res, &Translator::new("en-us"));
    let when = Local.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    ExportDocument::build(form, Some(&report), when).unwrap()
}

#[test]
fn ascii_substitutions() {
    assert_eq!(to_ascii_safe("µm μ λ γ"), "um u lambda gamma");
    assert_eq!(to_ascii_safe("b₀ bₑff Pa·s ══"), "b0 beff Pa.s ==");
    assert_eq!(to_ascii_safe("간극"), "??");
}

#[test]
fn export_requires_results() {
    let err = ExportDocument::build(&FormInputs::default(), None, Local::now()).unwrap_err();
    assert!(matches!(err, ExportError::NoResults));
}

#[test]
fn document_keeps_inputs_as_entered() {
    let form = FormInputs {
        critical_shear_rate: "1e7".into(),
        ..FormInputs::default()
    };
    let doc = document(&form);
    let text = doc.as_str();
    assert!(text.starts_with("Slip/No-Slip Estimator - Results Export\n"));
    assert!(text.contains("Generated: 2025-03-01 09:30:00"));
    assert!(text.contains("Gap Height: 100 nm\n"));
    assert!(text.contains("Critical Shear Rate: 1e7 1/s\n"));
    assert!(text.contains("CALCULATION RESULTS:\n"));
}

#[test]
fn write_both_encodings() {
    let dir = tempfile::tempdir().unwrap();
    let doc = document(&FormInputs::default());

    let utf8 = dir.path().join("utf8.txt");
    export::write_export(&utf8, &doc, ExportEncoding::Utf8).unwrap();
    assert_eq!(std::fs::read_to_string(&utf8).unwrap(), doc.as_str());

    let ascii = dir.path().join("ascii.txt");
    export::write_export(&ascii, &doc, ExportEncoding::Ascii).unwrap();
    let written = std::fs::read_to_string(&ascii).unwrap();
    assert!(written.is_ascii());
    assert!(written.contains("Baseline Slip Length, b0 (m)"));
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let doc = document(&FormInputs::default());
    let err = export::write_export(&dir.path().join("nope/out.txt"), &doc, ExportEncoding::Utf8)
        .unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[test]
fn result_block_is_english_whatever_the_screen_language() {
    let form = FormInputs::default();
    let res = form.evaluate().unwrap();
    let doc = ExportDocument::from_result(&form, Some(&res), Local::now()).unwrap();
    let ascii = doc.encoded(ExportEncoding::Ascii);
    assert!(!ascii.contains('?'), "{ascii}");
    assert!(ascii.contains("Baseline Slip Length, b0 (m): 1.000e-10"));

    // 화면용 한국어 보고서는 ASCII로 옮기면 라벨이 사라진다
    let ko = ResultReport::new(&res, &Translator::new("ko-kr"));
    let lossy = ExportDocument::build(&form, Some(&ko), Local::now()).unwrap();
    assert!(lossy.encoded(ExportEncoding::Ascii).contains('?'));
}
