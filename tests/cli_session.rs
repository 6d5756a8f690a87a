use slip_estimator::{
    app::{self, AppError},
    config::{self, Config},
    export::ExportEncoding,
    i18n::Translator,
};

#[test]
fn closed_input_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    let mut tr = Translator::new("en-us");
    let mut input: &[u8] = b"";
    app::run_with(&mut input, &mut cfg, &cfg_path, &mut tr).expect("session ends cleanly");
    assert!(cfg_path.exists());
}

#[test]
fn input_ending_mid_form_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    let mut tr = Translator::new("en-us");
    let mut input: &[u8] = b"x\n1\n250\n";
    let res = app::run_with(&mut input, &mut cfg, &cfg_path, &mut tr);
    assert!(!matches!(res, Err(AppError::Eof)));
    assert!(res.is_ok());
}

#[test]
fn calculate_then_export_then_exit() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    let out = dir.path().join("result.txt");
    let mut cfg = Config::default();
    let mut tr = Translator::new("en-us");
    let script = format!("1\n\n\n\n\n\n\n3\n{}\n0\n", out.display());
    let mut input = script.as_bytes();
    app::run_with(&mut input, &mut cfg, &cfg_path, &mut tr).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("Gap Height: 100 nm"));
    assert!(written.contains("No-slip condition is appropriate"));
}

#[test]
fn korean_session_exports_readable_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    let out = dir.path().join("result.txt");
    let mut cfg = Config::default();
    cfg.language = "ko-kr".into();
    cfg.export.encoding = ExportEncoding::Ascii;
    let mut tr = Translator::new("ko-kr");
    let script = format!("1\n\n\n\n\n\n\n3\n{}\n0\n", out.display());
    let mut input = script.as_bytes();
    app::run_with(&mut input, &mut cfg, &cfg_path, &mut tr).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.is_ascii());
    assert!(!written.contains('?'), "{written}");
    assert!(written.contains("Gap (m): 1.000e-07"));
    assert!(written.contains("Effective Slip Length, beff (m): 2.000e-10"));
    assert_eq!(config::load_or_default(&cfg_path).unwrap().language, "ko-kr");
}
