use slip_estimator::{
    config::{self, Config},
    export::ExportEncoding,
    units::{LengthUnit, ViscosityUnit},
};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko-kr".into();
    cfg.default_units.gap = LengthUnit::Micrometer;
    cfg.default_units.viscosity = ViscosityUnit::Centipoise;
    cfg.export.encoding = ExportEncoding::Ascii;
    cfg.save(&path).unwrap();
    assert_eq!(config::load_or_default(&path).unwrap(), cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en-us\"\n[defaults]\nexponent = \"3\"\n").unwrap();
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg.language, "en-us");
    assert_eq!(cfg.defaults.exponent, "3");
    assert_eq!(cfg.defaults.gap_height, "100");
    assert_eq!(cfg.export.encoding, ExportEncoding::Utf8);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").unwrap();
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
