use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::export::ExportEncoding;
use crate::units::{LengthUnit, ViscosityUnit};

/// 기본 설정 파일 이름(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 입력 폼의 기본 단위.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub gap: LengthUnit,
    pub viscosity: ViscosityUnit,
}

/// 폼 초기값. 사용자가 입력하는 문자열 형태 그대로 보관한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub gap_height: String,
    pub sliding_speed: String,
    pub viscosity: String,
    pub friction_coefficient: String,
    pub critical_shear_rate: String,
    pub exponent: String,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            gap_height: "100".into(),
            sliding_speed: "1".into(),
            viscosity: "0.001".into(),
            friction_coefficient: "1e7".into(),
            critical_shear_rate: "1e7".into(),
            exponent: "2".into(),
        }
    }
}

/// 결과 내보내기 설정.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub encoding: ExportEncoding,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en-us/ko-kr)
    pub language: String,
    /// 외부 언어팩(TOML) 디렉터리
    pub language_pack_dir: Option<String>,
    pub default_units: DefaultUnits,
    pub defaults: InputDefaults,
    pub export: ExportSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            default_units: DefaultUnits::default(),
            defaults: InputDefaults::default(),
            export: ExportSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
