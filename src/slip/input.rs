use crate::config::{DefaultUnits, InputDefaults};
use crate::slip::model::{self, SlipError, SlipInputs, SlipResult};
use crate::units::{convert_length, convert_viscosity, LengthUnit, ViscosityUnit};

/// 사용자가 입력한 그대로의 폼 값.
///
/// 내보내기에는 입력 원문과 단위를 그대로 남겨야 하므로 문자열로 보관하고,
/// 계산 직전에만 숫자로 파싱한다.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub gap_height: String,
    pub gap_unit: LengthUnit,
    pub sliding_speed: String,
    pub viscosity: String,
    pub viscosity_unit: ViscosityUnit,
    pub friction_coefficient: String,
    pub critical_shear_rate: String,
    pub exponent: String,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::from_defaults(&InputDefaults::default(), &DefaultUnits::default())
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, SlipError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SlipError::invalid(field, "값이 비어 있습니다"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| SlipError::invalid(field, format!("숫자가 아닙니다: '{trimmed}'")))
}

impl FormInputs {
    /// 설정의 기본값/단위로 폼을 만든다.
    pub fn from_defaults(defaults: &InputDefaults, units: &DefaultUnits) -> Self {
        Self {
            gap_height: defaults.gap_height.clone(),
            gap_unit: units.gap,
            sliding_speed: defaults.sliding_speed.clone(),
            viscosity: defaults.viscosity.clone(),
            viscosity_unit: units.viscosity,
            friction_coefficient: defaults.friction_coefficient.clone(),
            critical_shear_rate: defaults.critical_shear_rate.clone(),
            exponent: defaults.exponent.clone(),
        }
    }

    /// 여섯 개 필드를 파싱해 모델 입력(nm, Pa·s 기준)으로 변환한다.
    pub fn parse(&self) -> Result<SlipInputs, SlipError> {
        let gap = parse_field("gap_height", &self.gap_height)?;
        let speed = parse_field("sliding_speed", &self.sliding_speed)?;
        let mu = parse_field("viscosity", &self.viscosity)?;
        let lambda = parse_field("friction_coefficient", &self.friction_coefficient)?;
        let gamma_c = parse_field("critical_shear_rate", &self.critical_shear_rate)?;
        let m = parse_field("exponent", &self.exponent)?;
        Ok(SlipInputs {
            gap_height_nm: convert_length(gap, self.gap_unit, LengthUnit::Nanometer),
            sliding_speed_m_per_s: speed,
            viscosity_pa_s: convert_viscosity(mu, self.viscosity_unit, ViscosityUnit::PascalSecond),
            friction_coefficient: lambda,
            critical_shear_rate: gamma_c,
            exponent: m,
        })
    }

    /// 파싱 후 모델을 계산한다. 파싱에 실패하면 모델은 호출되지 않는다.
    pub fn evaluate(&self) -> Result<SlipResult, SlipError> {
        let inputs = self.parse()?;
        model::evaluate(&inputs)
    }
}
