use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 나노미터 → 미터 환산 계수.
pub const NM_TO_M: f64 = 1e-9;

/// 슬립 길이/간극 비가 이 값 미만이면 무슬립으로 판정한다.
pub const NO_SLIP_THRESHOLD: f64 = 0.01;

/// 슬립 모델 입력 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlipInputs {
    /// 간극 높이(nm)
    pub gap_height_nm: f64,
    /// 상대 미끄럼 속도(m/s). 부호 있는 속도로 취급한다.
    pub sliding_speed_m_per_s: f64,
    /// 유체 점도(Pa·s)
    pub viscosity_pa_s: f64,
    /// 계면 마찰계수 λ(Pa·s/m)
    pub friction_coefficient: f64,
    /// 임계 전단율 γc(1/s)
    pub critical_shear_rate: f64,
    /// 전단 민감도 지수 m
    pub exponent: f64,
}

impl Default for SlipInputs {
    /// 물/나노 간극 기준 기본값.
    fn default() -> Self {
        Self {
            gap_height_nm: 100.0,
            sliding_speed_m_per_s: 1.0,
            viscosity_pa_s: 0.001,
            friction_coefficient: 1e7,
            critical_shear_rate: 1e7,
            exponent: 2.0,
        }
    }
}

/// CFD 벽면 경계조건 추천.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    NoSlip,
    Slip,
}

impl Recommendation {
    /// 슬립 비로부터 추천을 결정한다. 임계값과 같으면 슬립이다.
    pub fn from_slip_ratio(ratio: f64) -> Self {
        if ratio < NO_SLIP_THRESHOLD {
            Recommendation::NoSlip
        } else {
            Recommendation::Slip
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::NoSlip => "No-slip condition is appropriate",
            Recommendation::Slip => "Slip condition should be considered",
        }
    }

    /// CFD 설정 안내 문구. 슬립이면 유효 슬립 길이를 포함한다.
    pub fn cfd_suggestion(self, effective_slip_length_m: f64) -> String {
        match self {
            Recommendation::NoSlip => "For CFD simulation: Use a no-slip boundary condition (e.g., u = 0 at the wall).".to_string(),
            Recommendation::Slip => format!(
                "For CFD simulation: Use a Navier slip boundary condition with a slip length of {} m.",
                super::report::format_sci(effective_slip_length_m)
            ),
        }
    }
}

/// 슬립 모델 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipResult {
    /// 간극(m)
    pub gap_m: f64,
    /// 미끄럼 속도(m/s)
    pub sliding_speed_m_per_s: f64,
    /// 전단율 γ = U/h (1/s)
    pub shear_rate: f64,
    /// 전단응력 τ = μγ (Pa)
    pub shear_stress_pa: f64,
    /// 기준 슬립 길이 b₀ = μ/λ (m)
    pub baseline_slip_length_m: f64,
    /// 유효 슬립 길이 bₑff (m)
    pub effective_slip_length_m: f64,
    /// bₑff / h
    pub slip_ratio: f64,
    pub recommendation: Recommendation,
    pub cfd_suggestion: String,
}

/// 슬립 모델 입력/계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlipError {
    #[error("{field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl SlipError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SlipError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            SlipError::InvalidInput { field, .. } => field,
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, SlipError> {
    if !value.is_finite() {
        return Err(SlipError::invalid(field, format!("유한한 값이 아닙니다 ({value})")));
    }
    if value <= 0.0 {
        return Err(SlipError::invalid(field, format!("0보다 커야 합니다 ({value})")));
    }
    Ok(value)
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, SlipError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SlipError::invalid(field, format!("유한한 값이 아닙니다 ({value})")))
    }
}

/// 전단 의존 슬립 길이 모델을 계산한다.
///
/// bₑff = b₀ [1 + |γ/γc|^m]. 음의 미끄럼 속도는 방향만 다른 것으로 보고
/// 전단율 비의 절댓값을 거듭제곱한다. 전단율·전단응력은 부호를 유지한다.
pub fn evaluate(inputs: &SlipInputs) -> Result<SlipResult, SlipError> {
    let gap_nm = require_positive("gap_height", inputs.gap_height_nm)?;
    let speed = require_finite("sliding_speed", inputs.sliding_speed_m_per_s)?;
    let mu = require_positive("viscosity", inputs.viscosity_pa_s)?;
    let lambda = require_positive("friction_coefficient", inputs.friction_coefficient)?;
    let gamma_c = require_positive("critical_shear_rate", inputs.critical_shear_rate)?;
    let m = require_finite("exponent", inputs.exponent)?;

    let gap_m = gap_nm * NM_TO_M;
    let shear_rate = speed / gap_m;
    let shear_stress = mu * shear_rate;
    let b0 = mu / lambda;
    let b_eff = b0 * (1.0 + (shear_rate / gamma_c).abs().powf(m));
    let ratio = b_eff / gap_m;

    // 극단값(예: 0^음수, 오버플로)으로 인한 비유한 결과는 입력 오류로 본다.
    require_finite("gap_height", gap_m)?;
    require_finite("shear_rate", shear_rate)?;
    require_finite("shear_stress", shear_stress)?;
    require_finite("baseline_slip_length", b0)?;
    require_finite("effective_slip_length", b_eff)?;
    require_finite("slip_ratio", ratio)?;

    let recommendation = Recommendation::from_slip_ratio(ratio);
    Ok(SlipResult {
        gap_m,
        sliding_speed_m_per_s: speed,
        shear_rate,
        shear_stress_pa: shear_stress,
        baseline_slip_length_m: b0,
        effective_slip_length_m: b_eff,
        slip_ratio: ratio,
        recommendation,
        cfd_suggestion: recommendation.cfd_suggestion(b_eff),
    })
}
