use crate::i18n::{self, keys, Translator};
use crate::slip::model::{Recommendation, SlipResult};

/// 결과 블록 구분선 길이.
const RULE_WIDTH: usize = 50;

/// `%.3e`와 같은 형식으로 과학적 표기 문자열을 만든다.
///
/// Rust의 `{:.3e}`는 `1.000e0`처럼 지수를 출력하므로 부호와 두 자리 이상의
/// 지수로 다시 맞춘다. 예: `1.000e+00`, `2.000e-10`.
pub fn format_sci(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    let raw = format!("{value:.3e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// 추천 결과를 시각적으로 구분하기 위한 색(RGB).
pub fn recommendation_rgb(rec: Recommendation) -> [u8; 3] {
    match rec {
        Recommendation::NoSlip => [0x4c, 0xaf, 0x50],
        Recommendation::Slip => [0xf4, 0x43, 0x36],
    }
}

/// 라벨과 서식화된 값 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

/// 계산 결과를 화면/파일 출력용으로 정리한 보고서.
#[derive(Debug, Clone)]
pub struct ResultReport {
    pub results_heading: String,
    pub rows: Vec<ResultRow>,
    pub recommendation_heading: String,
    pub recommendation: Recommendation,
    pub headline: String,
    pub cfd_suggestion: String,
}

impl ResultReport {
    /// 계산 결과와 번역기로 보고서를 구성한다.
    pub fn new(result: &SlipResult, tr: &Translator) -> Self {
        let row = |key: &str, value: f64| ResultRow {
            label: tr.t(key),
            value: format_sci(value),
        };
        let rows = vec![
            row(keys::RESULT_GAP, result.gap_m),
            row(keys::RESULT_SPEED, result.sliding_speed_m_per_s),
            row(keys::RESULT_SHEAR_RATE, result.shear_rate),
            row(keys::RESULT_SHEAR_STRESS, result.shear_stress_pa),
            row(keys::RESULT_B0, result.baseline_slip_length_m),
            row(keys::RESULT_BEFF, result.effective_slip_length_m),
            row(keys::RESULT_RATIO, result.slip_ratio),
        ];
        let (headline, cfd_suggestion) = match result.recommendation {
            Recommendation::NoSlip => (tr.t(keys::REC_NO_SLIP), tr.t(keys::CFD_NO_SLIP)),
            Recommendation::Slip => (
                tr.t(keys::REC_SLIP),
                i18n::fill_template(
                    &tr.t(keys::CFD_SLIP),
                    &[("b_eff", format_sci(result.effective_slip_length_m))],
                ),
            ),
        };
        Self {
            results_heading: tr.t(keys::RESULTS_HEADING),
            rows,
            recommendation_heading: tr.t(keys::RECOMMENDATION_HEADING),
            recommendation: result.recommendation,
            headline,
            cfd_suggestion,
        }
    }

    /// 결과 블록을 일반 텍스트로 만든다. 내보내기와 CLI 출력에 쓴다.
    pub fn render_text(&self) -> String {
        let rule = "═".repeat(RULE_WIDTH);
        let mut out = String::new();
        out.push_str(&format!("{}\n{rule}\n\n", self.results_heading));
        for r in &self.rows {
            out.push_str(&format!("{}: {}\n", r.label, r.value));
        }
        out.push('\n');
        out.push_str(&format!("{}\n{rule}\n\n", self.recommendation_heading));
        out.push_str(&format!("{}\n\n", self.headline));
        out.push_str(&format!("{}\n", self.cfd_suggestion));
        out
    }
}
