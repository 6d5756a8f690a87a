//! 입력값과 계산 결과를 텍스트 파일로 내보낸다.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::about::{APP_NAME, AUTHOR, EMAIL, VERSION};
use crate::i18n::Translator;
use crate::slip::{FormInputs, ResultReport, SlipResult};

/// 내보내기 파일의 언어. 머리글과 입력 항목이 영어이고
/// ASCII 대체 표가 이 언어의 라벨만 다룬다.
pub const EXPORT_LANGUAGE: &str = "en-us";

/// 내보내기 기본 파일 이름.
pub const DEFAULT_FILE_NAME: &str = "slip_results.txt";

/// 파일에 기록할 문자 인코딩.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportEncoding {
    #[default]
    Utf8,
    /// 특수문자를 ASCII 대체 표기로 바꿔 기록한다.
    Ascii,
}

/// 내보내기 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("내보낼 결과가 없습니다. 먼저 계산하세요.")]
    NoResults,
    #[error("파일 쓰기 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// 특수문자 대체 표. 순서대로 적용한다(ₑff를 ₑ보다 먼저).
const ASCII_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("µ", "u"),
    ("μ", "u"),
    ("λ", "lambda"),
    ("γ", "gamma"),
    ("₀", "0"),
    ("ₑff", "eff"),
    ("·", "."),
    ("═", "="),
];

/// 비 ASCII 문자를 ASCII 대체 표기로 바꾼다. 대체 표에 없는 문자는 `?`가 된다.
pub fn to_ascii_safe(text: &str) -> String {
    let mut s = text.to_string();
    for (from, to) in ASCII_SUBSTITUTIONS {
        s = s.replace(from, to);
    }
    s.chars().map(|c| if c.is_ascii() { c } else { '?' }).collect()
}

/// 내보내기 파일 내용.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    content: String,
}

impl ExportDocument {
    /// 입력 원문과 결과 보고서로 문서를 만든다. 결과가 없으면 오류.
    pub fn build(
        form: &FormInputs,
        report: Option<&ResultReport>,
        generated: DateTime<Local>,
    ) -> Result<Self, ExportError> {
        let report = report.ok_or(ExportError::NoResults)?;
        let rule = "=".repeat(50);
        let mut content = format!(
            "{APP_NAME} - Results Export\nGenerated: {}\nVersion: {VERSION}\nAuthor: {AUTHOR} ({EMAIL})\n{rule}\n\n",
            generated.format("%Y-%m-%d %H:%M:%S")
        );
        content.push_str("INPUT PARAMETERS:\n");
        content.push_str(&format!(
            "Gap Height: {} {}\n",
            form.gap_height.trim(),
            form.gap_unit.symbol()
        ));
        content.push_str(&format!("Sliding Speed: {} m/s\n", form.sliding_speed.trim()));
        content.push_str(&format!(
            "Water Viscosity: {} {}\n",
            form.viscosity.trim(),
            form.viscosity_unit.symbol()
        ));
        content.push_str(&format!(
            "Interfacial Friction: {} Pa·s/m\n",
            form.friction_coefficient.trim()
        ));
        content.push_str(&format!(
            "Critical Shear Rate: {} 1/s\n",
            form.critical_shear_rate.trim()
        ));
        content.push_str(&format!("Exponent (m): {}\n\n", form.exponent.trim()));
        content.push_str("CALCULATION RESULTS:\n");
        content.push_str(&report.render_text());
        Ok(Self { content })
    }

    /// 화면 언어와 무관하게 결과 블록을 영어로 만들어 문서를 구성한다.
    pub fn from_result(
        form: &FormInputs,
        result: Option<&SlipResult>,
        generated: DateTime<Local>,
    ) -> Result<Self, ExportError> {
        let tr = Translator::new(EXPORT_LANGUAGE);
        let report = result.map(|r| ResultReport::new(r, &tr));
        Self::build(form, report.as_ref(), generated)
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// 지정 인코딩으로 변환한 내용.
    pub fn encoded(&self, encoding: ExportEncoding) -> String {
        match encoding {
            ExportEncoding::Utf8 => self.content.clone(),
            ExportEncoding::Ascii => to_ascii_safe(&self.content),
        }
    }
}

/// 문서를 파일로 기록한다.
pub fn write_export(
    path: &Path,
    doc: &ExportDocument,
    encoding: ExportEncoding,
) -> Result<(), ExportError> {
    fs::write(path, doc.encoded(encoding))?;
    tracing::info!(path = %path.display(), ?encoding, "결과 내보내기 완료");
    Ok(())
}
