use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::about;
use crate::app::{AppError, Session};
use crate::config::Config;
use crate::export::{self, ExportDocument, ExportEncoding};
use crate::i18n::{keys, Translator};
use crate::methodology;
use crate::slip::ResultReport;
use crate::units::{LengthUnit, ViscosityUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Methodology,
    Export,
    Settings,
    About,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_METHODOLOGY,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_ABOUT,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(input, &tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Methodology),
            "3" => return Ok(MenuChoice::Export),
            "4" => return Ok(MenuChoice::Settings),
            "5" => return Ok(MenuChoice::About),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 메뉴를 처리한다. 입력 오류는 표시만 하고 메뉴로 돌아간다.
pub fn handle_calculate<R: BufRead>(
    tr: &Translator,
    input: &mut R,
    session: &mut Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_HINT));
    let form = &mut session.form;
    let gap_label = format!("{} ({})", tr.t(keys::INPUT_GAP), form.gap_unit.symbol());
    let visc_label = format!(
        "{} ({})",
        tr.t(keys::INPUT_VISCOSITY),
        form.viscosity_unit.symbol()
    );
    read_field(input, &gap_label, &mut form.gap_height)?;
    read_field(input, &tr.t(keys::INPUT_SPEED), &mut form.sliding_speed)?;
    read_field(input, &visc_label, &mut form.viscosity)?;
    read_field(
        input,
        &tr.t(keys::INPUT_FRICTION),
        &mut form.friction_coefficient,
    )?;
    read_field(
        input,
        &tr.t(keys::INPUT_CRIT_SHEAR),
        &mut form.critical_shear_rate,
    )?;
    read_field(input, &tr.t(keys::INPUT_EXPONENT), &mut form.exponent)?;

    match session.calculate() {
        Ok(result) => {
            println!();
            print!("{}", ResultReport::new(&result, tr).render_text());
        }
        Err(e) => {
            tracing::warn!(error = %e, "계산 입력 오류");
            println!(
                "{}: {} {e}",
                tr.t(keys::ERROR_PREFIX),
                tr.t(keys::CALC_ERROR)
            );
        }
    }
    Ok(())
}

/// 방법론을 출력하고 HTML 문서를 생성한다.
pub fn handle_methodology(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::METHODOLOGY_HEADING));
    println!("{}", methodology::methodology_text());
    match methodology::write_methodology_html(about::current_year()) {
        Ok(path) => println!(
            "\n{} {}",
            tr.t(keys::METHODOLOGY_HTML_WRITTEN),
            path.display()
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 마지막 계산 결과를 파일로 내보낸다.
pub fn handle_export<R: BufRead>(
    tr: &Translator,
    input: &mut R,
    cfg: &Config,
    session: &Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXPORT_HEADING));
    let Some((form, result)) = &session.last else {
        println!("{}", tr.t(keys::EXPORT_NO_RESULTS));
        return Ok(());
    };
    let mut path = export::DEFAULT_FILE_NAME.to_string();
    read_field(input, &tr.t(keys::EXPORT_PROMPT_PATH), &mut path)?;
    let path = PathBuf::from(path.trim());

    let doc = ExportDocument::from_result(form, Some(result), chrono::Local::now())?;
    let encoding = cfg.export.encoding;
    match export::write_export(&path, &doc, encoding) {
        Ok(()) => {
            let key = match encoding {
                ExportEncoding::Utf8 => keys::EXPORT_DONE,
                ExportEncoding::Ascii => keys::EXPORT_ASCII_DONE,
            };
            println!("{} {}", tr.t(key), path.display());
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings<R: BufRead>(
    tr: &Translator,
    input: &mut R,
    cfg: &mut Config,
    session: &mut Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} language={}, gap={}, viscosity={}, export={:?}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.default_units.gap.symbol(),
        cfg.default_units.viscosity.symbol(),
        cfg.export.encoding
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, &tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let sel = read_line(input, &tr.t(keys::PROMPT_SELECT))?;
            pick(&["auto", "en-us", "ko-kr"], &sel).map(|lang| cfg.language = lang.to_string())
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_GAP_UNIT_OPTIONS));
            let sel = read_line(input, &tr.t(keys::PROMPT_SELECT))?;
            pick(&LengthUnit::ALL, &sel).map(|u| {
                cfg.default_units.gap = u;
                session.form.gap_unit = u;
            })
        }
        "3" => {
            println!("{}", tr.t(keys::SETTINGS_VISCOSITY_UNIT_OPTIONS));
            let sel = read_line(input, &tr.t(keys::PROMPT_SELECT))?;
            pick(&ViscosityUnit::ALL, &sel).map(|u| {
                cfg.default_units.viscosity = u;
                session.form.viscosity_unit = u;
            })
        }
        "4" => {
            println!("{}", tr.t(keys::SETTINGS_ENCODING_OPTIONS));
            let sel = read_line(input, &tr.t(keys::PROMPT_SELECT))?;
            pick(&[ExportEncoding::Utf8, ExportEncoding::Ascii], &sel)
                .map(|e| cfg.export.encoding = e)
        }
        _ => None,
    };
    match changed {
        Some(()) => println!("{}", tr.t(keys::SETTINGS_SAVED)),
        None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

/// 프로그램 정보를 출력한다.
pub fn handle_about(tr: &Translator) {
    println!("{}", tr.t(keys::ABOUT_HEADING));
    println!("{}", about::APP_NAME);
    println!("{}: {}", tr.t(keys::ABOUT_VERSION), about::VERSION);
    println!("{}: {} ({})", tr.t(keys::ABOUT_AUTHOR), about::AUTHOR, about::EMAIL);
    println!("{}\n", tr.t(keys::ABOUT_DESCRIPTION));
    println!("{}", about::license_text(about::current_year()));
}

/// 1부터 시작하는 번호로 목록에서 고른다.
fn pick<T: Copy>(options: &[T], sel: &str) -> Option<T> {
    let n: usize = sel.trim().parse().ok()?;
    n.checked_sub(1).and_then(|i| options.get(i).copied())
}

/// 한 줄을 읽는다. 입력이 닫혀 있으면(0바이트) `AppError::Eof`.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Eof);
    }
    Ok(buf)
}

/// `라벨 [현재값]: ` 형식으로 묻고, 빈 입력이면 현재값을 유지한다.
fn read_field<R: BufRead>(
    input: &mut R,
    label: &str,
    value: &mut String,
) -> Result<(), AppError> {
    let line = read_line(input, &format!("{label} [{value}]: "))?;
    let line = line.trim();
    if !line.is_empty() {
        *value = line.to_string();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{main_menu, pick};
    use crate::app::AppError;
    use crate::i18n::Translator;
    use crate::units::LengthUnit;

    #[test]
    fn menu_reports_closed_input() {
        let mut input: &[u8] = b"";
        let res = main_menu(&Translator::new("en-us"), &mut input);
        assert!(matches!(res, Err(AppError::Eof)));
    }

    #[test]
    fn menu_retries_until_valid_choice() {
        let mut input: &[u8] = b"9

2
";
        let res = main_menu(&Translator::new("en-us"), &mut input);
        assert!(matches!(res, Ok(super::MenuChoice::Methodology)));
    }

    #[test]
    fn pick_is_one_based_and_bounded() {
        assert_eq!(pick(&LengthUnit::ALL, "2"), Some(LengthUnit::Micrometer));
        assert_eq!(pick(&LengthUnit::ALL, "0"), None);
        assert_eq!(pick(&LengthUnit::ALL, "4"), None);
        assert_eq!(pick(&LengthUnit::ALL, "x"), None);
    }
}
