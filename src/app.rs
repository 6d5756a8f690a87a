use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

use crate::config::{self, Config};
use crate::export::ExportError;
use crate::i18n::{self, Translator};
use crate::methodology::MethodologyError;
use crate::slip::{FormInputs, SlipError, SlipResult};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    #[error("입력 오류: {0}")]
    Slip(#[from] SlipError),
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
    #[error("방법론 문서 오류: {0}")]
    Methodology(#[from] MethodologyError),
    #[error("입력이 닫혔습니다")]
    Eof,
}

/// 대화형 세션 상태. 마지막으로 성공한 계산만 보관한다.
#[derive(Debug, Clone)]
pub struct Session {
    pub form: FormInputs,
    pub last: Option<(FormInputs, SlipResult)>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            form: FormInputs::from_defaults(&config.defaults, &config.default_units),
            last: None,
        }
    }

    /// 현재 폼으로 계산한다. 실패하면 직전 결과를 그대로 둔다.
    pub fn calculate(&mut self) -> Result<SlipResult, SlipError> {
        let result = self.form.evaluate()?;
        self.last = Some((self.form.clone(), result.clone()));
        Ok(result)
    }
}

/// CLI 애플리케이션의 메인 루프를 표준 입력으로 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    let stdin = io::stdin();
    run_with(&mut stdin.lock(), config, config_path, tr)
}

/// 주어진 입력으로 메뉴 루프를 실행한다. 입력이 끝나면 종료 메뉴와 같이 처리한다.
pub fn run_with<R: BufRead>(
    input: &mut R,
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
) -> Result<(), AppError> {
    let mut session = Session::new(config);
    loop {
        match step(input, config, config_path, tr, &mut session) {
            Ok(true) => {}
            Ok(false) => break,
            Err(AppError::Eof) => {
                tracing::debug!("입력 종료, 프로그램을 마칩니다");
                println!();
                break;
            }
            Err(e) => return Err(e),
        }
    }
    config.save(config_path)?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

/// 메뉴 한 번을 처리한다. 종료를 고르면 false.
fn step<R: BufRead>(
    input: &mut R,
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
    session: &mut Session,
) -> Result<bool, AppError> {
    match ui_cli::main_menu(tr, input)? {
        MenuChoice::Calculate => ui_cli::handle_calculate(tr, input, session)?,
        MenuChoice::Methodology => ui_cli::handle_methodology(tr)?,
        MenuChoice::Export => ui_cli::handle_export(tr, input, config, session)?,
        MenuChoice::Settings => {
            ui_cli::handle_settings(tr, input, config, session)?;
            config.save(config_path)?;
            let lang = i18n::resolve_language(&config.language, None);
            *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        }
        MenuChoice::About => ui_cli::handle_about(tr),
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}
