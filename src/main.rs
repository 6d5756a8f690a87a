use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use slip_estimator::{app, config, i18n};

/// 슬립/무슬립 경계조건 판정 대화형 터미널 버전.
#[derive(Debug, Parser)]
#[command(name = "slip_estimator_cli", version, about)]
struct Cli {
    /// 표시 언어 (auto/en-us/ko-kr)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        tracing::error!(error = %err, "실행 실패");
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    tracing::debug!(%lang, "언어 결정");
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &cli.config, &mut tr)
}
