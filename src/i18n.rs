use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_METHODOLOGY: &str = "main_menu.methodology";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_ABOUT: &str = "main_menu.about";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calculate.heading";
    pub const CALC_HINT: &str = "calculate.hint";
    pub const INPUT_PARAMETERS: &str = "input.heading";
    pub const INPUT_GAP: &str = "input.gap";
    pub const INPUT_SPEED: &str = "input.speed";
    pub const INPUT_VISCOSITY: &str = "input.viscosity";
    pub const INPUT_FRICTION: &str = "input.friction";
    pub const INPUT_CRIT_SHEAR: &str = "input.critical_shear";
    pub const INPUT_EXPONENT: &str = "input.exponent";
    pub const TIP_GAP: &str = "tip.gap";
    pub const TIP_SPEED: &str = "tip.speed";
    pub const TIP_VISCOSITY: &str = "tip.viscosity";
    pub const TIP_FRICTION: &str = "tip.friction";
    pub const TIP_CRIT_SHEAR: &str = "tip.critical_shear";
    pub const TIP_EXPONENT: &str = "tip.exponent";

    pub const RESULTS_HEADING: &str = "result.heading";
    pub const RECOMMENDATION_HEADING: &str = "result.recommendation_heading";
    pub const RESULT_GAP: &str = "result.gap";
    pub const RESULT_SPEED: &str = "result.speed";
    pub const RESULT_SHEAR_RATE: &str = "result.shear_rate";
    pub const RESULT_SHEAR_STRESS: &str = "result.shear_stress";
    pub const RESULT_B0: &str = "result.b0";
    pub const RESULT_BEFF: &str = "result.b_eff";
    pub const RESULT_RATIO: &str = "result.ratio";
    pub const REC_NO_SLIP: &str = "recommendation.no_slip";
    pub const REC_SLIP: &str = "recommendation.slip";
    pub const CFD_NO_SLIP: &str = "recommendation.cfd_no_slip";
    pub const CFD_SLIP: &str = "recommendation.cfd_slip";
    pub const CALC_ERROR: &str = "error.calculation";

    pub const CRITERIA_HEADING: &str = "criteria.heading";
    pub const METHODOLOGY_HEADING: &str = "methodology.heading";
    pub const METHODOLOGY_HTML_WRITTEN: &str = "methodology.html_written";

    pub const EXPORT_HEADING: &str = "export.heading";
    pub const EXPORT_NO_RESULTS: &str = "export.no_results";
    pub const EXPORT_PROMPT_PATH: &str = "export.prompt_path";
    pub const EXPORT_DONE: &str = "export.done";
    pub const EXPORT_ASCII_DONE: &str = "export.ascii_done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_GAP_UNIT_OPTIONS: &str = "settings.gap_unit_options";
    pub const SETTINGS_VISCOSITY_UNIT_OPTIONS: &str = "settings.viscosity_unit_options";
    pub const SETTINGS_ENCODING_OPTIONS: &str = "settings.encoding_options";

    pub const ABOUT_HEADING: &str = "about.heading";
    pub const ABOUT_VERSION: &str = "about.version";
    pub const ABOUT_AUTHOR: &str = "about.author";
    pub const ABOUT_DESCRIPTION: &str = "about.description";

    pub const STATUS_READY: &str = "status.ready";
    pub const STATUS_LAST_CALC: &str = "status.last_calc";
    pub const STATUS_CALC_ERROR: &str = "status.calc_error";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        match code.trim().get(..2).map(str::to_ascii_lowercase).as_deref() {
            Some("ko") => Language::Ko,
            _ => Language::En,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩 → 내장 문자열 순으로 조회한다. 둘 다 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Some(v.clone());
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        builtin.map(str::to_string)
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key)
            .unwrap_or_else(|| format!("[missing translation: {key}]"))
    }
}

/// `{name}` 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    for var in ["LANG", "LC_ALL"] {
        if let Some(code) = std::env::var(var).ok().as_deref().and_then(normalize_locale_string) {
            return Some(code);
        }
    }
    None
}

/// `<dir>/<lang>.toml`, 없으면 `<dir>/<base>.toml`(예: en-us → en) 언어팩을 읽는다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let base = lang.split(['-', '_']).next().unwrap_or(lang);
    [lang, base].into_iter().find_map(|code| {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let src = fs::read_to_string(&path).ok()?;
        tracing::debug!(path = %path.display(), "언어팩 로드");
        parse_toml_to_map(&src)
    })
}

/// 언어팩 TOML을 평면 맵으로 만든다. 중첩 테이블은 `a.b.c` 키가 된다.
/// 문자열이 아닌 값은 무시하고, 쓸 만한 키가 하나도 없으면 None.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let root: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    let mut stack: Vec<(String, &toml::Value)> =
        root.iter().map(|(k, v)| (k.clone(), v)).collect();
    while let Some((key, value)) = stack.pop() {
        match value {
            toml::Value::String(text) => {
                map.insert(key, text.clone());
            }
            toml::Value::Table(child) => {
                stack.extend(child.iter().map(|(k, v)| (format!("{key}.{k}"), v)));
            }
            _ => {}
        }
    }
    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Slip/No-Slip Estimator ===",
        MAIN_MENU_CALCULATE => "1) 계산",
        MAIN_MENU_METHODOLOGY => "2) 계산 방법론",
        MAIN_MENU_EXPORT => "3) 결과 내보내기",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_ABOUT => "5) 프로그램 정보",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- 계산 --",
        CALC_HINT => "엔터를 누르면 괄호 안의 값을 유지합니다.",
        INPUT_PARAMETERS => "입력 변수",
        INPUT_GAP => "간극 높이",
        INPUT_SPEED => "미끄럼 속도 (m/s)",
        INPUT_VISCOSITY => "물 점도",
        INPUT_FRICTION => "계면 마찰계수 (Pa·s/m)",
        INPUT_CRIT_SHEAR => "임계 전단율 (1/s)",
        INPUT_EXPONENT => "지수 (m)",
        TIP_GAP => "두 표면 사이의 거리",
        TIP_SPEED => "표면 간 상대 속도",
        TIP_VISCOSITY => "유체 동점성계수 (물 기본값: 0.001 Pa·s)",
        TIP_FRICTION => "표면 마찰계수 (일반 범위: 1e6-1e8 Pa·s/m)",
        TIP_CRIT_SHEAR => "슬립 효과가 크게 증가하는 전단율",
        TIP_EXPONENT => "전단율에 따라 슬립이 증가하는 속도를 조절",
        RESULTS_HEADING => "계산 결과",
        RECOMMENDATION_HEADING => "추천",
        RESULT_GAP => "간극 (m)",
        RESULT_SPEED => "미끄럼 속도 (m/s)",
        RESULT_SHEAR_RATE => "전단율 (1/s)",
        RESULT_SHEAR_STRESS => "전단응력 (Pa)",
        RESULT_B0 => "기준 슬립 길이, b₀ (m)",
        RESULT_BEFF => "유효 슬립 길이, bₑff (m)",
        RESULT_RATIO => "슬립 길이 / 간극",
        REC_NO_SLIP => "무슬립(No-slip) 조건이 적절합니다",
        REC_SLIP => "슬립(Slip) 조건을 고려해야 합니다",
        CFD_NO_SLIP => "CFD 해석: 무슬립 경계조건을 사용하세요 (예: 벽면에서 u = 0).",
        CFD_SLIP => "CFD 해석: 슬립 길이 {b_eff} m 의 Navier 슬립 경계조건을 사용하세요.",
        CALC_ERROR => "계산 오류:",
        CRITERIA_HEADING => "판정 기준",
        METHODOLOGY_HEADING => "\n-- 계산 방법론 --",
        METHODOLOGY_HTML_WRITTEN => "HTML 문서를 생성했습니다:",
        EXPORT_HEADING => "\n-- 결과 내보내기 --",
        EXPORT_NO_RESULTS => "내보낼 결과가 없습니다.",
        EXPORT_PROMPT_PATH => "파일 경로",
        EXPORT_DONE => "결과를 저장했습니다:",
        EXPORT_ASCII_DONE => "단순 문자로 결과를 저장했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 간극 단위  3) 점도 단위  4) 내보내기 인코딩",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_LANGUAGE_OPTIONS => "1=자동 2=English 3=한국어",
        SETTINGS_GAP_UNIT_OPTIONS => "1=nm 2=µm 3=m",
        SETTINGS_VISCOSITY_UNIT_OPTIONS => "1=Pa·s 2=mPa·s 3=cP",
        SETTINGS_ENCODING_OPTIONS => "1=UTF-8 2=ASCII(단순 문자)",
        ABOUT_HEADING => "\n-- 프로그램 정보 --",
        ABOUT_VERSION => "버전",
        ABOUT_AUTHOR => "저작자",
        ABOUT_DESCRIPTION => "CFD 해석에서 슬립/무슬립 중 어떤 경계조건을 쓸지 판단하도록 돕는 도구입니다.",
        STATUS_READY => "준비",
        STATUS_LAST_CALC => "준비 - 마지막 계산:",
        STATUS_CALC_ERROR => "계산 중 오류가 발생했습니다",

        // GUI 전용
        "gui.subtitle" => "CFD 경계조건 선택을 위한 실용 도구",
        "gui.menu.file" => "파일",
        "gui.menu.export" => "결과 내보내기",
        "gui.menu.exit" => "종료",
        "gui.menu.help" => "도움말",
        "gui.menu.methodology" => "계산 방법론",
        "gui.menu.about" => "프로그램 정보",
        "gui.menu.settings" => "설정",
        "gui.calculate" => "계산",
        "gui.results" => "결과",
        "gui.results.placeholder" => "변수를 입력하고 '계산'을 누르면 결과가 표시됩니다.",
        "gui.error.title" => "오류",
        "gui.export.title" => "결과 내보내기",
        "gui.export.filter" => "텍스트 파일",
        "gui.export.failed" => "내보내기 오류:",
        "gui.export.retry_ascii" => "단순 문자로 다시 내보내기",
        "gui.methodology.title" => "계산 방법론",
        "gui.methodology.open_browser" => "브라우저에서 열기",
        "gui.about.license" => "MIT 라이선스",
        "gui.close" => "닫기",
        "gui.settings.title" => "프로그램 설정",
        "gui.settings.lang" => "언어",
        "gui.settings.lang.auto" => "시스템",
        "gui.settings.gap_unit" => "간극 기본 단위",
        "gui.settings.viscosity_unit" => "점도 기본 단위",
        "gui.settings.encoding" => "내보내기 인코딩",
        "gui.settings.save" => "설정 저장",
        "gui.settings.saved" => "저장되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Slip/No-Slip Estimator ===",
        MAIN_MENU_CALCULATE => "1) Calculate",
        MAIN_MENU_METHODOLOGY => "2) Methodology",
        MAIN_MENU_EXPORT => "3) Export results",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_ABOUT => "5) About",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Calculate --",
        CALC_HINT => "Press Enter to keep the value in brackets.",
        INPUT_PARAMETERS => "Input Parameters",
        INPUT_GAP => "Gap Height",
        INPUT_SPEED => "Sliding Speed (m/s)",
        INPUT_VISCOSITY => "Water Viscosity",
        INPUT_FRICTION => "Interfacial Friction (Pa·s/m)",
        INPUT_CRIT_SHEAR => "Critical Shear Rate (1/s)",
        INPUT_EXPONENT => "Exponent (m)",
        TIP_GAP => "Distance between surfaces",
        TIP_SPEED => "Relative velocity between surfaces",
        TIP_VISCOSITY => "Fluid dynamic viscosity (default for water: 0.001 Pa·s)",
        TIP_FRICTION => "Surface friction coefficient (typical range: 1e6-1e8 Pa·s/m)",
        TIP_CRIT_SHEAR => "Shear rate at which slip effects increase significantly",
        TIP_EXPONENT => "Controls how rapidly slip increases with shear rate",
        RESULTS_HEADING => "CALCULATION RESULTS",
        RECOMMENDATION_HEADING => "RECOMMENDATION",
        RESULT_GAP => "Gap (m)",
        RESULT_SPEED => "Sliding Speed (m/s)",
        RESULT_SHEAR_RATE => "Shear Rate (1/s)",
        RESULT_SHEAR_STRESS => "Shear Stress (Pa)",
        RESULT_B0 => "Baseline Slip Length, b₀ (m)",
        RESULT_BEFF => "Effective Slip Length, bₑff (m)",
        RESULT_RATIO => "Slip Length / Gap",
        REC_NO_SLIP => "No-slip condition is appropriate",
        REC_SLIP => "Slip condition should be considered",
        CFD_NO_SLIP => "For CFD simulation: Use a no-slip boundary condition (e.g., u = 0 at the wall).",
        CFD_SLIP => "For CFD simulation: Use a Navier slip boundary condition with a slip length of {b_eff} m.",
        CALC_ERROR => "Calculation error:",
        CRITERIA_HEADING => "Decision Criteria",
        METHODOLOGY_HEADING => "\n-- Methodology --",
        METHODOLOGY_HTML_WRITTEN => "HTML document written to:",
        EXPORT_HEADING => "\n-- Export Results --",
        EXPORT_NO_RESULTS => "No results to export.",
        EXPORT_PROMPT_PATH => "File path",
        EXPORT_DONE => "Results exported successfully to:",
        EXPORT_ASCII_DONE => "Results exported with simplified characters to:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Gap unit  3) Viscosity unit  4) Export encoding",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE_OPTIONS => "1=auto 2=English 3=한국어",
        SETTINGS_GAP_UNIT_OPTIONS => "1=nm 2=µm 3=m",
        SETTINGS_VISCOSITY_UNIT_OPTIONS => "1=Pa·s 2=mPa·s 3=cP",
        SETTINGS_ENCODING_OPTIONS => "1=UTF-8 2=ASCII (simplified characters)",
        ABOUT_HEADING => "\n-- About --",
        ABOUT_VERSION => "Version",
        ABOUT_AUTHOR => "Author",
        ABOUT_DESCRIPTION => crate::about::DESCRIPTION,
        STATUS_READY => "Ready",
        STATUS_LAST_CALC => "Ready - Last calculation:",
        STATUS_CALC_ERROR => "Error occurred during calculation",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gui_labels_are_only_built_in_for_korean() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.lookup("gui.menu.file"), None);
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.lookup("gui.menu.file").as_deref(), Some("파일"));
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[result]\nheading = \"RESULTS\"\n").unwrap();
        assert_eq!(map.get("result.heading").map(String::as_str), Some("RESULTS"));
    }

    #[test]
    fn template_placeholders_are_replaced() {
        let out = fill_template("slip {b_eff} m", &[("b_eff", "1.000e+00".into())]);
        assert_eq!(out, "slip 1.000e+00 m");
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en-us")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
    }
}
