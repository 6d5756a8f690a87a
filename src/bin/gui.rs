#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use slip_estimator::{
    about, config,
    export::{self, ExportDocument, ExportEncoding, ExportError},
    i18n::{self, keys},
    methodology,
    slip::{report::recommendation_rgb, FormInputs, ResultReport, SlipResult},
    units::{LengthUnit, ViscosityUnit},
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x19, 0x76, 0xd2);
const PRIMARY_DARK: egui::Color32 = egui::Color32::from_rgb(0x0d, 0x47, 0xa1);
const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(0x75, 0x75, 0x75);

#[derive(Debug, Parser)]
#[command(name = "slip_estimator", version, about)]
struct Cli {
    /// 표시 언어 (auto/en-us/ko-kr)
    #[arg(short = 'L', long)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cli = Cli::parse();

    let icon = load_app_icon().unwrap_or_else(generated_icon);
    let viewport = egui::ViewportBuilder::default()
        .with_title(format!("{} v{}", about::APP_NAME, about::VERSION))
        .with_inner_size([900.0, 750.0])
        .with_min_inner_size([800.0, 650.0])
        .with_icon(icon);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app_cfg = config::load_or_default(&cli.config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "설정을 읽지 못해 기본값 사용");
        config::Config::default()
    });
    let config_path = cli.config;
    let lang_override = cli.lang;
    eframe::run_native(
        about::APP_NAME,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg, config_path, lang_override))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 아이콘 파일이 없을 때 쓰는 파란 원 아이콘.
fn generated_icon() -> egui::IconData {
    const SIZE: u32 = 64;
    let center = (SIZE as f32 - 1.0) / 2.0;
    let radius = SIZE as f32 * 0.46;
    let img = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let d = ((x as f32 - center).powi(2) + (y as f32 - center).powi(2)).sqrt();
        if d <= radius {
            image::Rgba([PRIMARY.r(), PRIMARY.g(), PRIMARY.b(), 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    egui::IconData {
        rgba: img.into_raw(),
        width: SIZE,
        height: SIZE,
    }
}

/// 한글 표시용 폰트를 기본 폰트 뒤에 대체 폰트로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 1) assets/fonts 2) Windows 시스템 폰트 3) 리눅스/맥 CJK 폰트 순으로 찾는다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
        PathBuf::from("assets/fonts/malgun.ttf"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            tracing::debug!(path = %p.display(), "font loaded");
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to default fonts.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn unit_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    options: &[T],
    symbol: fn(T) -> &'static str,
) {
    egui::ComboBox::from_id_source(id)
        .selected_text(symbol(*value))
        .width(72.0)
        .show_ui(ui, |ui| {
            for &o in options {
                ui.selectable_value(value, o, symbol(o));
            }
        });
}

fn draw_logo(ui: &mut egui::Ui, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size * 0.45, PRIMARY);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "S/NS",
        egui::FontId::proportional(size * 0.24),
        egui::Color32::WHITE,
    );
}

fn rec_color(result: &SlipResult) -> egui::Color32 {
    let [r, g, b] = recommendation_rgb(result.recommendation);
    egui::Color32::from_rgb(r, g, b)
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    year: i32,
    form: FormInputs,
    // 마지막으로 성공한 계산과 그때의 입력 원문
    result: Option<(FormInputs, SlipResult)>,
    status: String,
    error_message: Option<String>,
    info_message: Option<String>,
    // ASCII 재시도 대상 경로
    export_retry_path: Option<PathBuf>,
    show_about: bool,
    show_methodology: bool,
    show_settings: bool,
    // --lang 플래그. 설정 파일에는 저장하지 않는다.
    lang_override: Option<String>,
    lang_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf, lang_override: Option<String>) -> Self {
        let lang_code = i18n::resolve_language(
            lang_override.as_deref().unwrap_or("auto"),
            Some(config.language.as_str()),
        );
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(%lang_code, "GUI language resolved");
        let form = FormInputs::from_defaults(&config.defaults, &config.default_units);
        Self {
            lang_override,
            lang_input: config.language.clone(),
            status: tr.t(keys::STATUS_READY),
            config,
            config_path,
            tr,
            year: about::current_year(),
            form,
            result: None,
            error_message: None,
            info_message: None,
            export_retry_path: None,
            show_about: false,
            show_methodology: false,
            show_settings: false,
            settings_status: None,
        }
    }

    /// 현재 폼으로 계산한다. 실패하면 이전 결과를 그대로 두고 오류만 띄운다.
    fn calculate(&mut self) {
        match self.form.evaluate() {
            Ok(result) => {
                self.result = Some((self.form.clone(), result));
                self.status = format!(
                    "{} {}",
                    self.tr.t(keys::STATUS_LAST_CALC),
                    chrono::Local::now().format("%H:%M:%S")
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "계산 입력 오류");
                self.error_message = Some(format!("{} {e}", self.tr.t(keys::CALC_ERROR)));
                self.status = self.tr.t(keys::STATUS_CALC_ERROR);
            }
        }
    }

    fn report(&self) -> Option<ResultReport> {
        self.result
            .as_ref()
            .map(|(_, r)| ResultReport::new(r, &self.tr))
    }

    fn export_document(&self) -> Result<ExportDocument, ExportError> {
        let (form, result) = match &self.result {
            Some((form, result)) => (form, Some(result)),
            None => (&self.form, None),
        };
        ExportDocument::from_result(form, result, chrono::Local::now())
    }

    fn export_to(&mut self, path: PathBuf, encoding: ExportEncoding) {
        let outcome = self
            .export_document()
            .and_then(|doc| export::write_export(&path, &doc, encoding));
        match outcome {
            Ok(()) => {
                let key = match encoding {
                    ExportEncoding::Utf8 => keys::EXPORT_DONE,
                    ExportEncoding::Ascii => keys::EXPORT_ASCII_DONE,
                };
                self.info_message = Some(format!("{}\n{}", self.tr.t(key), path.display()));
                self.export_retry_path = None;
            }
            Err(ExportError::NoResults) => {
                self.info_message = Some(self.tr.t(keys::EXPORT_NO_RESULTS));
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "내보내기 실패");
                let prefix = self
                    .tr
                    .lookup("gui.export.failed")
                    .unwrap_or_else(|| "Error exporting results:".into());
                self.error_message = Some(format!("{prefix} {e}"));
                if encoding == ExportEncoding::Utf8 {
                    self.export_retry_path = Some(path);
                }
            }
        }
    }

    fn start_export(&mut self) {
        if self.result.is_none() {
            self.info_message = Some(self.tr.t(keys::EXPORT_NO_RESULTS));
            return;
        }
        let title = self
            .tr
            .lookup("gui.export.title")
            .unwrap_or_else(|| "Export Results".into());
        let filter = self
            .tr
            .lookup("gui.export.filter")
            .unwrap_or_else(|| "Text files".into());
        let picked = FileDialog::new()
            .set_title(title)
            .add_filter(filter, &["txt"])
            .set_file_name(export::DEFAULT_FILE_NAME)
            .save_file();
        if let Some(path) = picked {
            self.export_to(path, self.config.export.encoding);
        }
    }

    fn open_methodology_in_browser(&mut self, ctx: &egui::Context) {
        match methodology::write_methodology_html(self.year) {
            Ok(path) => {
                ctx.open_url(egui::OpenUrl::new_tab(format!("file://{}", path.display())));
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// 설정 창에서 고른 언어가 --lang 플래그보다 우선한다.
    fn apply_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.lang_override = None;
        self.form.gap_unit = self.config.default_units.gap;
        self.form.viscosity_unit = self.config.default_units.viscosity;
        let resolved = i18n::resolve_language(&self.config.language, None);
        let pack_dir = self.config.language_pack_dir.as_deref();
        self.tr = i18n::Translator::new_with_pack(&resolved, pack_dir);
        self.settings_status = Some(match self.config.save(&self.config_path) {
            Ok(()) => self
                .tr
                .lookup("gui.settings.saved")
                .unwrap_or_else(|| "Saved.".into()),
            Err(e) => format!("Save error: {e}"),
        });
    }

    fn ui_header(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.horizontal(|ui| {
            draw_logo(ui, 64.0);
            ui.add_space(10.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(about::APP_NAME).size(22.0).strong());
                ui.label(
                    egui::RichText::new(txt("gui.subtitle", about::SUBTITLE))
                        .italics()
                        .color(TEXT_SECONDARY),
                );
            });
        });
    }

    /// 입력 폼. 엔터 또는 계산 버튼으로 계산한다.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let mut submit = false;
        ui.heading(tr.t(keys::INPUT_PARAMETERS));
        ui.add_space(6.0);
        egui::Grid::new("input_grid")
            .num_columns(3)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                let mut field = |ui: &mut egui::Ui, label: &str, tip: &str, value: &mut String| {
                    label_with_tip(ui, label, tip);
                    let resp = ui
                        .add(egui::TextEdit::singleline(value).desired_width(140.0))
                        .on_hover_text(tip);
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                };
                let tip = tr.t(keys::TIP_GAP);
                field(ui, &tr.t(keys::INPUT_GAP), &tip, &mut self.form.gap_height);
                unit_combo(
                    ui,
                    "gap_unit",
                    &mut self.form.gap_unit,
                    &LengthUnit::ALL,
                    LengthUnit::symbol,
                );
                ui.end_row();

                let tip = tr.t(keys::TIP_SPEED);
                field(ui, &tr.t(keys::INPUT_SPEED), &tip, &mut self.form.sliding_speed);
                ui.end_row();

                let tip = tr.t(keys::TIP_VISCOSITY);
                field(ui, &tr.t(keys::INPUT_VISCOSITY), &tip, &mut self.form.viscosity);
                unit_combo(
                    ui,
                    "viscosity_unit",
                    &mut self.form.viscosity_unit,
                    &ViscosityUnit::ALL,
                    ViscosityUnit::symbol,
                );
                ui.end_row();

                let tip = tr.t(keys::TIP_FRICTION);
                field(
                    ui,
                    &tr.t(keys::INPUT_FRICTION),
                    &tip,
                    &mut self.form.friction_coefficient,
                );
                ui.end_row();

                let tip = tr.t(keys::TIP_CRIT_SHEAR);
                field(
                    ui,
                    &tr.t(keys::INPUT_CRIT_SHEAR),
                    &tip,
                    &mut self.form.critical_shear_rate,
                );
                ui.end_row();

                let tip = tr.t(keys::TIP_EXPONENT);
                field(ui, &tr.t(keys::INPUT_EXPONENT), &tip, &mut self.form.exponent);
                ui.end_row();
            });

        ui.add_space(14.0);
        ui.heading(tr.t(keys::CRITERIA_HEADING));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(methodology::criteria_summary());
        });

        ui.add_space(14.0);
        let calc_label = tr.lookup("gui.calculate").unwrap_or_else(|| "Calculate".into());
        let button = egui::Button::new(egui::RichText::new(calc_label).size(16.0).strong());
        if ui.add_sized([ui.available_width(), 38.0], button).clicked() {
            submit = true;
        }
        if submit {
            self.calculate();
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.results", "Results"));
        ui.add_space(6.0);
        let (Some((_, result)), Some(report)) = (&self.result, self.report()) else {
            ui.label(
                egui::RichText::new(txt(
                    "gui.results.placeholder",
                    "Enter parameters and click 'Calculate' to see results.",
                ))
                .color(TEXT_SECONDARY),
            );
            return;
        };
        let color = rec_color(result);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&report.headline).size(20.0).strong().color(color));
        });
        ui.separator();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&report.results_heading)
                        .size(16.0)
                        .strong()
                        .color(PRIMARY),
                );
                egui::Grid::new("result_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        for row in &report.rows {
                            ui.label(egui::RichText::new(&row.label).strong().color(PRIMARY_DARK));
                            ui.monospace(&row.value);
                            ui.end_row();
                        }
                    });
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(&report.recommendation_heading)
                        .size(16.0)
                        .strong()
                        .color(PRIMARY),
                );
                ui.label(egui::RichText::new(&report.headline).size(15.0).strong().color(color));
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(&report.cfd_suggestion)
                        .italics()
                        .color(TEXT_SECONDARY),
                );
            });
    }

    fn ui_windows(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        if let Some(msg) = self.error_message.clone() {
            let mut open = true;
            let mut retry = false;
            egui::Window::new(txt("gui.error.title", "Error"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.colored_label(ui.visuals().error_fg_color, &msg);
                    let retry_label =
                        txt("gui.export.retry_ascii", "Export with simplified characters");
                    if self.export_retry_path.is_some() && ui.button(retry_label).clicked() {
                        retry = true;
                    }
                });
            if retry {
                self.error_message = None;
                if let Some(path) = self.export_retry_path.take() {
                    self.export_to(path, ExportEncoding::Ascii);
                }
            } else if !open {
                self.error_message = None;
                self.export_retry_path = None;
            }
        }

        if let Some(msg) = self.info_message.clone() {
            let mut open = true;
            egui::Window::new(txt("gui.export.title", "Export Results"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(&msg);
                });
            if !open {
                self.info_message = None;
            }
        }

        if self.show_about {
            let year = self.year;
            egui::Window::new(format!("{} {}", txt("gui.menu.about", "About"), about::APP_NAME))
                .collapsible(false)
                .resizable(false)
                .default_width(560.0)
                .open(&mut self.show_about)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(about::APP_NAME).size(18.0).strong());
                        draw_logo(ui, 90.0);
                        ui.label(format!(
                            "{} {}\n{}: {}\nEmail: {}",
                            tr.t(keys::ABOUT_VERSION),
                            about::VERSION,
                            tr.t(keys::ABOUT_AUTHOR),
                            about::AUTHOR,
                            about::EMAIL
                        ));
                        ui.add_space(8.0);
                        ui.label(tr.t(keys::ABOUT_DESCRIPTION));
                    });
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(txt("gui.about.license", "MIT License")).strong());
                    egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                        ui.monospace(about::license_text(year));
                    });
                });
        }

        let mut open_browser = false;
        if self.show_methodology {
            egui::Window::new(txt("gui.methodology.title", "Methodology"))
                .collapsible(true)
                .resizable(true)
                .default_width(620.0)
                .open(&mut self.show_methodology)
                .show(ctx, |ui| {
                    ui.label(methodology::methodology_text());
                    ui.separator();
                    if ui
                        .button(txt("gui.methodology.open_browser", "Open in browser"))
                        .clicked()
                    {
                        open_browser = true;
                    }
                });
        }
        if open_browser {
            self.open_methodology_in_browser(ctx);
        }

        if self.show_settings {
            let mut open = true;
            let mut save = false;
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            let auto_label = txt("gui.settings.lang.auto", "System");
                            for (code, label) in [
                                ("auto", auto_label.as_str()),
                                ("en-us", "English (US)"),
                                ("ko-kr", "한국어"),
                            ] {
                                ui.selectable_value(&mut self.lang_input, code.to_string(), label);
                            }
                        });
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.settings.gap_unit", "Default gap unit"));
                        unit_combo(
                            ui,
                            "cfg_gap_unit",
                            &mut self.config.default_units.gap,
                            &LengthUnit::ALL,
                            LengthUnit::symbol,
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.settings.viscosity_unit", "Default viscosity unit"));
                        unit_combo(
                            ui,
                            "cfg_viscosity_unit",
                            &mut self.config.default_units.viscosity,
                            &ViscosityUnit::ALL,
                            ViscosityUnit::symbol,
                        );
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.encoding", "Export encoding"));
                    ui.horizontal(|ui| {
                        let encoding = &mut self.config.export.encoding;
                        ui.selectable_value(encoding, ExportEncoding::Utf8, "UTF-8");
                        ui.selectable_value(encoding, ExportEncoding::Ascii, "ASCII");
                    });
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        save = true;
                    }
                    if let Some(msg) = &self.settings_status {
                        ui.label(msg);
                    }
                });
            if save {
                self.apply_settings();
            }
            if !open {
                self.show_settings = false;
                self.settings_status = None;
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 메뉴 바
        let mut do_export = false;
        let mut do_methodology = false;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(txt("gui.menu.file", "File"), |ui| {
                    if ui.button(txt("gui.menu.export", "Export Results")).clicked() {
                        do_export = true;
                        ui.close_menu();
                    }
                    if ui.button(txt("gui.menu.settings", "Settings")).clicked() {
                        self.show_settings = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(txt("gui.menu.exit", "Exit")).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button(txt("gui.menu.help", "Help"), |ui| {
                    if ui.button(txt("gui.menu.methodology", "Methodology")).clicked() {
                        do_methodology = true;
                        ui.close_menu();
                    }
                    if ui.button(txt("gui.menu.about", "About")).clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
        if do_export {
            self.start_export();
        }
        if do_methodology {
            self.show_methodology = true;
            self.open_methodology_in_browser(ctx);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            self.ui_header(ui);
            ui.add_space(8.0);
        });

        // 상태 표시줄
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(
                        egui::RichText::new(about::footer_line(self.year)).color(TEXT_SECONDARY),
                    );
                });
            });
        });

        // 입력 40%, 결과 60%
        let input_width = ctx.screen_rect().width() * 0.4;
        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(input_width)
            .min_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    self.ui_inputs(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_results(ui);
        });

        self.ui_windows(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slip_estimator::slip::Recommendation;

    fn app() -> GuiApp {
        GuiApp::new(
            config::Config::default(),
            PathBuf::from("unused-config.toml"),
            None,
        )
    }

    #[test]
    fn default_form_recommends_no_slip() {
        let mut app = app();
        app.calculate();
        let (_, result) = app.result.as_ref().expect("result");
        assert_eq!(result.recommendation, Recommendation::NoSlip);
        assert!(app.status.starts_with(&app.tr.t(keys::STATUS_LAST_CALC)));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn invalid_input_keeps_previous_result() {
        let mut app = app();
        app.calculate();
        let before = app.result.clone();
        app.form.friction_coefficient = "abc".into();
        app.calculate();
        assert_eq!(app.result, before);
        assert!(app.error_message.is_some());
        assert_eq!(app.status, app.tr.t(keys::STATUS_CALC_ERROR));
    }

    #[test]
    fn export_uses_inputs_from_last_calculation() {
        let mut app = app();
        app.form.sliding_speed = "1e5".into();
        app.calculate();
        app.form.sliding_speed = "7".into();
        let doc = app.export_document().expect("doc");
        assert!(doc.as_str().contains("Sliding Speed: 1e5 m/s"));
    }

    #[test]
    fn export_without_result_reports_no_results() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        app.export_to(dir.path().join("out.txt"), ExportEncoding::Utf8);
        assert_eq!(app.info_message, Some(app.tr.t(keys::EXPORT_NO_RESULTS)));
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn ascii_export_writes_only_ascii() {
        let mut app = app();
        app.calculate();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        app.export_to(path.clone(), ExportEncoding::Ascii);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.is_ascii());
        assert!(written.contains("Pa.s/m"));
    }

    #[test]
    fn korean_screen_still_exports_english_labels() {
        let mut app = GuiApp::new(
            config::Config::default(),
            PathBuf::from("unused-config.toml"),
            Some("ko-kr".into()),
        );
        assert_eq!(app.tr.language_code(), "ko");
        app.calculate();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        app.export_to(path.clone(), ExportEncoding::Ascii);
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains('?'), "{written}");
        assert!(written.contains("Shear Rate (1/s): 1.000e+07"));
        assert!(written.contains("RECOMMENDATION"));
    }

    #[test]
    fn lang_flag_is_not_written_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let mut app = GuiApp::new(config::Config::default(), cfg_path.clone(), Some("ko".into()));
        assert_eq!(app.tr.language_code(), "ko");
        app.config.export.encoding = ExportEncoding::Ascii;
        app.apply_settings();
        let saved = config::load_or_default(&cfg_path).unwrap();
        assert_eq!(saved.language, "auto");
        assert_eq!(saved.export.encoding, ExportEncoding::Ascii);
        assert!(app.lang_override.is_none());
    }
}
