//! 프로그램 정보(이름, 버전, 저작자, 라이선스).

use chrono::Datelike;

pub const APP_NAME: &str = "Slip/No-Slip Estimator";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "Le Lu";
pub const EMAIL: &str = "lulelaboratory@gmail.com";
pub const DESCRIPTION: &str = "Slip/No-Slip Estimator is a practical tool to help users decide what boundary condition, slip or no-slip, should be used for CFD simulations.";
pub const SUBTITLE: &str = "A practical tool for CFD boundary condition selection";

/// 로컬 시간 기준 올해.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// MIT 라이선스 전문.
pub fn license_text(year: i32) -> String {
    format!(
        "MIT License

Copyright (c) {year} {AUTHOR} ({EMAIL})

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
    )
}

/// 상태 표시줄 오른쪽에 붙는 한 줄 정보.
pub fn footer_line(year: i32) -> String {
    format!("v{VERSION} | © {year} {AUTHOR} | MIT License")
}
