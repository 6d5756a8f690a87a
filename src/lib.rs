//! 슬립 길이 모델을 라이브러리로 분리하여 CLI와 GUI가 같은 계산을 쓰도록 한다.

pub mod about;
pub mod app;
pub mod config;
pub mod export;
pub mod i18n;
pub mod methodology;
pub mod slip;
pub mod ui_cli;
pub mod units;
