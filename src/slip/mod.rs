//! 슬립/무슬립 경계조건 판정 모듈 모음.
//! 모델 계산, 폼 입력 파싱, 결과 서식화로 구성한다.

pub mod input;
pub mod model;
pub mod report;

pub use input::FormInputs;
pub use model::*;
pub use report::{format_sci, ResultReport};
