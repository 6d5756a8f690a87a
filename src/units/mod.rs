//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod viscosity;

pub use length::{convert_length, LengthUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
