use serde::{Deserialize, Serialize};

/// 간극 높이 입력 단위. 모델 입력 기준은 나노미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LengthUnit {
    #[default]
    Nanometer,
    Micrometer,
    Meter,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 3] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Meter,
    ];

    /// 화면/내보내기에 쓰는 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Meter => "m",
        }
    }
}

fn to_nanometer(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Nanometer => value,
        LengthUnit::Micrometer => value * 1000.0,
        LengthUnit::Meter => value * 1e9,
    }
}

fn from_nanometer(value_nm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Nanometer => value_nm,
        LengthUnit::Micrometer => value_nm / 1000.0,
        LengthUnit::Meter => value_nm / 1e9,
    }
}

/// 길이를 다른 단위로 변환한다. 같은 단위면 값을 그대로 돌려준다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let nm = to_nanometer(value, from);
    from_nanometer(nm, to)
}
