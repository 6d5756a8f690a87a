use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViscosityUnit {
    #[default]
    PascalSecond,
    MilliPascalSecond,
    Centipoise,
}

impl ViscosityUnit {
    pub const ALL: [ViscosityUnit; 3] = [
        ViscosityUnit::PascalSecond,
        ViscosityUnit::MilliPascalSecond,
        ViscosityUnit::Centipoise,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa·s",
            ViscosityUnit::MilliPascalSecond => "mPa·s",
            ViscosityUnit::Centipoise => "cP",
        }
    }
}

fn to_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => value / 1000.0,
    }
}

fn from_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => value * 1000.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_pas(value, from);
    from_pas(base, to)
}
