//! 에너지 단위 표. 내부 기준은 J이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("J", 1.0),
    ("kJ", 1000.0),
    ("cal", 4.184),
    ("kcal", 4184.0),
    ("Wh", 3600.0),
    ("kWh", 3.6e6),
    ("erg", 1e-7),
    ("BTU", 1055.06),
    ("eV", 1.602e-19),
];
