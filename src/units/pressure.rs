//! 압력 단위 표. 내부 기준은 Pa(절대압)이며 게이지/절대 구분은 하지 않는다.

pub const FACTORS: &[(&str, f64)] = &[
    ("Pa", 1.0),
    ("kPa", 1000.0),
    ("MPa", 1e6),
    ("bar", 1e5),
    ("atm", 101_325.0),
    ("mmHg", 133.322),
    ("psi", 6894.76),
    ("Torr", 133.322),
];
