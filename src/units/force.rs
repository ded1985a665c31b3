//! 힘 단위 표. 내부 기준은 N이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("N", 1.0),
    ("kN", 1000.0),
    ("dyne", 1e-5),
    ("kgf", 9.80665),
];
