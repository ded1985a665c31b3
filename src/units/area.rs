//! 면적 단위 표. 내부 기준은 m²이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("m²", 1.0),
    ("cm²", 1e-4),
    ("mm²", 1e-6),
    ("km²", 1e6),
    ("ha", 10_000.0),
    ("acre", 4046.86),
    ("ft²", 0.092903),
    ("in²", 0.00064516),
    ("yd²", 0.836127),
];
