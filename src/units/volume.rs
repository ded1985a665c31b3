//! 체적 단위 표. 내부 기준은 m³이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("m³", 1.0),
    ("cm³", 1e-6),
    ("mm³", 1e-9),
    ("L", 0.001),
    ("mL", 1e-6),
    ("dm³", 0.001),
    ("ft³", 0.0283168),
    ("in³", 1.6387e-5),
    ("yd³", 0.764555),
    // 미국 갤런/컵/테이블스푼
    ("gal", 0.00378541),
    ("cup", 0.000236588),
    ("tbsp", 1.4787e-5),
];
