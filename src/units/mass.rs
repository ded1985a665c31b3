//! 질량 단위 표. 내부 기준은 kg이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("mg", 1e-6),
    ("g", 0.001),
    ("kg", 1.0),
    ("t", 1000.0),
    ("oz", 0.0283495),
    ("lb", 0.453592),
    ("carat", 0.0002),
    ("quintal", 100.0),
];
