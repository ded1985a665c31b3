//! 길이 단위 표. 내부 기준은 미터이다.

/// 표시 순서를 유지한 (기호, 1 단위당 미터) 목록.
pub const FACTORS: &[(&str, f64)] = &[
    ("m", 1.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("µm", 1e-6),
    ("nm", 1e-9),
    ("pm", 1e-12),
    ("fm", 1e-15),
    ("dm", 0.1),
    ("dam", 10.0),
    ("hm", 100.0),
    ("km", 1000.0),
    ("Mm", 1e6),
    ("Gm", 1e9),
    ("Tm", 1e12),
    ("Pm", 1e15),
    ("light year", 9.461e15),
    ("ft", 0.3048),
    ("in", 0.0254),
];
