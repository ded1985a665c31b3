//! 시간 단위 표. 내부 기준은 초이며 1년은 365일로 계산한다.

pub const FACTORS: &[(&str, f64)] = &[
    ("ns", 1e-9),
    ("µs", 1e-6),
    ("ms", 1e-3),
    ("s", 1.0),
    ("min", 60.0),
    ("h", 3600.0),
    ("day", 86_400.0),
    ("year", 31_536_000.0),
];
