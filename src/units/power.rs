//! 일률 단위 표. 내부 기준은 W이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("W", 1.0),
    ("kW", 1000.0),
    ("MW", 1e6),
    ("GW", 1e9),
    ("cal/s", 4.184),
    ("BTU/h", 0.293071),
];
