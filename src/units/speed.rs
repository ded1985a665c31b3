//! 속도 단위 표. 내부 기준은 m/s이다.

pub const FACTORS: &[(&str, f64)] = &[
    ("m/s", 1.0),
    ("km/h", 0.277778),
    ("mph", 0.44704),
    ("knot", 0.514444),
    ("ft/s", 0.3048),
    // 진공 중 광속
    ("c", 299_792_458.0),
];
