//! 온도 단위 및 단위 쌍별 변환식.
//!
//! 섭씨/화씨/켈빈은 0점이 서로 달라 하나의 기준 단위에 대한 배율만으로는
//! 표현할 수 없으므로, 방향이 있는 모든 단위 쌍의 변환식을 직접 나열한다.

use crate::registry::AffineTransform;

/// 표시 순서를 유지한 온도 단위 기호.
pub const SYMBOLS: &[&str] = &["°C", "°F", "K"];

/// (from, to, 변환식) 목록. 같은 단위끼리의 항등 변환은 포함하지 않는다.
pub const TRANSFORMS: &[(&str, &str, AffineTransform)] = &[
    // v * 9/5 + 32
    ("°C", "°F", AffineTransform::new(0.0, 9.0, 5.0, 32.0)),
    // (v - 32) * 5/9
    ("°F", "°C", AffineTransform::new(-32.0, 5.0, 9.0, 0.0)),
    ("°C", "K", AffineTransform::new(0.0, 1.0, 1.0, 273.15)),
    ("K", "°C", AffineTransform::new(-273.15, 1.0, 1.0, 0.0)),
    // (v - 32) * 5/9 + 273.15
    ("°F", "K", AffineTransform::new(-32.0, 5.0, 9.0, 273.15)),
    // (v - 273.15) * 9/5 + 32
    ("K", "°F", AffineTransform::new(-273.15, 9.0, 5.0, 32.0)),
];
