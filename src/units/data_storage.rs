//! 데이터 용량 단위 표. 내부 기준은 bit이며 접두어는 1024 배수(이진)이다.

const BYTE: f64 = 8.0;
const KIB: f64 = 1024.0;

pub const FACTORS: &[(&str, f64)] = &[
    ("bit", 1.0),
    ("byte", BYTE),
    ("KB", BYTE * KIB),
    ("MB", BYTE * KIB * KIB),
    ("GB", BYTE * KIB * KIB * KIB),
    ("TB", BYTE * KIB * KIB * KIB * KIB),
];
