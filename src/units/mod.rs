//! 카테고리별 단위 정의 모음.
//!
//! 선형 카테고리는 `FACTORS`(기호, 기준 단위 환산 배율) 표를, 온도는 단위 쌍별
//! 변환식 표를 제공한다. 표는 모두 상수이며 [`crate::registry`]가 한 번만 읽어
//! 카탈로그를 구성한다.

pub mod area;
pub mod data_storage;
pub mod energy;
pub mod force;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
