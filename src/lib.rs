//! 카테고리별 단위 변환 엔진. 카탈로그와 변환 로직은 라이브러리로 두고 CLI는 얇은 껍데기로 둔다.

pub mod app;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod logging;
pub mod quantity;
pub mod registry;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert, convert_by_name, convert_in, parse_value, ConversionError};
pub use quantity::QuantityKind;
pub use registry::{get_category, is_valid_unit, list_categories, Category, ConversionRule};
