use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::registry::{self, Category, ConversionRule, REGISTRY};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 카탈로그에 없는 카테고리 이름
    #[error("unknown category: {0}")]
    NotFound(String),
    /// 카테고리에 속하지 않는 단위 기호
    #[error("unknown unit `{unit}` for {category}")]
    UnknownUnit {
        category: &'static str,
        unit: String,
    },
    /// 숫자가 아니거나 유한하지 않은 입력값
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// 지정된 카테고리에서 값을 `from` 단위에서 `to` 단위로 환산한다.
///
/// 값을 먼저 검사한 뒤 `from`, `to` 순서로 단위를 검사한다. 결과는 반올림하지 않는다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    convert_in(REGISTRY.category(kind), value, from, to)
}

/// 카테고리 이름으로 찾아 변환한다. 이름이 없으면 [`ConversionError::NotFound`].
pub fn convert_by_name(
    category: &str,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let category = registry::get_category(category)?;
    convert_in(category, value, from, to)
}

/// 이미 찾아 둔 카테고리에 대해 변환한다.
pub fn convert_in(
    category: &Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value.to_string()));
    }
    for unit in [from, to] {
        if !category.is_valid_unit(unit) {
            return Err(unknown_unit(category, unit));
        }
    }

    match &category.rule {
        ConversionRule::LinearScale { .. } => {
            let from_factor = category
                .rule
                .factor(from)
                .ok_or_else(|| unknown_unit(category, from))?;
            let to_factor = category
                .rule
                .factor(to)
                .ok_or_else(|| unknown_unit(category, to))?;
            Ok(value * (from_factor / to_factor))
        }
        ConversionRule::PairwiseAffine { .. } => {
            if from == to {
                return Ok(value);
            }
            // 나열되지 않은 쌍은 조용히 원래 값을 돌려주지 않고 오류로 처리한다.
            category
                .rule
                .transform(from, to)
                .map(|t| t.apply(value))
                .ok_or_else(|| unknown_unit(category, to))
        }
    }
}

/// 사용자가 입력한 문자열을 유한한 숫자로 해석한다.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::InvalidValue(trimmed.to_string())),
    }
}

fn unknown_unit(category: &Category, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category: category.name,
        unit: unit.to_string(),
    }
}
