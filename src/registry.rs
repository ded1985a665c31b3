//! 카테고리 카탈로그.
//!
//! 모든 카테고리와 변환 규칙은 프로세스 시작 후 처음 접근할 때 한 번만 만들어지며
//! 이후에는 읽기 전용으로 공유된다. 규칙은 실행 코드가 아니라 데이터(배율 표,
//! 단위 쌍별 변환식)로만 표현하므로 그대로 직렬화할 수 있다.

use serde::Serialize;
use std::sync::LazyLock;

use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;
use crate::units::{
    area, data_storage, energy, force, length, mass, power, pressure, speed, temperature, time,
    volume,
};

/// 전역 카탈로그.
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// `(value + offset_in) * numerator / denominator + offset_out` 형태의 변환식.
///
/// 연산 순서는 `(v - 32) * 5 / 9` 같은 정의식과 같다. 따라서 32 °F는 정확히 0 °C가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffineTransform {
    pub offset_in: f64,
    pub numerator: f64,
    pub denominator: f64,
    pub offset_out: f64,
}

impl AffineTransform {
    pub const fn new(offset_in: f64, numerator: f64, denominator: f64, offset_out: f64) -> Self {
        Self {
            offset_in,
            numerator,
            denominator,
            offset_out,
        }
    }

    /// 변환식을 값에 적용한다.
    pub fn apply(&self, value: f64) -> f64 {
        (value + self.offset_in) * self.numerator / self.denominator + self.offset_out
    }
}

/// 1 단위가 기준 단위 몇 개에 해당하는지.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitFactor {
    pub unit: &'static str,
    pub factor: f64,
}

/// 방향이 있는 단위 쌍의 변환식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairTransform {
    pub from: &'static str,
    pub to: &'static str,
    pub transform: AffineTransform,
}

/// 카테고리의 변환 규칙.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionRule {
    /// `value * factor[from] / factor[to]`
    LinearScale { factors: Vec<UnitFactor> },
    /// 나열된 단위 쌍만 변환 가능하며 같은 단위끼리는 항등 변환이다.
    PairwiseAffine { transforms: Vec<PairTransform> },
}

impl ConversionRule {
    /// 선형 규칙에서 단위의 배율을 찾는다. 쌍별 규칙이면 항상 `None`.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        match self {
            ConversionRule::LinearScale { factors } => factors
                .iter()
                .find(|f| f.unit == unit)
                .map(|f| f.factor),
            ConversionRule::PairwiseAffine { .. } => None,
        }
    }

    /// 쌍별 규칙에서 (from, to) 변환식을 찾는다. 선형 규칙이면 항상 `None`.
    pub fn transform(&self, from: &str, to: &str) -> Option<AffineTransform> {
        match self {
            ConversionRule::PairwiseAffine { transforms } => transforms
                .iter()
                .find(|t| t.from == from && t.to == to)
                .map(|t| t.transform),
            ConversionRule::LinearScale { .. } => None,
        }
    }
}

/// 서로 변환 가능한 단위들의 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    #[serde(skip)]
    pub kind: QuantityKind,
    pub name: &'static str,
    /// 표시 순서대로의 단위 기호. 앞의 두 개가 기본 from/to 선택값이다.
    pub units: Vec<&'static str>,
    pub rule: ConversionRule,
}

impl Category {
    fn linear(kind: QuantityKind, table: &'static [(&'static str, f64)]) -> Self {
        Self {
            kind,
            name: kind.name(),
            units: table.iter().map(|(unit, _)| *unit).collect(),
            rule: ConversionRule::LinearScale {
                factors: table
                    .iter()
                    .map(|&(unit, factor)| UnitFactor { unit, factor })
                    .collect(),
            },
        }
    }

    fn pairwise(
        kind: QuantityKind,
        symbols: &'static [&'static str],
        table: &'static [(&'static str, &'static str, AffineTransform)],
    ) -> Self {
        Self {
            kind,
            name: kind.name(),
            units: symbols.to_vec(),
            rule: ConversionRule::PairwiseAffine {
                transforms: table
                    .iter()
                    .map(|&(from, to, transform)| PairTransform {
                        from,
                        to,
                        transform,
                    })
                    .collect(),
            },
        }
    }

    /// 기호가 이 카테고리의 단위 목록에 있는지 확인한다.
    pub fn is_valid_unit(&self, symbol: &str) -> bool {
        self.units.iter().any(|u| *u == symbol)
    }

    /// 화면 초기값으로 쓰는 (from, to) 단위. 단위가 두 개 미만이면 `None`.
    pub fn default_units(&self) -> Option<(&'static str, &'static str)> {
        match self.units.as_slice() {
            [from, to, ..] => Some((*from, *to)),
            _ => None,
        }
    }
}

/// 고정된 카테고리 목록을 보관한다.
#[derive(Debug, Serialize)]
pub struct UnitRegistry {
    categories: Vec<Category>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self {
            categories: QuantityKind::ALL.into_iter().map(build_category).collect(),
        }
    }

    /// 표시 순서대로 모든 카테고리를 반환한다.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// 종류로 카테고리를 찾는다.
    pub fn category(&self, kind: QuantityKind) -> &Category {
        // categories는 QuantityKind::ALL 순서로 만들어진다.
        &self.categories[kind as usize]
    }

    /// 이름으로 카테고리를 찾는다. 이름은 정확히 일치해야 한다 (`Data Storage`).
    pub fn get_category(&self, name: &str) -> Result<&Category, ConversionError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ConversionError::NotFound(name.to_string()))
    }

    /// 사용자 입력용 조회. 대소문자, 공백, `_`, `-`를 무시하고 이름을 비교한다.
    pub fn find_category(&self, name: &str) -> Result<&Category, ConversionError> {
        name.parse::<QuantityKind>()
            .map(|kind| self.category(kind))
            .map_err(|_| ConversionError::NotFound(name.to_string()))
    }

    pub fn is_valid_unit(&self, kind: QuantityKind, symbol: &str) -> bool {
        self.category(kind).is_valid_unit(symbol)
    }

    /// 주어진 기호를 단위로 가진 카테고리들.
    pub fn categories_with_unit(&self, symbol: &str) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.is_valid_unit(symbol))
            .collect()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn build_category(kind: QuantityKind) -> Category {
    match kind {
        QuantityKind::Length => Category::linear(kind, length::FACTORS),
        QuantityKind::Area => Category::linear(kind, area::FACTORS),
        QuantityKind::Volume => Category::linear(kind, volume::FACTORS),
        QuantityKind::Mass => Category::linear(kind, mass::FACTORS),
        QuantityKind::Time => Category::linear(kind, time::FACTORS),
        QuantityKind::Temperature => {
            Category::pairwise(kind, temperature::SYMBOLS, temperature::TRANSFORMS)
        }
        QuantityKind::Speed => Category::linear(kind, speed::FACTORS),
        QuantityKind::Energy => Category::linear(kind, energy::FACTORS),
        QuantityKind::Power => Category::linear(kind, power::FACTORS),
        QuantityKind::Pressure => Category::linear(kind, pressure::FACTORS),
        QuantityKind::Force => Category::linear(kind, force::FACTORS),
        QuantityKind::DataStorage => Category::linear(kind, data_storage::FACTORS),
    }
}

/// 전역 카탈로그의 카테고리 목록.
pub fn list_categories() -> &'static [Category] {
    REGISTRY.list_categories()
}

/// 전역 카탈로그에서 이름으로 카테고리를 찾는다.
pub fn get_category(name: &str) -> Result<&'static Category, ConversionError> {
    REGISTRY.get_category(name)
}

/// 전역 카탈로그 기준으로 단위 유효성을 확인한다.
pub fn is_valid_unit(kind: QuantityKind, symbol: &str) -> bool {
    REGISTRY.is_valid_unit(kind, symbol)
}
