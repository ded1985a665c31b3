use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 다루는 물리량(카테고리) 종류를 나타낸다. 선언 순서가 곧 표시 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Area,
    Volume,
    Mass,
    Time,
    Temperature,
    Speed,
    Energy,
    Power,
    Pressure,
    Force,
    DataStorage,
}

impl QuantityKind {
    /// 표시 순서대로 정렬된 전체 목록.
    pub const ALL: [QuantityKind; 12] = [
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Mass,
        QuantityKind::Time,
        QuantityKind::Temperature,
        QuantityKind::Speed,
        QuantityKind::Energy,
        QuantityKind::Power,
        QuantityKind::Pressure,
        QuantityKind::Force,
        QuantityKind::DataStorage,
    ];

    /// 카테고리의 고유 이름.
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Length => "Length",
            QuantityKind::Area => "Area",
            QuantityKind::Volume => "Volume",
            QuantityKind::Mass => "Mass",
            QuantityKind::Time => "Time",
            QuantityKind::Temperature => "Temperature",
            QuantityKind::Speed => "Speed",
            QuantityKind::Energy => "Energy",
            QuantityKind::Power => "Power",
            QuantityKind::Pressure => "Pressure",
            QuantityKind::Force => "Force",
            QuantityKind::DataStorage => "Data Storage",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 알 수 없는 카테고리 이름.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownQuantity(pub String);

impl FromStr for QuantityKind {
    type Err = UnknownQuantity;

    /// 대소문자와 공백을 무시하고 이름을 비교한다 (`Data Storage`, `datastorage` 모두 허용).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        QuantityKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| UnknownQuantity(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_leniently() {
        assert_eq!("Data Storage".parse::<QuantityKind>(), Ok(QuantityKind::DataStorage));
        assert_eq!("data_storage".parse::<QuantityKind>(), Ok(QuantityKind::DataStorage));
        assert_eq!(" LENGTH ".parse::<QuantityKind>(), Ok(QuantityKind::Length));
    }

    #[test]
    fn unknown_name_reports_the_input() {
        let err = "Luminosity".parse::<QuantityKind>().unwrap_err();
        assert_eq!(err, UnknownQuantity("Luminosity".to_string()));
        assert_eq!(err.to_string(), "unknown category: Luminosity");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
