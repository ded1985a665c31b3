use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::quantity::QuantityKind;

/// 설정 파일 기본 경로 (작업 디렉터리 기준).
pub const DEFAULT_PATH: &str = "unit_converter.toml";

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 대화형 메뉴에서 빈 입력 시 선택되는 카테고리 이름
    pub default_category: Option<String>,
    /// 결과 표시 소수 자릿수. 없으면 계산값을 그대로 출력한다.
    pub precision: Option<usize>,
    /// `RUST_LOG`가 없을 때 쓰는 로그 레벨
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: None,
            precision: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// 기본 카테고리. [`load`]에서 이미 검증되었으므로 잘못된 이름은 무시한다.
    pub fn default_kind(&self) -> Option<QuantityKind> {
        self.default_category.as_deref()?.parse().ok()
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config names unknown default_category `{0}`")]
    UnknownCategory(String),
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 반환하며 파일을 만들지 않는다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// TOML 문자열에서 설정을 만든다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    if let Some(name) = &cfg.default_category {
        if name.parse::<QuantityKind>().is_err() {
            return Err(ConfigError::UnknownCategory(name.clone()));
        }
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse("").expect("empty config");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn fields_are_read() {
        let cfg = parse(
            r#"
default_category = "data storage"
precision = 3
log_level = "debug"
"#,
        )
        .expect("config");
        assert_eq!(cfg.default_kind(), Some(QuantityKind::DataStorage));
        assert_eq!(cfg.precision, Some(3));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn unknown_default_category_is_rejected() {
        let err = parse(r#"default_category = "Luminosity""#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCategory(name) if name == "Luminosity"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(parse("precision = "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_not_created() {
        let path = std::env::temp_dir().join("unit_converter_missing_config_test.toml");
        let _ = fs::remove_file(&path);
        let cfg = load(&path).expect("defaults");
        assert_eq!(cfg, Config::default());
        assert!(!path.exists());
    }
}
