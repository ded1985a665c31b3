//! 로그 출력 설정.
//!
//! 표준 출력은 변환 결과 전용으로 두고 로그는 표준 오류로 보낸다.

use tracing_subscriber::EnvFilter;

/// 전역 tracing subscriber를 설치한다.
///
/// `RUST_LOG`가 있으면 그 값을, 없으면 `level`을 필터로 쓴다. 이미 설치되어
/// 있으면 아무것도 하지 않는다.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--verbose` 여부에 따라 실제로 쓸 레벨을 고른다.
pub fn effective_level(configured: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}
