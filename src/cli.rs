//! 명령행 인자 정의.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

/// 길이, 질량, 온도 등 카테고리별 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "unit_converter", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_PATH)]
    pub config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 생략하면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// 카테고리와 단위 목록을 출력한다
    List {
        /// 변환 규칙까지 포함한 카탈로그 전체를 TOML로 출력한다
        #[arg(long)]
        toml: bool,
    },
    /// 한 카테고리의 단위를 출력한다
    Units {
        category: String,
    },
    /// 값을 한 번 변환한다
    Convert {
        category: String,
        /// 변환할 값 (음수 허용)
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },
}
