use std::process::ExitCode;

use clap::Parser;
use unit_converter::{app, cli::Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    match app::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
