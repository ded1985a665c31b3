use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::{self, Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::logging;
use crate::registry::REGISTRY;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 로드 오류
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("{0}")]
    Conversion(#[from] ConversionError),
    /// 카탈로그 TOML 직렬화 오류
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 대화형 입력이 끝남 (EOF)
    #[error("input closed")]
    InputClosed,
}

/// 설정과 로그를 준비한 뒤 명령을 실행한다. 명령이 없으면 대화형 메뉴를 연다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load(&cli.config)?;
    logging::init(logging::effective_level(&cfg.log_level, cli.verbose));
    debug!(path = %cli.config.display(), ?cfg, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Some(command) => execute(command, &cfg, &mut out),
        None => {
            let stdin = io::stdin();
            interactive(&mut stdin.lock(), &mut out, &cfg)
        }
    }
}

/// 한 번 실행하고 끝나는 하위 명령을 처리한다.
pub fn execute<W: Write>(command: &Command, cfg: &Config, out: &mut W) -> Result<(), AppError> {
    match command {
        Command::List { toml: false } => ui_cli::print_categories(out)?,
        Command::List { toml: true } => {
            let dump = toml::to_string_pretty(&*REGISTRY)?;
            write!(out, "{dump}")?;
        }
        Command::Units { category } => {
            let category = REGISTRY.find_category(category)?;
            ui_cli::print_units(out, category)?;
        }
        Command::Convert {
            category,
            value,
            from,
            to,
        } => {
            let category = REGISTRY.find_category(category)?;
            let parsed = conversion::parse_value(value)?;
            let result = conversion::convert_in(category, parsed, from, to)?;
            debug!(category = category.name, %from, %to, result, "converted");
            let line = ui_cli::format_result(value.trim(), from, result, to, cfg.precision);
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// 대화형 메인 루프. `0`을 고르거나 입력이 끝나면 종료한다.
pub fn interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(input, out, cfg) {
            Ok(MenuChoice::Convert(kind)) => ui_cli::handle_conversion(input, out, kind, cfg),
            Ok(MenuChoice::Exit) => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
            Err(err) => Err(err),
        };
        match step {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                debug!("input closed, leaving interactive mode");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}
