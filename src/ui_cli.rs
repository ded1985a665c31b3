use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::quantity::QuantityKind;
use crate::registry::{self, Category, REGISTRY};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(QuantityKind),
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 번호 또는 카테고리 이름을 받는다.
pub fn main_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> Result<MenuChoice, AppError> {
    writeln!(out, "\n=== Unit Converter ===")?;
    for (i, category) in registry::list_categories().iter().enumerate() {
        writeln!(out, "{:>2}) {}", i + 1, category.name)?;
    }
    writeln!(out, " 0) Exit")?;

    let default = cfg.default_kind();
    let prompt = match default {
        Some(kind) => format!("Select category [{kind}]: "),
        None => "Select category: ".to_string(),
    };
    loop {
        let sel = read_line(input, out, &prompt)?;
        let sel = sel.trim();
        if sel.is_empty() {
            if let Some(kind) = default {
                return Ok(MenuChoice::Convert(kind));
            }
        }
        if sel == "0" {
            return Ok(MenuChoice::Exit);
        }
        if let Some(kind) = map_selection(sel) {
            return Ok(MenuChoice::Convert(kind));
        }
        writeln!(out, "Invalid selection. Try again.")?;
    }
}

fn map_selection(sel: &str) -> Option<QuantityKind> {
    match sel.parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| QuantityKind::ALL.get(i).copied()),
        Err(_) => sel.parse().ok(),
    }
}

/// 한 카테고리의 변환 화면을 처리한다.
///
/// 단위를 비워 두면 카테고리의 앞 두 단위가 from/to로 쓰인다. 값이 숫자가 아니면
/// `Invalid input`을 출력하고 메뉴로 돌아간다.
pub fn handle_conversion<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    kind: QuantityKind,
    cfg: &Config,
) -> Result<(), AppError> {
    let category = REGISTRY.category(kind);
    debug!(category = category.name, "category selected");
    writeln!(out, "\n-- {} Converter --", category.name)?;
    writeln!(out, "Units: {}", category.units.join(", "))?;

    let value_text = read_line(input, out, "Enter value: ")?;
    let (default_from, default_to) = category.default_units().unzip();
    let from = read_unit(input, out, category, "From", default_from)?;
    let to = read_unit(input, out, category, "To", default_to)?;

    let line = match conversion::parse_value(&value_text)
        .and_then(|value| conversion::convert_in(category, value, from, to))
    {
        Ok(result) => {
            debug!(category = category.name, from, to, result, "converted");
            format_result(value_text.trim(), from, result, to, cfg.precision)
        }
        Err(ConversionError::InvalidValue(text)) => {
            warn!(input = %text, "rejected value");
            "Invalid input".to_string()
        }
        Err(err) => return Err(err.into()),
    };
    writeln!(out, "{line}")?;
    Ok(())
}

/// 결과를 `<value> <from> = <result> <to>` 형식으로 만든다.
///
/// 결과가 유한하지 않으면(범위 초과) `Invalid input`을 반환한다.
pub fn format_result(
    input: &str,
    from: &str,
    result: f64,
    to: &str,
    precision: Option<usize>,
) -> String {
    if !result.is_finite() {
        return "Invalid input".to_string();
    }
    format!("{input} {from} = {} {to}", format_number(result, precision))
}

/// 크기가 [1e-3, 1e7) 밖인 값은 지수 표기(`1.602e-19`)로 쓴다.
fn format_number(value: f64, precision: Option<usize>) -> String {
    let magnitude = value.abs();
    let scientific = magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude);
    match (scientific, precision) {
        (true, Some(p)) => format!("{value:.p$e}"),
        (true, None) => format!("{value:e}"),
        (false, Some(p)) => format!("{value:.p$}"),
        (false, None) => format!("{value}"),
    }
}

/// 카테고리별로 한 줄씩 이름과 단위를 출력한다.
pub fn print_categories<W: Write>(out: &mut W) -> Result<(), AppError> {
    for category in registry::list_categories() {
        writeln!(out, "{}: {}", category.name, category.units.join(", "))?;
    }
    Ok(())
}

/// 카테고리의 단위를 한 줄에 하나씩 출력한다.
pub fn print_units<W: Write>(out: &mut W, category: &Category) -> Result<(), AppError> {
    for unit in &category.units {
        writeln!(out, "{unit}")?;
    }
    Ok(())
}

fn read_unit<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    category: &Category,
    label: &str,
    default: Option<&'static str>,
) -> Result<&'static str, AppError> {
    let prompt = match default {
        Some(unit) => format!("{label} [{unit}]: "),
        None => format!("{label}: "),
    };
    loop {
        let s = read_line(input, out, &prompt)?;
        let s = s.trim();
        if s.is_empty() {
            match default {
                Some(unit) => return Ok(unit),
                None => continue,
            }
        }
        if let Some(&unit) = category.units.iter().find(|u| **u == s) {
            return Ok(unit);
        }
        writeln!(out, "Unknown unit `{s}` for {}.", category.name)?;
        let owners: Vec<&str> = REGISTRY
            .categories_with_unit(s)
            .into_iter()
            .map(|c| c.name)
            .collect();
        if !owners.is_empty() {
            writeln!(out, "`{s}` is a unit of: {}", owners.join(", "))?;
        }
    }
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}
