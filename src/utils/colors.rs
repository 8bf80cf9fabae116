//! ANSI color helper utilities for terminal output.

use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Amount color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_amount(value: Decimal) -> &'static str {
    if value > Decimal::ZERO {
        GREEN
    } else if value < Decimal::ZERO {
        RED
    } else {
        GREY
    }
}

/// Health score color: green from 70, yellow from 40, red below.
pub fn color_for_score(score: i64) -> &'static str {
    match score {
        s if s >= 70 => GREEN,
        s if s >= 40 => YELLOW,
        _ => RED,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
