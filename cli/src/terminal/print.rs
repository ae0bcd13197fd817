use std::time::Duration;

use colored::*;
use sixgrep_engine::Match;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Centered `⟦ ... ⟧` section rule; decoration goes to stderr so stdout
/// carries nothing but results.
pub fn header(msg: &str) {
    let framed = format!("⟦ {} ⟧", msg.to_uppercase());
    let width = UnicodeWidthStr::width(framed.as_str());

    let dashes = TOTAL_WIDTH.saturating_sub(width);
    let left = dashes / 2;
    let right = dashes - left;

    eprintln!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        framed.bright_green(),
        "─".repeat(right).bright_black()
    );
}

/// One recognized literal: `source:offset  text  [notation]`.
pub fn match_line(source: &str, m: &Match) {
    let location = format!("{}:{}", source, m.start);
    println!(
        "{} {} {}",
        location.bright_black(),
        m.text.bright_green(),
        format!("[{}]", m.notation).blue()
    );
}

pub fn count_line(source: &str, count: usize) {
    println!("{}: {}", source, count);
}

pub fn scan_summary(total: usize, elapsed: Duration) {
    let unit = if total == 1 { "literal" } else { "literals" };
    let totals = format!("{total} {unit}").bold().green();
    let elapsed = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();

    eprintln!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
    eprintln!("Scan complete: {totals} recognized in {elapsed}");
}

pub fn check_ok(m: &Match) {
    println!("{} {}", format!("{}:", m.notation).green().bold(), m.text);
}

pub fn check_failed(literal: &str) {
    println!("{} unable to match '{}'", "FAIL:".red().bold(), literal);
}
