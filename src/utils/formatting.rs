//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// 2847639 → "2,847,639"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Signed value with fixed decimals: `+0.3`, `-0.2`, `0.0`.
pub fn signed(value: f64, decimals: usize) -> String {
    // -0.0 would print as "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value > 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

fn bold_markup() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold regex"))
}

fn ansi_codes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ansi regex"))
}

/// Turns `**text**` into terminal bold.
pub fn render_markup(s: &str) -> String {
    bold_markup()
        .replace_all(s, "\x1b[1m$1\x1b[0m")
        .into_owned()
}

/// Drops `**` markers, for plain-text outputs (JSON, exports).
pub fn strip_markup(s: &str) -> String {
    bold_markup().replace_all(s, "$1").into_owned()
}

pub fn strip_ansi(s: &str) -> String {
    ansi_codes().replace_all(s, "").into_owned()
}

/// Wraps `s` at `width` columns, each line prefixed with `indent`.
pub fn wrap(s: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width.max(20))
        .initial_indent(indent)
        .subsequent_indent(indent);

    textwrap::fill(s, options)
}
