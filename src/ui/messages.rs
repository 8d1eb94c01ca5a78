use crate::utils::formatting::{render_markup, wrap};
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (BLUE, "ℹ️"),
            Level::Success => (GREEN, "✅"),
            Level::Warning => (YELLOW, "⚠️"),
            Level::Error => (RED, "❌"),
        }
    }
}

fn notice(level: Level, msg: &dyn fmt::Display) {
    let (colour, icon) = level.style();
    let line = format!("{colour}{BOLD}{icon} {RESET}{msg}");

    // errors on stderr
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    notice(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    notice(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notice(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    notice(Level::Error, &msg);
}

/// Section title followed by a blank line.
pub fn header<T: fmt::Display>(title: T) {
    println!("{BLUE}{BOLD}== {title} =={RESET}\n");
}

/// Horizontal rule built from the configured separator.
pub fn rule(separator: &str, width: usize) {
    println!("{DIM}{}{RESET}", separator.repeat(width));
}

/// Role line plus the wrapped body, with `**bold**` rendered.
pub fn chat_line(is_user: bool, stamp: &str, text: &str, width: usize) {
    let (icon, who, colour) = if is_user {
        ("🧑", "You", GREEN)
    } else {
        ("🌊", "FloatChat", CYAN)
    };

    println!("{colour}{BOLD}{icon} {who}{RESET} {DIM}{stamp}{RESET}");
    println!("{}", render_markup(&wrap(text, width, "   ")));
}

/// SQL attached to an assistant reply.
pub fn query_block(sql: &str) {
    println!("   {YELLOW}{BOLD}SQL{RESET}");
    for line in sql.lines() {
        println!("   {DIM}│{RESET} {line}");
    }
}
