/// ANSI color helper utilities for terminal output.
use crate::core::stats::TemperatureBand;
use crate::models::alert::Severity;
use crate::models::float::{FloatStatus, QcFlag};
use crate::models::metrics::SystemStatus;
use crate::models::region::RegionStatus;
use crate::models::trend::Trend;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Change color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_change(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn trend_colour(trend: Trend) -> Colour {
    match trend {
        Trend::Up => Colour::Green,
        Trend::Down => Colour::Red,
        Trend::Stable => Colour::Blue,
    }
}

pub fn severity_colour(severity: Severity) -> Colour {
    match severity {
        Severity::Info => Colour::Blue,
        Severity::Warning => Colour::Yellow,
        Severity::Critical => Colour::Red,
    }
}

pub fn float_status_colour(status: FloatStatus) -> Colour {
    match status {
        FloatStatus::Active => Colour::Green,
        FloatStatus::Inactive => Colour::Fixed(8),
        FloatStatus::Warning => Colour::Yellow,
    }
}

pub fn qc_colour(flag: QcFlag) -> Colour {
    match flag {
        QcFlag::Good => Colour::Green,
        QcFlag::Questionable => Colour::Yellow,
        QcFlag::Bad => Colour::Red,
    }
}

pub fn system_status_colour(status: SystemStatus) -> Colour {
    match status {
        SystemStatus::Operational => Colour::Green,
        SystemStatus::Warning => Colour::Yellow,
        SystemStatus::Critical => Colour::Red,
    }
}

pub fn region_status_colour(status: RegionStatus) -> Colour {
    match status {
        RegionStatus::Normal => Colour::Green,
        RegionStatus::Warning => Colour::Yellow,
    }
}

pub fn band_colour(band: TemperatureBand) -> Colour {
    match band {
        TemperatureBand::Cool => Colour::Blue,
        TemperatureBand::Medium => Colour::Green,
        TemperatureBand::Warm => Colour::RGB(245, 158, 11), // amber
    }
}

/// Paints `text` unless it is empty.
pub fn paint(colour: Colour, text: &str) -> String {
    if text.trim().is_empty() {
        format!("{GREY}{text}{RESET}")
    } else {
        colour.paint(text).to_string()
    }
}
