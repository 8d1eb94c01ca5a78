//! Hardcoded sample datasets.
//!
//! Everything here is `&'static` and immutable: the tables are compiled into
//! the binary and read by the dashboard helpers, the statistics helper and
//! the chat narratives.

pub mod alerts;
pub mod floats;
pub mod measurements;
pub mod metrics;
pub mod oceans;
pub mod profile;
pub mod prompts;
pub mod regions;
pub mod trends;

pub use alerts::NOTIFICATIONS;
pub use floats::SAMPLE_FLOATS;
pub use measurements::CARIBBEAN_MEASUREMENTS;
pub use metrics::{DASHBOARD_METRICS, RECENT_ACTIVITY};
pub use oceans::OCEANS;
pub use profile::SAMPLE_DEPTH_PROFILE;
pub use prompts::{CONVERSATION_STARTERS, GREETING, SUGGESTED_QUERIES};
pub use regions::REGIONAL_DATA;
pub use trends::TREND_DATA;
