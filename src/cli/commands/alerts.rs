use crate::cli::parser::Commands;
use crate::core::dashboard;
use crate::data::NOTIFICATIONS;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{paint, severity_colour};
use crate::utils::date::{display_timestamp, time_ago};
use chrono::Utc;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Alerts { count, severity } = cmd {
        let limit = count.unwrap_or(NOTIFICATIONS.len());
        let now = Utc::now();

        let alerts: Vec<_> = dashboard::recent_alerts(NOTIFICATIONS.len())
            .iter()
            .filter(|a| severity.is_none_or(|s| a.severity == s))
            .take(limit)
            .collect();

        if alerts.is_empty() {
            warning("No alerts match the selected filters.");
            return Ok(());
        }

        for a in &alerts {
            let ago = a
                .timestamp_utc()
                .map(|t| time_ago(t, now))
                .unwrap_or_default();

            println!(
                "[{}] {}  {} ({})",
                paint(severity_colour(a.severity), a.severity.as_str()),
                a.title,
                display_timestamp(a.timestamp),
                ago
            );
            println!("    {}", a.message);

            let mut tags = Vec::new();
            if let Some(region) = a.region {
                tags.push(format!("region: {region}"));
            }
            if let Some(float_id) = a.float_id {
                tags.push(format!("float: {float_id}"));
            }
            if !tags.is_empty() {
                println!("    {}", tags.join(" | "));
            }
        }

        println!();
        info(format!(
            "{} active alerts (warning or critical)",
            dashboard::active_alert_count()
        ));
    }
    Ok(())
}
