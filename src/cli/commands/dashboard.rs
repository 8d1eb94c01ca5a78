use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard;
use crate::data::{DASHBOARD_METRICS, RECENT_ACTIVITY, SAMPLE_FLOATS};
use crate::errors::AppResult;
use crate::models::alert::Alert;
use crate::models::metrics::{DashboardMetrics, SystemStatus};
use crate::models::region::RegionQuickView;
use crate::ui::messages::{header, rule};
use crate::utils::colors::{paint, region_status_colour, severity_colour, system_status_colour};
use crate::utils::date::display_timestamp;
use crate::utils::table::{Column, Table};
use crate::utils::thousands;
use serde::Serialize;

#[derive(Serialize)]
struct DashboardView<'a> {
    metrics: &'a DashboardMetrics,
    system_status: SystemStatus,
    active_alerts: usize,
    sample_active_floats: usize,
    sample_float_total: usize,
    sample_data_quality: f64,
    recent_alerts: &'a [Alert],
    regions: Vec<RegionQuickView>,
}

const RECENT_ALERTS: usize = 3;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { json } = cmd {
        let view = DashboardView {
            metrics: &DASHBOARD_METRICS,
            system_status: dashboard::system_status(),
            active_alerts: dashboard::active_alert_count(),
            sample_active_floats: dashboard::active_float_count(),
            sample_float_total: SAMPLE_FLOATS.len(),
            sample_data_quality: dashboard::data_quality_percentage(),
            recent_alerts: dashboard::recent_alerts(RECENT_ALERTS),
            regions: dashboard::region_quick_view(),
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        print_view(&view, cfg);
    }
    Ok(())
}

fn print_view(view: &DashboardView, cfg: &Config) {
    let m = view.metrics;

    header("FloatChat dashboard");
    println!("Last update      : {}", m.last_update);
    println!(
        "System status    : {}  ({} active alerts)",
        paint(
            system_status_colour(view.system_status),
            view.system_status.as_str()
        ),
        view.active_alerts
    );
    println!();
    println!("Active floats    : {}", thousands(u64::from(m.active_floats)));
    println!("New profiles     : {}", thousands(u64::from(m.new_profiles)));
    println!("Data quality     : {:.1}%", m.data_quality);
    println!("Total profiles   : {}", thousands(m.total_profiles));
    println!("Global coverage  : {:.1}%", m.global_coverage);
    println!(
        "Sample set       : {}/{} floats active, {:.1}% good QC",
        view.sample_active_floats, view.sample_float_total, view.sample_data_quality
    );

    println!();
    rule(&cfg.separator_char, 60);
    println!("Recent alerts");
    for a in view.recent_alerts {
        println!(
            "  {:<8} {}  {}",
            paint(severity_colour(a.severity), a.severity.as_str()),
            a.title,
            display_timestamp(a.timestamp)
        );
    }

    println!();
    rule(&cfg.separator_char, 60);
    println!("Regions");
    let mut table = Table::new(vec![
        Column::left("Region"),
        Column::right("Floats"),
        Column::right("Avg temp"),
        Column::right("Coverage"),
        Column::left("Status"),
    ])
    .with_separator(cfg.separator());

    for r in &view.regions {
        table.add_row(vec![
            r.region.to_string(),
            thousands(u64::from(r.float_count)),
            format!("{:.1}°C", r.avg_temperature),
            r.coverage.to_string(),
            paint(region_status_colour(r.status), r.status.as_str()),
        ]);
    }
    print!("{}", table.render());

    println!();
    rule(&cfg.separator_char, 60);
    println!("Recent activity");
    for act in RECENT_ACTIVITY {
        println!(
            "  {}  {} - {} ({})",
            display_timestamp(act.timestamp),
            act.title,
            act.description,
            act.location
        );
    }
}
