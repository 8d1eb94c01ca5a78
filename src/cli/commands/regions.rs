use crate::config::Config;
use crate::core::dashboard;
use crate::data::REGIONAL_DATA;
use crate::errors::AppResult;
use crate::utils::colors::{paint, region_status_colour, trend_colour};
use crate::utils::table::{Column, Table};
use crate::utils::{signed, thousands};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let quick = dashboard::region_quick_view();

    let mut table = Table::new(vec![
        Column::left("Region"),
        Column::right("Floats"),
        Column::right("Temp °C"),
        Column::right("Sal PSU"),
        Column::right("O2 μmol/kg"),
        Column::left("Trend"),
        Column::right("Change %"),
        Column::right("Coverage"),
        Column::left("Status"),
    ])
    .with_separator(cfg.separator());

    for (r, q) in REGIONAL_DATA.iter().zip(&quick) {
        table.add_row(vec![
            r.region.to_string(),
            thousands(u64::from(r.float_count)),
            format!("{:.1}", r.avg_temperature),
            format!("{:.1}", r.avg_salinity),
            format!("{:.1}", r.avg_oxygen),
            paint(
                trend_colour(r.trend),
                &format!("{} {}", r.trend.arrow(), r.trend.as_str()),
            ),
            signed(r.change_percent, 1),
            q.coverage.to_string(),
            paint(region_status_colour(q.status), q.status.as_str()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
