use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard;
use crate::data::{REGIONAL_DATA, SAMPLE_FLOATS};
use crate::errors::{AppError, AppResult};
use crate::models::float::FloatRecord;
use crate::ui::messages::warning;
use crate::utils::colors::{float_status_colour, paint, qc_colour};
use crate::utils::date::display_timestamp;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Floats { region, status, qc } = cmd {
        let base: Vec<&FloatRecord> = match region {
            Some(r) => {
                let known = REGIONAL_DATA.iter().any(|s| s.region == r.as_str())
                    || SAMPLE_FLOATS.iter().any(|f| f.region == r.as_str());
                if !known {
                    return Err(AppError::UnknownRegion(r.clone()));
                }
                dashboard::floats_by_region(r)
            }
            None => SAMPLE_FLOATS.iter().collect(),
        };

        let floats: Vec<&FloatRecord> = base
            .into_iter()
            .filter(|f| status.is_none_or(|s| f.status == s))
            .filter(|f| qc.is_none_or(|q| f.qc_flag == q))
            .collect();

        if floats.is_empty() {
            warning("No floats match the selected filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Float"),
            Column::left("Region"),
            Column::right("Lat"),
            Column::right("Lon"),
            Column::left("Status"),
            Column::left("Last profile"),
            Column::right("Depth m"),
            Column::right("Temp °C"),
            Column::right("Sal PSU"),
            Column::right("O2 μmol/kg"),
            Column::left("QC"),
        ])
        .with_separator(cfg.separator());

        for f in &floats {
            table.add_row(vec![
                f.id.to_string(),
                f.region.to_string(),
                format!("{:.2}", f.latitude),
                format!("{:.2}", f.longitude),
                paint(float_status_colour(f.status), f.status.as_str()),
                display_timestamp(f.last_profile),
                format!("{:.0}", f.depth),
                format!("{:.1}", f.temperature),
                format!("{:.1}", f.salinity),
                format!("{:.1}", f.oxygen),
                paint(qc_colour(f.qc_flag), f.qc_flag.as_str()),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} floats", floats.len());
    }
    Ok(())
}
