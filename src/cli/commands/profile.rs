use crate::config::Config;
use crate::core::stats::{Field, summarize};
use crate::data::SAMPLE_DEPTH_PROFILE;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::right("Depth m"),
        Column::right("Pressure dbar"),
        Column::right("Temp °C"),
        Column::right("Sal PSU"),
        Column::right("O2 μmol/kg"),
    ])
    .with_separator(cfg.separator());

    for s in SAMPLE_DEPTH_PROFILE {
        table.add_row(vec![
            format!("{:.0}", s.depth),
            format!("{:.1}", s.pressure),
            format!("{:.2}", s.temperature),
            format!("{:.2}", s.salinity),
            format!("{:.1}", s.oxygen),
        ]);
    }

    print!("{}", table.render());
    println!();

    for field in [Field::Temperature, Field::Salinity, Field::Oxygen] {
        let s = summarize(SAMPLE_DEPTH_PROFILE, field)?;
        println!(
            "{:<12} min {:>7.2}  max {:>7.2}  mean {:>7.2} {}",
            field.as_str(),
            s.min,
            s.max,
            s.mean,
            field.unit()
        );
    }

    Ok(())
}
