use crate::config::Config;
use crate::core::stats::{Bounds, Field, TemperatureBand, summarize, total};
use crate::data::CARIBBEAN_MEASUREMENTS;
use crate::errors::AppResult;
use crate::utils::colors::{band_colour, paint};
use crate::utils::table::{Column, Table};
use crate::utils::thousands;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let temps = summarize(CARIBBEAN_MEASUREMENTS, Field::Temperature)?;
    let bounds = Bounds::of(CARIBBEAN_MEASUREMENTS)?;

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::right("Lat"),
        Column::right("Lon"),
        Column::right("Pressure dbar"),
        Column::right("Samples"),
        Column::right("Temp °C"),
        Column::left("Band"),
        Column::right("Map x%"),
        Column::right("Map y%"),
    ])
    .with_separator(cfg.separator());

    for (i, m) in CARIBBEAN_MEASUREMENTS.iter().enumerate() {
        let band = TemperatureBand::classify(m.temperature, &temps);
        let (x, y) = bounds.relative_position(m.latitude, m.longitude);

        table.add_row(vec![
            (i + 1).to_string(),
            format!("{:.4}", m.latitude),
            format!("{:.4}", m.longitude),
            format!("{:.1}-{:.1}", m.pressure_min, m.pressure_max),
            thousands(u64::from(m.pressure_count)),
            format!("{:.3}", m.temperature),
            paint(band_colour(band), band.as_str()),
            format!("{:.0}", x),
            format!("{:.0}", y),
        ]);
    }

    print!("{}", table.render());
    println!();

    let samples = total(CARIBBEAN_MEASUREMENTS, Field::PressureCount)?;
    let (clat, clon) = bounds.center();

    println!("Stations           : {}", temps.count);
    println!("Total measurements : {}", thousands(samples as u64));
    println!(
        "Temperature        : min {:.3}  max {:.3}  mean {:.3} °C",
        temps.min, temps.max, temps.mean
    );
    println!(
        "Area               : {:.2}..{:.2} N, {:.2}..{:.2} E (centre {:.2}, {:.2})",
        bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon, clat, clon
    );

    let bands = [
        TemperatureBand::Cool,
        TemperatureBand::Medium,
        TemperatureBand::Warm,
    ];
    let legend: Vec<String> = bands
        .iter()
        .map(|b| format!("{} {}", paint(band_colour(*b), b.as_str()), b.hex()))
        .collect();
    println!("Legend             : {}", legend.join("  "));

    Ok(())
}
