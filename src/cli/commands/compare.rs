use crate::cli::parser::Commands;
use crate::core::briefing;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_change};
use crate::utils::signed;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Compare { first, second } = cmd {
        let a = briefing::find_ocean(first)?;
        let b = briefing::find_ocean(second)?;
        let diff = briefing::compare(a, b);

        header(format!("{} vs {}", a.name, b.name));
        println!(
            "{:<18} {:>10} {:>10} {:>12}",
            "", a.name, b.name, "difference"
        );

        let rows = [
            ("Temperature °C", a.temperature, b.temperature, diff.temperature),
            ("Salinity PSU", a.salinity, b.salinity, diff.salinity),
            ("Wave height m", a.wave_height, b.wave_height, diff.wave_height),
            ("Wind speed km/h", a.wind_speed, b.wind_speed, diff.wind_speed),
        ];

        for (label, x, y, d) in rows {
            println!(
                "{:<18} {:>10.1} {:>10.1} {}{:>12}{}",
                label,
                x,
                y,
                color_for_change(d),
                signed(d, 1),
                RESET
            );
        }

        println!();
        let warmer = if diff.temperature > 0.0 {
            format!("{} is warmer by {:.1}°C", b.name, diff.temperature)
        } else if diff.temperature < 0.0 {
            format!("{} is warmer by {:.1}°C", a.name, -diff.temperature)
        } else {
            "Both have the same surface temperature".to_string()
        };
        println!("{warmer}.");
    }
    Ok(())
}
