use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::briefing;
use crate::core::state::{Action, AppState, Tab};
use crate::core::stats::summarize_values;
use crate::errors::AppResult;
use crate::models::ocean::{Ocean, OceanDetails};
use crate::ui::messages::{header, info, rule, warning};
use crate::utils::colors::{color_for_change, paint, trend_colour, RESET};
use crate::utils::formatting::{bold, wrap};
use crate::utils::signed;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Oceans {
        search,
        watchlist,
        show,
    } = cmd
    {
        if let Some(name) = show {
            let ocean = briefing::find_ocean(name)?;
            print_card(ocean, cfg);
            return Ok(());
        }

        let mut state = AppState::from_names(&cfg.watchlist);
        if let Some(term) = search {
            state.apply(Action::Search(term.clone()))?;
        }
        if *watchlist {
            state.apply(Action::SelectTab(Tab::Watchlist))?;
        }

        let rows = state.visible_oceans();
        if rows.is_empty() {
            warning("No oceans match the selected filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left(" "),
            Column::left("Name"),
            Column::left("Region"),
            Column::right("Temp °C"),
            Column::right("Sal PSU"),
            Column::right("Wave m"),
            Column::right("Wind km/h"),
            Column::left("Trend"),
            Column::right("24h"),
        ])
        .with_separator(cfg.separator());

        for o in &rows {
            let change = format!(
                "{}{}°C{}",
                color_for_change(o.change),
                signed(o.change, 1),
                RESET
            );

            table.add_row(vec![
                if state.is_watched(o) { "★" } else { "☆" }.to_string(),
                o.name.to_string(),
                o.region.to_string(),
                format!("{:.1}", o.temperature),
                format!("{:.1}", o.salinity),
                format!("{:.1}", o.wave_height),
                format!("{:.1}", o.wind_speed),
                paint(trend_colour(o.trend), o.trend.arrow()),
                change,
            ]);
        }

        print!("{}", table.render());
        println!(
            "\n{} oceans shown, {} in watchlist",
            rows.len(),
            state.watchlist.len()
        );
    }
    Ok(())
}

fn print_card(ocean: &Ocean, cfg: &Config) {
    header(ocean.name);
    println!(
        "{}  |  {:.1}°C  |  {:.1} PSU  |  waves {:.1} m  |  wind {:.1} km/h  |  {} {}°C",
        ocean.region,
        ocean.temperature,
        ocean.salinity,
        ocean.wave_height,
        ocean.wind_speed,
        ocean.trend.arrow(),
        signed(ocean.change, 1)
    );

    let Some(details) = ocean.details else {
        println!();
        info(format!(
            "Detailed information for {} is not available yet.",
            ocean.name
        ));
        return;
    };

    print_details(details, cfg);
}

fn print_details(details: &OceanDetails, cfg: &Config) {
    println!();
    println!("{}", wrap(details.general_info, cfg.wrap_width, ""));
    println!();
    println!("{} {:.0} m", bold("Average depth:"), details.depth);

    if !details.monthly.is_empty() {
        println!();
        rule(&cfg.separator_char, 50);
        println!("{}", bold("Monthly trends"));

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Temp °C"),
            Column::right("Sal PSU"),
            Column::right("Wave m"),
            Column::right("Wind km/h"),
        ])
        .with_separator(cfg.separator());

        for p in details.monthly {
            table.add_row(vec![
                p.month.to_string(),
                format!("{:.1}", p.temperature),
                format!("{:.1}", p.salinity),
                p.wave_height.map(|v| format!("{v:.1}")).unwrap_or_default(),
                p.wind_speed.map(|v| format!("{v:.1}")).unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());

        let temps: Vec<f64> = details.monthly.iter().map(|p| p.temperature).collect();
        if let Some(s) = summarize_values(&temps) {
            println!(
                "Temperature range {:.1}-{:.1}°C, annual mean {:.1}°C",
                s.min, s.max, s.mean
            );
        }
    }

    if let Some(life) = &details.marine_life {
        println!();
        rule(&cfg.separator_char, 50);
        println!("{}", bold("Marine life"));
        println!("Key species       : {}", life.species.join(", "));
        println!("Biodiversity index: {:.1}/10", life.biodiversity_index);
        println!("Protected areas   : {}", life.protected_areas);
        println!("Coral reefs       : {}", life.coral_reefs);
    }

    if let Some(climate) = &details.climate {
        println!();
        rule(&cfg.separator_char, 50);
        println!("{}", bold("Climate patterns"));
        println!("{}", wrap(&format!("Monsoons: {}", climate.monsoons), cfg.wrap_width, ""));
        println!("{}", wrap(&format!("ENSO: {}", climate.elnino), cfg.wrap_width, ""));
        println!("{}", wrap(&format!("Currents: {}", climate.currents), cfg.wrap_width, ""));
    }
}
