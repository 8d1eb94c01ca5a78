use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::utils::thousands;
use serde_json::json;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Stats {
        dataset,
        field,
        json,
    } = cmd
    {
        let summary = dataset.summarize(*field)?;
        let sum = dataset.total(*field)?;

        if *json {
            let out = json!({
                "dataset": dataset.as_str(),
                "field": field.as_str(),
                "unit": field.unit(),
                "min": summary.min,
                "max": summary.max,
                "mean": summary.mean,
                "count": summary.count,
                "total": sum,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        let unit = field.unit();
        println!("Dataset : {}", dataset.as_str());
        println!("Field   : {}", field.as_str());
        println!("Count   : {}", summary.count);
        println!("Min     : {:.3} {}", summary.min, unit);
        println!("Max     : {:.3} {}", summary.max, unit);
        println!("Mean    : {:.3} {}", summary.mean, unit);
        if sum.fract() == 0.0 && sum >= 0.0 {
            println!("Total   : {}", thousands(sum as u64));
        } else {
            println!("Total   : {:.3}", sum);
        }

        if let Some(b) = dataset.bounds() {
            let (lat, lon) = b.center();
            println!(
                "Bounds  : lat {:.3}..{:.3}, lon {:.3}..{:.3} (centre {:.3}, {:.3})",
                b.min_lat, b.max_lat, b.min_lon, b.max_lon, lat, lon
            );
        }
    }
    Ok(())
}
