use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration directory and file (never overwrites an
/// existing one) and the export folder it points to.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();

    println!("⚙️  Initializing FloatChat…");

    if Config::init_at(&path)? {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    let cfg = Config::load_from(&path)?;
    let export_dir = cfg.export_path();
    if !export_dir.exists() {
        std::fs::create_dir_all(&export_dir)?;
    }

    println!("📄 Config file : {}", path.display());
    println!("📁 Export dir  : {}", export_dir.display());
    println!("🎉 FloatChat initialization completed!");
    Ok(())
}
