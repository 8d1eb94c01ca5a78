use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        dataset,
        file,
        search,
        watchlist,
        force,
    } = cmd
    {
        let req = ExportRequest {
            format: *format,
            dataset: *dataset,
            file: file.clone(),
            search: search.clone(),
            watchlist_only: *watchlist,
            force: *force,
        };

        ExportLogic::export(&req, cfg)?;
    }
    Ok(())
}
