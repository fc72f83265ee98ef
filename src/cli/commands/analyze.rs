use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::parser::RecordParser;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

/// Handle the `analyze` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        file,
        pair_order,
        export,
        format,
        force,
    } = cmd
    {
        let order = pair_order.unwrap_or(cfg.pair_order);
        let content = read_input(file)?;

        let analysis = match Core::analyze_str(&content, &RecordParser::new(), order) {
            Ok(analysis) => analysis,
            Err(e) => {
                let err = AppError::from(e);
                println!("{err}");
                return Err(err);
            }
        };

        println!("{}", analysis.report);

        if let Some(out) = export {
            let format = format.unwrap_or(cfg.export_format);
            ExportLogic::export_report(&analysis.report, format, &expand_tilde(out), *force)?;
        }
    }
    Ok(())
}
