use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::parser::RecordParser;
use crate::core::ranking::{NO_PAIR_MESSAGE, rank_pairs};
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_span, whole_days};

/// Handle the `pairs` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pairs {
        file,
        pair_order,
        limit,
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

        let mut ranked = rank_pairs(&analysis.totals);
        if ranked.is_empty() {
            println!("{NO_PAIR_MESSAGE}");
            return Ok(());
        }

        if let Some(n) = limit {
            ranked.truncate(usize::try_from(*n).unwrap_or(usize::MAX));
        }

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("PAIR", 16),
            Column::new("DAYS", 8),
            Column::new("TOGETHER", 14),
        ]);
        for (rank, (pair, total)) in ranked.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                pair.to_string(),
                whole_days(*total).to_string(),
                format_span(*total),
            ]);
        }
        print!("{}", table.render());

        if let Some(out) = export {
            let format = format.unwrap_or(cfg.export_format);
            ExportLogic::export_pairs(&ranked, format, &expand_tilde(out), *force)?;
        }
    }
    Ok(())
}
