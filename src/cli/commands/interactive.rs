use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::parser::RecordParser;
use crate::errors::{AppError, AppResult};
use crate::models::PairOrder;
use std::io::{self, BufRead, Write};

const END_COMMAND: &str = "END";

/// Handle the `interactive` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Interactive { pair_order } = cmd {
        let order = pair_order.unwrap_or(cfg.pair_order);
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_loop(stdin.lock(), stdout.lock(), order)?;
    }
    Ok(())
}

/// Prompts for file names until `END` or end of input. A failing file never
/// stops the loop.
pub fn run_loop<R: BufRead, W: Write>(input: R, mut out: W, order: PairOrder) -> AppResult<()> {
    let mut lines = input.lines();

    loop {
        writeln!(out, "Enter file name - to get the statistics")?;
        writeln!(out, "Enter \"{END_COMMAND}\" to exit the application!")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        // only the line terminator is stripped; " END " is a file name
        let name = line.strip_suffix('\r').unwrap_or(&line);
        if name == END_COMMAND {
            break;
        }

        writeln!(out, "{}", analyze_file(name, order))?;
    }

    Ok(())
}

fn analyze_file(name: &str, order: PairOrder) -> String {
    let result = read_input(name).and_then(|content| {
        Core::analyze_str(&content, &RecordParser::new(), order).map_err(AppError::from)
    });

    match result {
        Ok(analysis) => analysis.report.to_string(),
        Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            format!("You entered non-existing file name! {e}")
        }
        Err(AppError::Io(e)) => format!("An error occurred while reading the file! {e}"),
        Err(e) => {
            tracing::warn!(file = name, "load failed: {e}");
            e.to_string()
        }
    }
}
