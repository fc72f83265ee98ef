use crate::export::ExportFormat;
use crate::models::PairOrder;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pairtime
/// CLI application to find the employees who worked together the longest
#[derive(Parser, Debug)]
#[command(
    name = "pairtime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find the pair of employees who worked together the longest on common projects",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a file and report the pair that worked together the longest
    Analyze {
        /// Input file: employeeId, projectId, dateFrom, dateTo per line
        file: String,

        #[arg(
            long = "pair-order",
            value_enum,
            help = "How to order the two ids of a pair (default from config)"
        )]
        pair_order: Option<PairOrder>,

        #[arg(long, value_name = "FILE", help = "Also export the report to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, requires = "export", help = "Export format")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', requires = "export", help = "Overwrite the export file")]
        force: bool,
    },

    /// List every pair that worked together, longest first
    Pairs {
        /// Input file: employeeId, projectId, dateFrom, dateTo per line
        file: String,

        #[arg(long = "pair-order", value_enum)]
        pair_order: Option<PairOrder>,

        #[arg(
            long,
            short = 'n',
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Show only the first N pairs"
        )]
        limit: Option<u64>,

        #[arg(long, value_name = "FILE", help = "Also export the list to FILE")]
        export: Option<String>,

        #[arg(long, value_enum, requires = "export")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },

    /// Ask for file names on stdin until END is entered
    Interactive {
        #[arg(long = "pair-order", value_enum)]
        pair_order: Option<PairOrder>,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}
