//! navscrape CLI - mutual fund NAV history downloader.

use anyhow::Result;
use clap::{Parser, Subcommand};
use navscrape_lib::{ClientConfig, DEFAULT_DUMP_PATH};
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod display;
mod logging;

use display::Format;

/// Fund downloaded when no command is given.
const EXAMPLE_FUND: &str = "BFIXED";
const EXAMPLE_START: &str = "01-01-2024";
const EXAMPLE_END: &str = "12-09-2025";
const EXAMPLE_OUTPUT: &str = "BFIXED-20250912.csv";

#[derive(Parser)]
#[command(name = "navscrape")]
#[command(about = "Download historical mutual fund NAVs as CSV", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// File receiving the raw response body (overwritten on every fetch)
    #[arg(long, global = true, env = "NAVSCRAPE_DUMP", default_value = DEFAULT_DUMP_PATH)]
    dump: PathBuf,

    /// Do not write the raw response body
    #[arg(long, global = true)]
    no_dump: bool,

    /// History endpoint to query
    #[arg(long, global = true, env = "NAVSCRAPE_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true, env = "NAVSCRAPE_TIMEOUT")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a fund's NAV history
    Download {
        /// Fund code (e.g., BFIXED, B-TREASURY)
        fund: String,

        /// Start date (dd-mm-yyyy). Defaults to 1 January of the end year.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (dd-mm-yyyy). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output file path. Defaults to <FUND>-<yyyymmdd>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Convert a previously saved history page
    Convert {
        /// Saved page, e.g. the raw response dump
        page: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// List the funds offered by the site
    Funds {
        /// Fund whose page is fetched to read the catalogue
        #[arg(long, default_value = EXAMPLE_FUND)]
        fund: String,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout: self.timeout.map(Duration::from_secs),
            dump_path: (!self.no_dump).then(|| self.dump.clone()),
            ..defaults
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let config = cli.client_config();

    let Some(command) = cli.command else {
        return commands::download::download(
            EXAMPLE_FUND,
            Some(EXAMPLE_START),
            Some(EXAMPLE_END),
            Some(PathBuf::from(EXAMPLE_OUTPUT)),
            Format::Csv,
            config,
            cli.quiet,
        )
        .await;
    };

    match command {
        Commands::Download {
            fund,
            start,
            end,
            output,
            format,
        } => {
            commands::download::download(
                &fund,
                start.as_deref(),
                end.as_deref(),
                output,
                format,
                config,
                cli.quiet,
            )
            .await
        }
        Commands::Convert {
            page,
            output,
            format,
        } => commands::convert::convert(&page, &output, format, cli.quiet),
        Commands::Funds { fund } => commands::funds::list_funds(&fund, config, cli.quiet).await,
    }
}
