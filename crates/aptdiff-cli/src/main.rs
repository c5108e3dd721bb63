//! aptdiff CLI
//!
//! Compare or save APT package snapshots

use aptdiff_core::logging_facility::{self, Profile};
use clap::Parser;
use tracing::Level;

mod commands;
mod config;

use config::{Action, OutputFormat, RunConfig};

#[derive(Debug, Parser)]
#[command(name = "aptdiff", version)]
#[command(about = "Compare or save APT packages", long_about = None)]
struct Cli {
    /// Compare two APT snapshots or save an APT snapshot
    #[arg(value_enum, default_value_t = Action::Compare)]
    action: Action,

    /// Target APT snapshot, defaults to the current directory
    target: Option<String>,

    /// Source APT snapshot, defaults to the current system
    source: Option<String>,

    /// Leave package details and versions out of the comparison
    #[arg(short, long)]
    summary: bool,

    /// Filter library and version noise out of the comparison
    #[arg(short, long)]
    filter: bool,

    /// Swap source and target before comparing
    #[arg(short, long)]
    reverse: bool,

    /// Differential output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log as JSON lines instead of plain text
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn log_profile(&self) -> Profile {
        if self.log_json {
            Profile::Production
        } else {
            Profile::Development
        }
    }

    fn into_config(self) -> Result<RunConfig, Box<dyn std::error::Error>> {
        let cwd = std::env::current_dir()?;
        let (source, target) =
            config::resolve_endpoints(self.action, self.target, self.source, &cwd);
        Ok(RunConfig {
            action: self.action,
            source,
            target,
            summary: self.summary,
            filter: self.filter,
            reverse: self.reverse,
            format: self.format,
        })
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            std::process::exit(code);
        }
    };

    logging_facility::init(cli.log_profile(), cli.log_level());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.into_config()?;
    match config.action {
        Action::Compare => commands::compare::execute(&config),
        Action::Save => commands::save::execute(&config),
    }
}
