use clap::Parser;
use fontfall::{Config, FontfallError, ProcessReport, TtfMetricsProvider, process_css};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Adds metric-adjusted fallback `@font-face` rules to a style sheet.
#[derive(Parser, Debug)]
#[command(name = "fontfall", version, about)]
struct Cli {
    /// JSON config file with the `fontTypes` mapping
    #[arg(short, long)]
    config: PathBuf,

    /// Style sheet to process
    input: PathBuf,

    /// Where to write the result (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(report) => {
            for warning in report.format_warnings(&cli.input.display().to_string()) {
                eprintln!("warning: {}", warning);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<ProcessReport, FontfallError> {
    let config = Config::from_path(&cli.config)?;
    let plugin = config.into_builder().build(Arc::new(TtfMetricsProvider::new()))?;

    let css = tokio::fs::read_to_string(&cli.input).await?;
    let processed = process_css(&css, &plugin).await?;

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, &processed.css).await?;
            log::info!("Wrote '{}'", path.display());
        }
        None => print!("{}", processed.css),
    }
    Ok(processed.report)
}
