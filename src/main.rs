use clap::Parser;
use color_eyre::Result;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use loaders::loader::{AnimationConfig, DEFAULT_MAX_DELAY, DEFAULT_WIDTH, DEFAULT_WORKERS};
use loaders::{AnsiCursor, OrchestratorBuilder, SingleLoader};

/// Exit status used with `--fail-on-interrupt`, as a shell reports SIGINT.
const INTERRUPTED_EXIT: u8 = 130;

/// Animate progress bars in place, one per terminal row.
#[derive(Debug, Parser)]
#[command(name = "loaders", version, about)]
struct Cli {
    /// Draw a single bar sequentially instead of concurrent loaders
    #[arg(long)]
    single: bool,

    /// Number of cells in each bar
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of concurrent loaders
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Exclusive upper bound of the random delay between frames, in milliseconds
    #[arg(long = "max-delay-ms", default_value_t = DEFAULT_MAX_DELAY.as_millis() as u64)]
    max_delay_ms: u64,

    /// Exit with status 130 when the loaders were interrupted
    #[arg(long)]
    fail_on_interrupt: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let max_delay = Duration::from_millis(cli.max_delay_ms);

    if cli.single {
        let config = AnimationConfig::new(cli.width, 1)?.with_max_delay(max_delay)?;
        let mut cursor = AnsiCursor::stdout();
        SingleLoader::new(&config).run(&mut cursor).await;
        return Ok(ExitCode::SUCCESS);
    }

    let orchestrator = OrchestratorBuilder::new()
        .width(cli.width)
        .workers(cli.workers)
        .max_delay(max_delay)
        .build()?;
    let report = orchestrator.run().await?;

    if cli.fail_on_interrupt && report.outcome().is_interrupted() {
        return Ok(ExitCode::from(INTERRUPTED_EXIT));
    }
    Ok(ExitCode::SUCCESS)
}
