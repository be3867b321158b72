use anyhow::Result;
use clap::Parser;
use laddergram::chart::ChartComposer;
use laddergram::config;
use laddergram::input::{DirectScores, PromptScoreSource, ScoreSource};
use laddergram::output::ChartWriter;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Engineering Ladder Assessment - generate a radar chart visualization of
/// technical leadership skills across 5 dimensions.
#[derive(Debug, Parser)]
#[command(name = "laddergram", version, after_help = AFTER_HELP)]
struct Cli {
    /// Comma-separated scores in dimension order, e.g. 3,2,4,1,5.
    /// Skips the interactive prompt.
    #[arg(long, value_delimiter = ',')]
    scores: Option<Vec<f64>>,

    /// Directory the chart is written into (overrides the configured default)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

const AFTER_HELP: &str = "\
Assessment dimensions:
  Technology  Technical skill and knowledge depth
  System      System design and architecture abilities
  People      Team collaboration and mentoring skills
  Process     Process improvement and methodology skills
  Influence   Scope of impact and leadership reach

Each dimension is scored from 1 to 5. The output is a radar chart saved as
engineering_ladder_<timestamp>.png in the output directory.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(out_dir) = cli.out_dir {
        cfg.output_dir = out_dir;
    }

    let mut source: Box<dyn ScoreSource> = match cli.scores {
        Some(values) => Box::new(DirectScores::new(values, cfg.scores)),
        None => Box::new(PromptScoreSource::new(
            io::stdin().lock(),
            io::stdout(),
            cfg.scores,
        )),
    };
    let Some(scores) = source.collect()? else {
        return Ok(());
    };

    let composer = ChartComposer::new(cfg);
    let surface = composer.render_bitmap(&scores)?;
    let writer = ChartWriter::new(composer.config().output_dir.clone());
    let path = writer.write(&surface)?;
    println!("\nRadar chart saved as '{}'", path.display());
    Ok(())
}
