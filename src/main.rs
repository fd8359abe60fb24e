mod input;
mod plot;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::plot::{ChartDest, ImageFormat};
use crate::report::ReportError;
use crate::report::counts::{
    NATIONALITIES_TOP_N, SCORES_TOP_N, composer_nationalities, scores_per_composer,
};
use crate::report::lifespan::{LifespanConfig, composer_dates};

/// Renders summary charts for the score corpus: composer lifespans, scores
/// per composer, and nationalities.
#[derive(Parser, Debug)]
#[command(name = "corpus-plots", version)]
struct Cli {
    /// Directory holding composers.yaml, corpus.yaml, sets.yaml, scores.yaml
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Directory the rendered charts are written to
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Output image format (svg or png)
    #[arg(long, default_value = "svg")]
    format: String,

    /// Leave the active-years overlay off the lifespan histogram
    #[arg(long)]
    skip_active: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(&Cli::parse()) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ReportError> {
    let format: ImageFormat = cli.format.parse()?;
    let lifespan = LifespanConfig {
        include_active: !cli.skip_active,
        ..LifespanConfig::default()
    };

    composer_dates(
        &cli.data,
        &lifespan,
        &ChartDest::new(&cli.out, "composer_dates", format),
    )?;
    scores_per_composer(
        &cli.data,
        SCORES_TOP_N,
        &ChartDest::new(&cli.out, "composer_scores", format),
    )?;
    composer_nationalities(
        &cli.data,
        NATIONALITIES_TOP_N,
        &ChartDest::new(&cli.out, "composer_nationalities", format),
    )?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
