use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use pathscope::{
    analysis,
    config::AnalysisConfig,
    distribution::SIX_DEGREES,
    region::DEFAULT_REGION_SIZE,
    report,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "pathscope",
    version,
    about = "Shortest path length distribution and region matrix for an edge list"
)]
struct Cli {
    /// Edge-list file, one "<id> <id>" pair per line.
    links: PathBuf,

    /// Write the region matrix dump to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of vertices per region.
    #[arg(short, long, default_value_t = DEFAULT_REGION_SIZE)]
    region_size: usize,

    /// Worker threads for the breadth-first searches.
    #[arg(short = 'j', long, default_value_t = 1)]
    threads: usize,

    /// Optional "<id> <label>" file.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Optional directory of "<id>.txt" attribute files.
    #[arg(long)]
    attributes: Option<PathBuf>,

    /// Hop bound for the small-world check.
    #[arg(long, default_value_t = SIX_DEGREES)]
    six_degrees: u32,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            links: self.links.clone(),
            output: self.output.clone(),
            region_size: self.region_size,
            threads: self.threads,
            lexicon: self.lexicon.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PATHSCOPE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "pathscope=debug,info"
        } else {
            "pathscope=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config();

    let analysis = analysis::run(&config)
        .with_context(|| format!("failed to analyse {}", config.links.display()))?;

    let distribution = &analysis.distribution;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::write_distribution(&mut out, distribution).context("failed to write report")?;
    writeln!(
        out,
        "share of paths within {} hops: {:.2}",
        cli.six_degrees,
        distribution.fraction_within(cli.six_degrees)
    )
    .context("failed to write report")?;
    writeln!(
        out,
        "small world (mean within {} hops): {}",
        cli.six_degrees,
        if distribution.is_small_world(cli.six_degrees) {
            "yes"
        } else {
            "no"
        }
    )
    .context("failed to write report")?;

    if let Some(attributes) = &analysis.attributes {
        info!(
            max_attributes = attributes.max_count(),
            warnings = attributes.warnings().len(),
            "attributes loaded"
        );
    }
    if let Some(lexicon) = &analysis.lexicon {
        info!(labels = lexicon.len(), "lexicon loaded");
    }

    Ok(())
}
