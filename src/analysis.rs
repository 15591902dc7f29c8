//! The batch pipeline: edge list in, distribution and region matrix out.

use tracing::info;

use crate::{
    attributes::{self, Attributes},
    config::AnalysisConfig,
    distribution::Distribution,
    graph::{Graph, NodeId},
    lexicon::{self, Lexicon},
    parse,
    region::{self, Region, RegionMatrix},
    report,
};

/// Everything computed by one run.
#[derive(Debug)]
pub struct Analysis {
    pub graph: Graph<NodeId>,
    pub distribution: Distribution,
    pub regions: Vec<Region<NodeId>>,
    pub matrix: RegionMatrix,
    pub lexicon: Option<Lexicon>,
    pub attributes: Option<Attributes>,
}

/// Runs the analysis described by `config`.
///
/// The region matrix dump is written to `config.output` when one is set, and only once every
/// computation has succeeded.
pub fn run(config: &AnalysisConfig) -> Result<Analysis, crate::Error> {
    // Validate the cheap setting before reading anything.
    if config.region_size == 0 {
        return Err(crate::Error::InvalidRegionSize);
    }

    let graph = parse::load_edges(&config.links)?;

    let lexicon = config
        .lexicon
        .as_deref()
        .map(lexicon::load_lexicon)
        .transpose()?;

    let attributes = config
        .attributes
        .as_deref()
        .map(|dir| attributes::load(dir, graph.vertices()));

    let distribution = Distribution::collect_with_threads(&graph, config.threads);

    let regions = region::partition(graph.vertices(), config.region_size)?;
    let matrix = RegionMatrix::compute_with_threads(&graph, &regions, config.threads)?;

    if let Some(output) = &config.output {
        report::save_region_matrix(output, &matrix)?;
        info!(path = %output.display(), "wrote region path lengths");
    }

    Ok(Analysis {
        graph,
        distribution,
        regions,
        matrix,
        lexicon,
        attributes,
    })
}
