use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use selection_labels::caching_dijkstra::CachingDijkstra;
use selection_labels::graph::Graph;
use selection_labels::hub_labels::HubLabels;
use selection_labels::oracle::DistanceOracle;
use selection_labels::selection::center::MiddleCenterCalculator;
use selection_labels::selection::full_calculator::FullSelectionCalculator;
use selection_labels::selection::optimizer::SelectionOptimizer;
use selection_labels::types::Distance;
use selection_labels::utils::{io, measure_time};
use std::path::PathBuf;

#[derive(Parser)]
struct Opts {
    /// file containing the graph structure in the fmi format
    #[clap(short, long)]
    graph: PathBuf,

    /// existing folder to write the label files and selection dumps to
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// distance up to which pairs are resolved without a selection
    #[clap(short, long, default_value = "0")]
    prune: Distance,

    /// maximum number of selections per node that are not centered at the node itself
    #[clap(short, long)]
    max_selections: Option<usize>,

    /// contraction hierarchy sorted fmi graph, enables the hub label distance oracle
    #[clap(short, long)]
    fmi_graph: Option<PathBuf>,

    /// seed for the random pair sampling
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let opts = Opts::parse();

    if let Some(output) = &opts.output {
        if !output.is_dir() {
            bail!("output folder {} does not exist", output.display());
        }
    }

    let (graph, _) = io::read_fmi_graph(&opts.graph)?;
    info!(
        "graph loaded, {} nodes, {} forward edges",
        graph.num_nodes(),
        graph
            .node_ids()
            .map(|node| graph.forward_neighbours(node).len())
            .sum::<usize>()
    );

    match &opts.fmi_graph {
        Some(ch_path) => {
            let (ch_graph, ranks) = io::read_fmi_graph(ch_path)?;
            let ranks = ranks.context("the contraction hierarchy graph has no level column")?;

            let (label_time, oracle) = measure_time(|| HubLabels::new(&ch_graph, &ranks));
            info!("hub label oracle built in {:?}", label_time);

            run_selection(&graph, &oracle, &opts)
        }
        None => {
            let (cache_time, mut oracle) = measure_time(|| CachingDijkstra::new(&graph));
            info!("distance cache built in {:?}", cache_time);

            let result = run_selection(&graph, &oracle, &opts);
            oracle.destroy();

            result
        }
    }
}

fn run_selection<O: DistanceOracle>(graph: &Graph, oracle: &O, opts: &Opts) -> Result<()> {
    let center_calculator = MiddleCenterCalculator::new(graph);
    let mut full_calculator =
        FullSelectionCalculator::new(graph, oracle, center_calculator, opts.prune, opts.seed);

    let (selection_time, mut selections) =
        measure_time(|| full_calculator.calculate_all_selections());
    info!(
        "discovered {} selections in {:?}",
        selections.len(),
        selection_time
    );

    // heavy patches first, so they receive the small selection ids
    selections.sort_by(|first, second| second.weight().cmp(&first.weight()));

    if let Some(output) = &opts.output {
        io::write_selection_dumps(&selections, graph, output)?;
    }

    let mut optimizer = SelectionOptimizer::new(
        graph.num_nodes(),
        selections,
        oracle,
        opts.prune,
        opts.max_selections,
    );

    let (optimize_time, _) = measure_time(|| optimizer.optimize());
    let lookup = optimizer.into_lookup();
    info!(
        "optimized lookup in {:?}, {:.2} selections per node",
        optimize_time,
        lookup.average_selections_per_node()
    );

    if let Some(output) = &opts.output {
        io::write_label_files(&lookup, output)?;
    }

    Ok(())
}
