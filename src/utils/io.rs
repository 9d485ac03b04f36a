use crate::graph::Graph;
use crate::selection::lookup::{CenterSet, SelectionLookup};
use crate::selection::node_selection::NodeSelection;
use crate::types::*;
use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

/// reads a graph in the fmi text format
///
/// the header consists of comment lines starting with '#' and a blank line,
/// followed by the node count and the edge count on separate lines, then one
/// line per node (`id id2 lat lng elevation [level]`) and one line per edge
/// (`from to weight speed type [...]`), the optional level column is returned
/// as the node ranks of a contraction hierarchy sorted graph
pub fn read_fmi_graph(path: &Path) -> Result<(Graph, Option<Ranks>)> {
    let file = File::open(path)
        .with_context(|| format!("unable to open graph file {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let num_nodes: usize = next_content_line(&mut lines)?
        .trim()
        .parse()
        .context("invalid node count")?;
    let num_edges: usize = next_content_line(&mut lines)?
        .trim()
        .parse()
        .context("invalid edge count")?;

    let mut lats: Vec<f64> = Vec::with_capacity(num_nodes);
    let mut lngs: Vec<f64> = Vec::with_capacity(num_nodes);
    let mut levels: Vec<Rank> = Vec::new();

    for node_index in 0..num_nodes {
        let line = next_content_line(&mut lines)
            .with_context(|| format!("missing record for node {}", node_index))?;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() < 5 {
            bail!(
                "record for node {} has {} fields, expected at least 5",
                node_index,
                fields.len()
            );
        }

        let lat: f64 = fields[2]
            .parse()
            .with_context(|| format!("invalid latitude for node {}", node_index))?;
        let lng: f64 = fields[3]
            .parse()
            .with_context(|| format!("invalid longitude for node {}", node_index))?;

        lats.push(lat);
        lngs.push(lng);

        if fields.len() >= 6 {
            let level: Rank = fields[5]
                .parse()
                .with_context(|| format!("invalid level for node {}", node_index))?;
            levels.push(level);
        }
    }

    if !levels.is_empty() && levels.len() != num_nodes {
        bail!(
            "only {} of {} node records carry a level",
            levels.len(),
            num_nodes
        );
    }

    let mut adj_list: Vec<Vec<(NodeId, Distance)>> = vec![Vec::new(); num_nodes];

    for edge_index in 0..num_edges {
        let line = next_content_line(&mut lines)
            .with_context(|| format!("missing record for edge {}", edge_index))?;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() < 3 {
            bail!(
                "record for edge {} has {} fields, expected at least 3",
                edge_index,
                fields.len()
            );
        }

        let from: usize = fields[0]
            .parse()
            .with_context(|| format!("invalid source of edge {}", edge_index))?;
        let to: usize = fields[1]
            .parse()
            .with_context(|| format!("invalid target of edge {}", edge_index))?;
        let weight: Distance = fields[2]
            .parse()
            .with_context(|| format!("invalid weight of edge {}", edge_index))?;

        if from >= num_nodes || to >= num_nodes {
            bail!("edge {} connects nodes outside of the graph", edge_index);
        }

        adj_list[from].push((to as NodeId, weight));
    }

    let graph = Graph::new(adj_list, lats, lngs);
    let ranks = if levels.is_empty() {
        None
    } else {
        Some(levels)
    };

    Ok((graph, ranks))
}

fn next_content_line(lines: &mut Lines<BufReader<File>>) -> Result<String> {
    for line in lines {
        let line = line.context("unable to read graph file")?;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        return Ok(line);
    }

    bail!("unexpected end of graph file");
}

/// writes the out and in label of every node as one line each, entries are
/// comma joined (selection_id,distance) tuples, the selection centers go into
/// a side file indexed by selection id
pub fn write_label_files(lookup: &SelectionLookup, directory: &Path) -> Result<()> {
    let labels_path = directory.join("labels.txt");
    let file = File::create(&labels_path)
        .with_context(|| format!("unable to create {}", labels_path.display()))?;
    let mut writer = BufWriter::new(file);

    for node in 0..lookup.num_nodes() as NodeId {
        writeln!(writer, "{} {}", node, join_entries(lookup.out_label(node)))?;
        writeln!(writer, "{} {}", node, join_entries(lookup.in_label(node)))?;
    }

    writer.flush()?;

    let centers_path = directory.join("centers.txt");
    let file = File::create(&centers_path)
        .with_context(|| format!("unable to create {}", centers_path.display()))?;
    let mut writer = BufWriter::new(file);

    for center in lookup.centers() {
        writeln!(writer, "{}", center)?;
    }

    writer.flush()?;

    Ok(())
}

fn join_entries(entries: &CenterSet) -> String {
    entries
        .iter()
        .map(|(selection_id, distance)| format!("({},{})", selection_id, distance))
        .collect::<Vec<String>>()
        .join(",")
}

/// one json file per selection with patches, coordinates and center
pub fn write_selection_dumps(
    selections: &[NodeSelection],
    graph: &Graph,
    directory: &Path,
) -> Result<()> {
    let selection_folder = directory.join("selections");
    fs::create_dir_all(&selection_folder)
        .with_context(|| format!("unable to create {}", selection_folder.display()))?;

    for (index, selection) in selections.iter().enumerate() {
        let path = selection_folder.join(format!("selection-{}.json", index));
        let file =
            File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;

        serde_json::to_writer_pretty(BufWriter::new(file), &selection.to_json(graph))
            .with_context(|| format!("unable to write {}", path.display()))?;
    }

    Ok(())
}
