use selection_labels::utils::io::read_fmi_graph;
use std::fs;
use std::path::PathBuf;

fn write_temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();

    path
}

#[test]
fn reads_a_plain_fmi_graph() {
    let content = "\
# generated for the parser test
# comments end at the blank line

3
3
0 100 48.70 9.10 310
1 101 48.71 9.11 311
2 102 48.72 9.12 312
0 1 5 50 13
1 2 7 50 13
0 2 20 50 13
";
    let path = write_temp_file("selection_labels_plain.fmi", content);

    let (graph, ranks) = read_fmi_graph(&path).unwrap();

    assert_eq!(graph.num_nodes(), 3);
    assert!(ranks.is_none());

    assert_eq!(graph.forward_neighbours(0), &[(1, 5), (2, 20)]);
    assert_eq!(graph.forward_neighbours(1), &[(2, 7)]);
    assert!(graph.forward_neighbours(2).is_empty());

    assert_eq!(graph.lat_lng(1), (48.71, 9.11));

    fs::remove_file(path).unwrap();
}

#[test]
fn reads_levels_of_a_ch_sorted_graph() {
    let content = "\
# contracted variant with levels and shortcut columns

2
1
0 100 48.70 9.10 310 4
1 101 48.71 9.11 311 9
0 1 5 50 13 -1 -1
";
    let path = write_temp_file("selection_labels_ch.fmi", content);

    let (graph, ranks) = read_fmi_graph(&path).unwrap();

    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(ranks, Some(vec![4, 9]));

    fs::remove_file(path).unwrap();
}

#[test]
fn rejects_missing_files_and_truncated_input() {
    let missing = PathBuf::from("/nonexistent/graph.fmi");
    assert!(read_fmi_graph(&missing).is_err());

    let truncated = "\
2
1
0 100 48.70 9.10 310
";
    let path = write_temp_file("selection_labels_truncated.fmi", truncated);
    assert!(read_fmi_graph(&path).is_err());
    fs::remove_file(path).unwrap();
}

#[test]
fn rejects_edges_leaving_the_node_range() {
    let content = "\
2
1
0 100 48.70 9.10 310
1 101 48.71 9.11 311
0 7 5 50 13
";
    let path = write_temp_file("selection_labels_out_of_range.fmi", content);
    assert!(read_fmi_graph(&path).is_err());
    fs::remove_file(path).unwrap();
}
