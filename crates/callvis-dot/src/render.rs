//! Serialization of a [`Graph`] into a DOT document.

use std::io::Write;

use tracing::debug;

use callvis_error::{Error, Result};

use crate::dot::{DotWriter, escape, quote};
use crate::graph::{Cluster, Edge, Graph, Node};

/// Name of the emitted `digraph`.
pub const GRAPH_NAME: &str = "callvis";

/// Clusters nested deeper than this abort rendering.
pub const MAX_CLUSTER_DEPTH: usize = 256;

/// Fixed graph-level style directives, emitted after the title.
const GRAPH_STYLE: [(&str, &str); 8] = [
    ("labeljust", "l"),
    ("fontname", "Ubuntu"),
    ("fontsize", "13"),
    ("rankdir", "LR"),
    ("bgcolor", "lightgray"),
    ("style", "solid"),
    ("penwidth", "0.5"),
    ("pad", "0.0"),
];

/// Default node style.
const NODE_STYLE: &str = r#"shape="ellipse" style="filled" fillcolor="honeydew" fontname="Ubuntu" penwidth="1.0" margin="0.05,0.0""#;

/// Render `graph` and write the whole document to `out` in a single write.
///
/// The document is built in memory first, so a formatting failure leaves
/// `out` untouched. Errors from `out` are returned as-is, with operation
/// `dot::render`.
pub fn render<W: Write + ?Sized>(graph: &Graph, out: &mut W) -> Result<()> {
    let document = render_to_string(graph)?;
    out.write_all(document.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| {
            Error::from(err)
                .with_operation("dot::render")
                .with_context("bytes", document.len().to_string())
        })
}

/// Totals gathered while walking the cluster tree.
#[derive(Debug, Default)]
struct RenderStats {
    nodes: usize,
    clusters: usize,
}

/// Render `graph` into a DOT string.
///
/// Fails with `ConfigInvalid` if the graph options do not pass
/// [`GraphOptions::validate`](crate::GraphOptions::validate), and with
/// `InvariantViolation` if clusters nest deeper than [`MAX_CLUSTER_DEPTH`].
pub fn render_to_string(graph: &Graph) -> Result<String> {
    graph
        .options
        .validate()
        .map_err(|err| err.with_operation("dot::render_to_string"))?;

    let estimated_size = graph.root.nodes.len() * 64 + graph.edges.len() * 64 + 4096;
    let mut w = DotWriter::with_capacity(estimated_size);
    let mut stats = RenderStats::default();

    w.open(format_args!("digraph {GRAPH_NAME} {{"))?;
    w.line(format_args!("label=\"{}\";", escape(&graph.title)))?;
    for (key, value) in GRAPH_STYLE {
        w.line(format_args!("{key}=\"{value}\";"))?;
    }
    w.line(format_args!("nodesep=\"{}\";", graph.options.nodesep))?;
    w.blank();
    w.line(format_args!("node [{NODE_STYLE}];"))?;
    w.line(format_args!("edge [minlen=\"{}\"]", graph.options.minlen))?;
    w.blank();

    render_cluster(&mut w, &graph.root, 0, &mut stats)?;

    if !graph.edges.is_empty() {
        w.blank();
    }
    for edge in &graph.edges {
        render_edge(&mut w, edge)?;
    }

    w.close()?;
    let document = w.finish();

    debug!(
        title = %graph.title,
        nodes = stats.nodes,
        clusters = stats.clusters,
        edges = graph.edges.len(),
        bytes = document.len(),
        "rendered dot graph"
    );
    Ok(document)
}

/// Recursively render a cluster as nested subgraphs.
///
/// The depth check runs before anything else touches the subtree, so an
/// over-deep tree is rejected without deeper recursion.
fn render_cluster(
    w: &mut DotWriter,
    cluster: &Cluster,
    depth: usize,
    stats: &mut RenderStats,
) -> Result<()> {
    if depth > MAX_CLUSTER_DEPTH {
        return Err(Error::invariant_violation(format!(
            "cluster nesting exceeds {MAX_CLUSTER_DEPTH} levels"
        ))
        .with_operation("dot::render_cluster")
        .with_context("cluster", cluster.id.clone()));
    }
    stats.clusters += 1;
    stats.nodes += cluster.nodes.len();

    w.open(format_args!("subgraph {} {{", quote(&cluster.name())))?;

    for line in cluster.attrs.format_block().lines() {
        w.line(format_args!("{line}"))?;
    }

    for node in &cluster.nodes {
        render_node(w, node)?;
    }

    for child in cluster.clusters.values() {
        render_cluster(w, child, depth + 1, stats)?;
    }

    w.close()
}

fn render_node(w: &mut DotWriter, node: &Node) -> Result<()> {
    w.line(format_args!(
        "{} [ {} ]",
        quote(node.name()),
        node.attrs.format_inline()
    ))
}

fn render_edge(w: &mut DotWriter, edge: &Edge) -> Result<()> {
    w.line(format_args!(
        "{} -> {} [ {} ]",
        quote(edge.from()),
        quote(edge.to()),
        edge.attrs.format_inline()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attrs;
    use crate::options::GraphOptions;
    use callvis_error::ErrorKind;

    fn nested(depth: usize) -> Cluster {
        let mut root = Cluster::new("c0");
        let mut current = &mut root;
        for i in 1..=depth {
            current = current.cluster_mut(&format!("c{i}"));
        }
        root
    }

    #[test]
    fn test_header_lines() {
        let graph = Graph::new("demo", Cluster::new("root"))
            .with_options(GraphOptions::new().with_minlen(3).with_nodesep(1.0));
        let out = render_to_string(&graph).unwrap();
        assert!(out.starts_with("digraph callvis {\n    label=\"demo\";\n"));
        assert!(out.contains("    rankdir=\"LR\";\n"));
        assert!(out.contains("    nodesep=\"1\";\n"));
        assert!(out.contains("    edge [minlen=\"3\"]\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let graph = Graph::new(r#"pkg "main""#, Cluster::new("root"));
        let out = render_to_string(&graph).unwrap();
        assert!(out.contains(r#"label="pkg \"main\"";"#));
    }

    #[test]
    fn test_cluster_attrs_indented_one_per_line() {
        let mut root = Cluster::new("root");
        root.attrs = Attrs::new().with("label", "main").with("bgcolor", "#e6ecfa");
        let out = render_to_string(&Graph::new("t", root)).unwrap();
        assert!(out.contains(
            "    subgraph \"cluster_root\" {\n        bgcolor=\"#e6ecfa\";\n        label=\"main\";\n"
        ));
    }

    #[test]
    fn test_node_ids_are_quoted_and_escaped() {
        let mut root = Cluster::new("root");
        root.add_node(Node::new(r#"(*T).say "hi""#));
        let out = render_to_string(&Graph::new("t", root)).unwrap();
        assert!(out.contains(r#""(*T).say \"hi\"" [  ]"#));
    }

    #[test]
    fn test_invalid_options_rejected_before_output() {
        let mut graph = Graph::new("t", Cluster::new("root"));
        graph.options.nodesep = f64::NAN;
        let err = render_to_string(&graph).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.operation(), "dot::render_to_string");

        let mut buf = Vec::new();
        assert!(render(&graph, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unsafe_attribute_keys_quoted_in_output() {
        let mut root = Cluster::new("root").with_attr("font name", "Ubuntu");
        root.add_node(Node::new("n").with_attr(r#"x"]"#, "1"));
        let out = render_to_string(&Graph::new("t", root)).unwrap();
        assert!(out.contains(r#"        "font name"="Ubuntu";"#));
        assert!(out.contains(r#""n" [ "x\"]"="1" ]"#));
    }

    #[test]
    fn test_depth_cap() {
        let ok = Graph::new("t", nested(MAX_CLUSTER_DEPTH));
        assert!(render_to_string(&ok).is_ok());

        let too_deep = Graph::new("t", nested(MAX_CLUSTER_DEPTH + 1));
        let err = render_to_string(&too_deep).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.operation(), "dot::render_cluster");
    }

    #[test]
    fn test_very_deep_tree_rejected_without_overflow() {
        let depth = 100_000;
        let graph = Graph::new("t", nested(depth));
        let result = render_to_string(&graph);
        // dropping the chain recurses once per level
        std::mem::forget(graph);

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert!(
            err.context()
                .contains(&("cluster", format!("c{}", MAX_CLUSTER_DEPTH + 1)))
        );
    }
}
