//! In-memory graph model: nodes, edges, clusters and the graph itself.

use std::collections::BTreeMap;

use crate::attrs::Attrs;
use crate::options::GraphOptions;

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub attrs: Attrs,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// The name the node is emitted under.
    pub fn name(&self) -> &str {
        &self.id
    }
}

/// A directed edge between two nodes, referenced by id.
///
/// Endpoints are not checked against the cluster tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub attrs: Attrs,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

/// A nestable group of nodes, emitted as a `subgraph "cluster_<id>"`.
///
/// A cluster owns its nodes and its whole subtree of child clusters. Children
/// are keyed by id and emitted in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
    pub id: String,
    pub attrs: Attrs,
    pub nodes: Vec<Node>,
    pub clusters: BTreeMap<String, Cluster>,
}

impl Cluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Name of the DOT subgraph. The `cluster_` prefix keeps it apart from
    /// node ids and makes Graphviz draw a box around it.
    pub fn name(&self) -> String {
        format!("cluster_{}", self.id)
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Insert a child cluster, returning any previous child with the same id.
    pub fn insert_cluster(&mut self, cluster: Cluster) -> Option<Cluster> {
        self.clusters.insert(cluster.id.clone(), cluster)
    }

    /// Get the child cluster with `id`, creating an empty one if missing.
    pub fn cluster_mut(&mut self, id: &str) -> &mut Cluster {
        self.clusters
            .entry(id.to_string())
            .or_insert_with(|| Cluster::new(id))
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .or_else(|| self.clusters.values().find_map(|c| c.find_node(id)))
    }
}

/// A complete graph ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub title: String,
    pub options: GraphOptions,
    pub root: Cluster,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(title: impl Into<String>, root: Cluster) -> Self {
        Self {
            title: title.into(),
            options: GraphOptions::default(),
            root,
            edges: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Look up a node anywhere in the cluster tree.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.root.find_node(id)
    }

    /// Edges whose endpoints are not present in the cluster tree.
    ///
    /// Rendering never calls this; callers that want to warn about dangling
    /// edges can.
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| self.find_node(&e.from).is_none() || self.find_node(&e.to).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut root = Cluster::new("main");
        root.add_node(Node::new("main.main"));
        root.cluster_mut("fmt")
            .add_node(Node::new("fmt.Println").with_attr("label", "Println"));
        root.cluster_mut("fmt")
            .cluster_mut("io")
            .add_node(Node::new("io.Write"));

        let mut graph = Graph::new("demo", root);
        graph.add_edge(Edge::new("main.main", "fmt.Println"));
        graph.add_edge(Edge::new("fmt.Println", "os.Exit"));
        graph
    }

    #[test]
    fn test_cluster_name_is_prefixed() {
        assert_eq!(Cluster::new("net/http").name(), "cluster_net/http");
    }

    #[test]
    fn test_cluster_mut_reuses_existing() {
        let graph = sample();
        assert_eq!(graph.root.clusters.len(), 1);
        assert_eq!(graph.root.clusters["fmt"].nodes.len(), 1);
    }

    #[test]
    fn test_insert_cluster_replaces_sibling() {
        let mut root = Cluster::new("root");
        assert!(root.insert_cluster(Cluster::new("a")).is_none());
        let previous = root.insert_cluster(Cluster::new("a").with_attr("label", "A"));
        assert_eq!(previous, Some(Cluster::new("a")));
        assert_eq!(root.clusters["a"].attrs.get("label"), Some("A"));
    }

    #[test]
    fn test_find_node_searches_subtree() {
        let graph = sample();
        let node = graph.find_node("io.Write").unwrap();
        assert_eq!(node.name(), "io.Write");
        assert!(graph.find_node("missing").is_none());
    }

    #[test]
    fn test_dangling_edges() {
        let graph = sample();
        let dangling = graph.dangling_edges();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].to(), "os.Exit");
        assert_eq!(dangling[0].from(), "fmt.Println");
    }
}
