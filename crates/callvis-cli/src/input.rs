//! JSON graph descriptions.
//!
//! The analysis front end hands the renderer a JSON document of this shape:
//!
//! ```json
//! {
//!   "title": "main",
//!   "options": { "minlen": 2, "nodesep": 0.35 },
//!   "root": {
//!     "id": "main",
//!     "attrs": { "label": "main" },
//!     "nodes": [ { "id": "main.main", "attrs": { "label": "main" } } ],
//!     "clusters": [ { "id": "fmt", "nodes": [ { "id": "fmt.Println" } ] } ]
//!   },
//!   "edges": [ { "from": "main.main", "to": "fmt.Println" } ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use callvis_dot::{Attrs, Cluster, Edge, Graph, Node};
use callvis_error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub options: OptionsSpec,
    pub root: ClusterSpec,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Option values carried in the input itself. Lowest precedence.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsSpec {
    pub minlen: Option<u32>,
    pub nodesep: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterSpec {
    pub id: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub clusters: Vec<ClusterSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl GraphSpec {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|err| Error::deserialization_failed("graph description", err))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("input::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_json(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    /// Build the graph. Option values are left at their defaults; see
    /// [`crate::config::resolve_options`].
    pub fn into_graph(self) -> Result<Graph> {
        let root = self.root.into_cluster()?;
        let mut graph = Graph::new(self.title, root);
        for edge in self.edges {
            let mut built = Edge::new(edge.from, edge.to);
            built.attrs = Attrs::from_iter(edge.attrs);
            graph.add_edge(built);
        }
        Ok(graph)
    }
}

impl ClusterSpec {
    fn into_cluster(self) -> Result<Cluster> {
        let mut cluster = Cluster::new(self.id);
        cluster.attrs = Attrs::from_iter(self.attrs);

        for node in self.nodes {
            let mut built = Node::new(node.id);
            built.attrs = Attrs::from_iter(node.attrs);
            cluster.add_node(built);
        }

        for child in self.clusters {
            let child_id = child.id.clone();
            if cluster.insert_cluster(child.into_cluster()?).is_some() {
                return Err(Error::invalid_argument(format!(
                    "duplicate cluster '{child_id}'"
                ))
                .with_operation("input::into_cluster")
                .with_context("parent", cluster.id.clone()));
            }
        }

        Ok(cluster)
    }
}
