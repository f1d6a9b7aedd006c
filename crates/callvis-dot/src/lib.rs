//! DOT rendering for call graphs.
//!
//! A [`Graph`] holds a tree of [`Cluster`]s (each owning its [`Node`]s and
//! child clusters) and a flat list of [`Edge`]s that refer to nodes by id.
//! [`render`] walks the tree depth-first and writes a Graphviz `digraph`
//! with one nested `subgraph "cluster_<id>"` per cluster.
//!
//! Output is deterministic: attributes are emitted in key order, sibling
//! clusters in id order, nodes and edges in insertion order.
//!
//! # Module Structure
//!
//! - [`attrs`]: attribute sets and their inline/block formatting
//! - [`graph`]: the node, edge, cluster and graph model
//! - [`options`]: global graph settings
//! - [`render`]: document emission
//! - [`dot`]: escaping and the buffered line writer
//!
//! ```
//! use callvis_dot::{Cluster, Edge, Graph, Node, render_to_string};
//!
//! let mut root = Cluster::new("main");
//! root.add_node(Node::new("main.main").with_attr("label", "main"));
//! root.add_node(Node::new("main.run"));
//!
//! let mut graph = Graph::new("demo", root);
//! graph.add_edge(Edge::new("main.main", "main.run"));
//!
//! let dot = render_to_string(&graph).unwrap();
//! assert!(dot.contains(r#""main.main" -> "main.run" [  ]"#));
//! ```

pub mod attrs;
pub mod dot;
pub mod graph;
pub mod options;
pub mod render;

pub use attrs::Attrs;
pub use graph::{Cluster, Edge, Graph, Node};
pub use options::{DEFAULT_MINLEN, DEFAULT_NODESEP, GraphOptions};
pub use render::{GRAPH_NAME, MAX_CLUSTER_DEPTH, render, render_to_string};
