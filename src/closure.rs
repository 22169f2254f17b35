//! Selection closure over the hosting graph.

use crate::graph_source::GraphSource;
use crate::types::{EdgeRef, NodeRef, SelectionSet};

/// Expands a node/edge selection into the consistent connected subset.
///
/// Every selected edge's endpoints become selected. When the caller supplied
/// no explicit edges and selected at least two nodes, edges whose endpoints
/// are both selected are added back; explicit edges suppress that scan so an
/// edge the caller left out stays out. The output always contains the input,
/// and running the closure on its own output returns it unchanged.
pub fn closure(graph: &dyn GraphSource, nodes: &[NodeRef], edges: &[EdgeRef]) -> SelectionSet {
  let mut selection = SelectionSet::new();
  for node in nodes {
    selection.insert_node(node.clone());
  }
  for edge in edges {
    selection.insert_edge(edge.clone());
  }

  if edges.is_empty() && selection.node_count() >= 2 {
    let mut induced: Vec<EdgeRef> = Vec::new();
    graph.for_each_edge(&mut |edge| {
      if selection.contains_node(&edge.source) && selection.contains_node(&edge.target) {
        induced.push(edge.clone());
      }
    });
    for edge in induced {
      selection.insert_edge(edge);
    }
  }

  let endpoints: Vec<NodeRef> = selection
    .edges()
    .flat_map(|edge| {
      let (source, target) = graph.endpoints(edge);
      [source, target]
    })
    .collect();
  for node in endpoints {
    selection.insert_node(node);
  }

  tracing::debug!(
    nodes = selection.node_count(),
    edges = selection.edge_count(),
    "selection closure computed"
  );
  selection
}
