//! Contains a directed graph structure with labeled nodes.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::graph::NodeIndex;
use petgraph::visit::{Dfs, Reversed};
use petgraph::{Directed, Direction, Graph};

/// Directed graph with labeled nodes.
///
/// Internally, it uses the [Graph] implementation from petgraph.
/// Additionally, it maintains a [HashMap] which associates
/// each label with a [NodeIndex].
///
/// A [NodeIndex] is invalidated once a node is removed from the graph,
/// hence the interface only permits adding new nodes and edges.
/// Since petgraph stores the adjacency of every edge in both directions,
/// predecessors are available without maintaining a second index.
#[derive(Debug)]
pub struct LabeledGraph<NodeLabel>
where
    NodeLabel: Debug + Clone + Eq + Hash,
{
    graph: Graph<NodeLabel, (), Directed>,
    label_map: HashMap<NodeLabel, NodeIndex>,
}

impl<NodeLabel> LabeledGraph<NodeLabel>
where
    NodeLabel: Debug + Clone + Eq + Hash,
{
    /// Add a single node to the graph under a new label.
    /// Returns the [NodeIndex] of the new node,
    /// or the existing index if the label is already known.
    pub fn add_node(&mut self, node: NodeLabel) -> NodeIndex {
        match self.label_map.entry(node) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let new_index = self.graph.add_node(entry.key().clone());
                entry.insert(new_index);

                new_index
            }
        }
    }

    /// Return a [NodeIndex] for a given node label or `None`
    /// if there is no node in the graph associated with that label.
    pub fn get_node(&self, node: &NodeLabel) -> Option<NodeIndex> {
        self.label_map.get(node).cloned()
    }

    /// Return whether the given label is a node of this graph.
    pub fn contains_node(&self, node: &NodeLabel) -> bool {
        self.label_map.contains_key(node)
    }

    /// Add a new edge to the graph, registering both endpoints.
    /// Re-adding an existing edge has no effect.
    pub fn add_edge(&mut self, from: NodeLabel, to: NodeLabel) {
        let node_from = self.add_node(from);
        let node_to = self.add_node(to);

        self.graph.update_edge(node_from, node_to, ());
    }

    /// Return the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return an iterator over all node labels.
    pub fn labels(&self) -> impl Iterator<Item = &NodeLabel> + '_ {
        self.graph.node_weights()
    }

    /// Return an iterator over the direct neighbors of the given label
    /// in the given direction, or an empty iterator for an unknown label.
    pub fn neighbors<'a>(
        &'a self,
        node: &NodeLabel,
        direction: Direction,
    ) -> impl Iterator<Item = &'a NodeLabel> + 'a {
        self.get_node(node).into_iter().flat_map(move |index| {
            self.graph
                .neighbors_directed(index, direction)
                .map(move |neighbor| &self.graph[neighbor])
        })
    }

    /// Compute the set of labels reachable from the given label
    /// by a depth-first traversal in the given direction.
    /// The start label is part of the result.
    /// Returns the empty set if the label is unknown.
    pub fn reachable_from(&self, node: &NodeLabel, direction: Direction) -> HashSet<NodeLabel> {
        let mut result = HashSet::new();

        let start = match self.get_node(node) {
            Some(index) => index,
            None => return result,
        };

        match direction {
            Direction::Outgoing => {
                let mut dfs = Dfs::new(&self.graph, start);
                while let Some(index) = dfs.next(&self.graph) {
                    result.insert(self.graph[index].clone());
                }
            }
            Direction::Incoming => {
                let reversed = Reversed(&self.graph);
                let mut dfs = Dfs::new(reversed, start);
                while let Some(index) = dfs.next(reversed) {
                    result.insert(self.graph[index].clone());
                }
            }
        }

        result
    }
}

impl<NodeLabel> Default for LabeledGraph<NodeLabel>
where
    NodeLabel: Debug + Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            graph: Default::default(),
            label_map: Default::default(),
        }
    }
}
