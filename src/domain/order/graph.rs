//! Directed graph abstraction and the constraint graph built from declarations.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::OrderConstraint;

/// Read-only view of a directed graph given as node → out-edges.
///
/// Nodes that never appear in [`DirectedGraph::nodes`] have no outgoing edges.
pub trait DirectedGraph {
    type Node: Eq + Hash;

    /// Nodes with declared out-edges, in the graph's iteration order.
    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a;

    /// Out-edges of `node`; empty for unknown nodes.
    fn successors<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a;
}

impl<N: Eq + Hash, H: BuildHasher> DirectedGraph for HashMap<N, Vec<N>, H> {
    type Node = N;

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a,
    {
        self.keys()
    }

    fn successors<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a,
    {
        self.get(node).into_iter().flatten()
    }
}

impl<N: Ord + Eq + Hash> DirectedGraph for BTreeMap<N, Vec<N>> {
    type Node = N;

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a,
    {
        self.keys()
    }

    fn successors<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a,
    {
        self.get(node).into_iter().flatten()
    }
}

/// Constraints partitioned into the last-stage set and the dependency multimap.
///
/// An edge `stage -> dependency` exists for each `DependsOn` declaration. Nodes, edges,
/// and last pins keep first-declaration order with duplicates collapsed.
#[derive(Debug, Clone)]
pub struct ConstraintGraph<S> {
    last: Vec<S>,
    nodes: Vec<S>,
    index: HashMap<S, usize>,
    edges: Vec<Vec<S>>,
}

impl<S: Eq + Hash + Clone> ConstraintGraph<S> {
    /// Partition `constraints` into a graph.
    pub fn build<'c, I>(constraints: I) -> Self
    where
        I: IntoIterator<Item = &'c OrderConstraint<S>>,
        S: 'c,
    {
        let mut graph =
            Self { last: Vec::new(), nodes: Vec::new(), index: HashMap::new(), edges: Vec::new() };

        for constraint in constraints {
            match constraint {
                OrderConstraint::Last(stage) => {
                    if !graph.last.contains(stage) {
                        graph.last.push(stage.clone());
                    }
                }
                OrderConstraint::DependsOn { stage, dependency } => {
                    let slot = match graph.index.get(stage) {
                        Some(&slot) => slot,
                        None => {
                            graph.index.insert(stage.clone(), graph.nodes.len());
                            graph.nodes.push(stage.clone());
                            graph.edges.push(Vec::new());
                            graph.nodes.len() - 1
                        }
                    };
                    if !graph.edges[slot].contains(dependency) {
                        graph.edges[slot].push(dependency.clone());
                    }
                }
            }
        }

        graph
    }

    /// Stages pinned last.
    pub fn last(&self) -> &[S] {
        &self.last
    }

    /// Declared dependencies of `stage`, or `None` when it declared none at all.
    pub fn dependencies(&self, stage: &S) -> Option<&[S]> {
        self.index.get(stage).map(|&slot| self.edges[slot].as_slice())
    }

    /// Whether `stage` declared `dependency`.
    pub fn depends_on(&self, stage: &S, dependency: &S) -> bool {
        self.dependencies(stage).is_some_and(|deps| deps.contains(dependency))
    }

    /// Iterate over `(stage, dependency)` edges.
    pub fn edges(&self) -> impl Iterator<Item = (&S, &S)> {
        self.nodes
            .iter()
            .zip(&self.edges)
            .flat_map(|(stage, deps)| deps.iter().map(move |dependency| (stage, dependency)))
    }
}

impl<S: Eq + Hash> DirectedGraph for ConstraintGraph<S> {
    type Node = S;

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a,
    {
        self.nodes.iter()
    }

    fn successors<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = &'a Self::Node>
    where
        Self::Node: 'a,
    {
        self.index.get(node).map(|&slot| self.edges[slot].iter()).into_iter().flatten()
    }
}
