//! Cycle detection over arbitrary directed graphs.

use std::collections::HashSet;

use super::DirectedGraph;

/// Finds one concrete cycle in a directed graph, if any exists.
///
/// The search starts from every node in the graph's iteration order, so a cycle is found even
/// when it is unreachable from the first start node. Which cycle is reported depends on that
/// iteration order: stable for a given graph value, unspecified across graph types.
///
/// All traversal state lives inside [`CycleFinder::run`], so one finder can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct CycleFinder<'g, G> {
    graph: &'g G,
}

impl<'g, G: DirectedGraph> CycleFinder<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Return a cyclic path, or `None` if the graph is acyclic.
    ///
    /// The path starts and ends on the same node and every consecutive pair is an edge
    /// `path[i] -> path[i + 1]`. A self-loop on `a` yields `[a, a]`.
    pub fn run(&self) -> Option<Vec<G::Node>>
    where
        G::Node: Clone,
    {
        let mut finished: HashSet<&'g G::Node> = HashSet::new();
        for start in self.graph.nodes() {
            if finished.contains(start) {
                continue;
            }
            if let Some(cycle) = self.search_from(start, &mut finished) {
                return Some(cycle);
            }
        }
        None
    }

    /// Depth-first search from `start` with an explicit stack.
    ///
    /// `on_path` holds exactly the nodes on `stack` and starts empty for every start node.
    /// A node leaves it once its successors are exhausted; it then joins `finished`, since
    /// nothing reachable from it can close a cycle on any later path either.
    fn search_from(
        &self,
        start: &'g G::Node,
        finished: &mut HashSet<&'g G::Node>,
    ) -> Option<Vec<G::Node>>
    where
        G::Node: Clone,
    {
        let mut on_path: HashSet<&'g G::Node> = HashSet::from([start]);
        let mut stack = vec![(start, self.graph.successors(start))];

        loop {
            let step = match stack.last_mut() {
                Some((_, successors)) => successors.next(),
                None => return None,
            };

            match step {
                Some(next) if on_path.contains(next) => {
                    let from = stack.iter().position(|(node, _)| *node == next).unwrap_or(0);
                    let mut path: Vec<G::Node> =
                        stack[from..].iter().map(|(node, _)| (*node).clone()).collect();
                    path.push(next.clone());
                    return Some(path);
                }
                Some(next) if finished.contains(next) => {}
                Some(next) => {
                    on_path.insert(next);
                    stack.push((next, self.graph.successors(next)));
                }
                None => {
                    if let Some((done, _)) = stack.pop() {
                        on_path.remove(done);
                        finished.insert(done);
                    }
                }
            }
        }
    }
}
