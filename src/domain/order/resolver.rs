//! Stage order resolution.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, info, warn};

use super::{ConstraintGraph, CycleFinder, OrderConstraint, OrderError};
use crate::ports::StageRegistration;

/// Resolves a total stage order from declared constraints.
pub struct OrderResolver;

impl OrderResolver {
    /// Order `stages` so that every constraint holds.
    ///
    /// With no constraints the input comes back unchanged. Otherwise exactly one stage must be
    /// pinned last and the dependencies must be acyclic.
    pub fn resolve<S>(
        stages: Vec<S>,
        constraints: &[OrderConstraint<S>],
    ) -> Result<Vec<S>, OrderError<S>>
    where
        S: Eq + Hash + Clone + fmt::Debug + fmt::Display,
    {
        Self::resolve_by(stages, constraints, |stage| stage)
    }

    /// Order arbitrary items by the stage each one carries.
    ///
    /// Several items may share a stage; they keep their relative input order.
    pub fn resolve_by<T, S, F>(
        items: Vec<T>,
        constraints: &[OrderConstraint<S>],
        key: F,
    ) -> Result<Vec<T>, OrderError<S>>
    where
        S: Eq + Hash + Clone + fmt::Debug + fmt::Display,
        F: Fn(&T) -> &S,
    {
        if constraints.is_empty() {
            debug!("no order constraints; keeping declared order of {} stage(s)", items.len());
            return Ok(items);
        }

        let graph = ConstraintGraph::build(constraints);

        let [last] = graph.last() else {
            return Err(OrderError::AmbiguousTerminal { stages: graph.last().to_vec() });
        };

        if let Some(path) = CycleFinder::new(&graph).run() {
            return Err(OrderError::CyclicDependency { path });
        }

        for (stage, dependency) in graph.edges() {
            if dependency == last {
                warn!("'{}' depends on last stage '{}'; '{}' stays last", stage, last, last);
            }
        }

        let keys: Vec<S> = items.iter().map(|item| key(item).clone()).collect();
        let order = Self::order(&keys, &graph, last);

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let sorted: Vec<T> = order.iter().filter_map(|&index| slots[index].take()).collect();

        info!(
            "resolved order of {} stage{}: [{}]",
            sorted.len(),
            if sorted.len() == 1 { "" } else { "s" },
            order.iter().map(|&index| keys[index].to_string()).collect::<Vec<_>>().join(", ")
        );

        Ok(sorted)
    }

    /// Resolve `registrations` and assign each its zero-based rank.
    ///
    /// Without constraints the registrations are returned untouched and no rank is assigned.
    pub fn apply<R>(
        registrations: Vec<R>,
        constraints: &[OrderConstraint<R::Stage>],
    ) -> Result<Vec<R>, OrderError<R::Stage>>
    where
        R: StageRegistration,
        R::Stage: Eq + Hash + Clone + fmt::Debug + fmt::Display,
    {
        let assign_ranks = !constraints.is_empty();

        let mut ordered = Self::resolve_by(registrations, constraints, R::stage)?;
        if assign_ranks {
            for (rank, registration) in ordered.iter_mut().enumerate() {
                registration.set_order(rank);
            }
        }
        Ok(ordered)
    }

    /// Produce input indexes in resolved order.
    ///
    /// The last stage is set aside and appended at the end. Among the rest, the next stage is
    /// the minimum under [`Self::precedence`] of those whose dependencies have all been
    /// placed. An acyclic graph always has such a stage.
    fn order<S: Eq + Hash + Clone>(
        keys: &[S],
        graph: &ConstraintGraph<S>,
        last: &S,
    ) -> Vec<usize> {
        let mut unplaced: HashMap<&S, usize> = HashMap::new();
        for key in keys {
            *unplaced.entry(key).or_default() += 1;
        }

        let (tail, mut pending): (Vec<usize>, Vec<usize>) =
            (0..keys.len()).partition(|&index| keys[index] == *last);
        let mut order = Vec::with_capacity(keys.len());

        while !pending.is_empty() {
            let is_ready = |index: &usize| {
                graph.dependencies(&keys[*index]).unwrap_or_default().iter().all(|dependency| {
                    dependency == last || unplaced.get(dependency).copied().unwrap_or(0) == 0
                })
            };
            let ready = pending
                .iter()
                .copied()
                .filter(is_ready)
                .min_by(|&a, &b| Self::precedence(keys, graph, last, a, b));
            // Acyclic dependencies always leave at least one pending stage ready.
            debug_assert!(ready.is_some(), "no ready stage among {} pending", pending.len());
            let next = ready.unwrap_or(pending[0]);

            pending.retain(|&index| index != next);
            if let Some(count) = unplaced.get_mut(&keys[next]) {
                *count -= 1;
            }
            order.push(next);
        }

        order.extend(tail);
        order
    }

    /// Compare the stages at input indexes `a` and `b`; the first rule that differs wins.
    fn precedence<S: Eq + Hash + Clone>(
        keys: &[S],
        graph: &ConstraintGraph<S>,
        last: &S,
        a: usize,
        b: usize,
    ) -> Ordering {
        let (stage_a, stage_b) = (&keys[a], &keys[b]);

        // Last comes last.
        match (stage_a == last, stage_b == last) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        if graph.depends_on(stage_a, stage_b) {
            return Ordering::Greater;
        }
        if graph.depends_on(stage_b, stage_a) {
            return Ordering::Less;
        }

        // Stages that declared no dependencies go first.
        match (graph.dependencies(stage_a).is_some(), graph.dependencies(stage_b).is_some()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => a.cmp(&b),
        }
    }
}
