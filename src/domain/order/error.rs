use std::fmt;

use thiserror::Error;

/// Contradictions detected while resolving a stage order.
///
/// Both kinds are configuration defects: resolving the same input again fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError<S: fmt::Debug + fmt::Display> {
    /// The number of stages pinned last is not exactly one.
    #[error("expected exactly one last stage, found {}: [{}]", .stages.len(), join(.stages, ", "))]
    AmbiguousTerminal { stages: Vec<S> },

    /// The declared dependencies contain a cycle. `path` starts and ends on the same stage.
    #[error("stage cycle detected: {}", join(.path, " -> "))]
    CyclicDependency { path: Vec<S> },
}

fn join<S: fmt::Display>(items: &[S], separator: &str) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(separator)
}
