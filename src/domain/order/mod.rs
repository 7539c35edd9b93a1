//! Stage ordering: constraint declarations, cycle detection, and order resolution.

pub mod constraint;
pub mod cycle_finder;
pub mod error;
pub mod graph;
pub mod resolver;

pub use constraint::{DependsOnBuilder, OrderConstraint};
pub use cycle_finder::CycleFinder;
pub use error::OrderError;
pub use graph::{ConstraintGraph, DirectedGraph};
pub use resolver::OrderResolver;
