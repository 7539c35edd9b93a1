//! chainorder: resolve the execution order of processing stages from declared constraints.
//!
//! Constraints are either "stage X depends on stage Y" (X runs after Y) or "stage X is last".
//! [`OrderResolver`] validates them (exactly one last stage, no dependency cycle) and orders
//! the stages, keeping the declared order wherever nothing constrains it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::FileChainSource;
use app::commands::{check, resolve};

pub use app::commands::check::CheckOutcome;
pub use app::commands::resolve::{RankedStage, ResolveOutcome};
pub use domain::{
    AppError, ChainConfig, ChainFormat, ConstraintGraph, CycleFinder, DirectedGraph,
    OrderConstraint, OrderError, OrderResolver, StageId,
};
pub use ports::{ChainSource, StageRegistration};

// =============================================================================
// Chain File API
// =============================================================================

/// Resolve the stage order declared in a chain file.
///
/// The file format follows its extension (`.yml`, `.yaml`, or `.toml`).
pub fn resolve_chain(path: &Path) -> Result<ResolveOutcome, AppError> {
    resolve::execute(&FileChainSource::new(path))
}

/// Validate that the constraints declared in a chain file are satisfiable.
pub fn check_chain(path: &Path) -> Result<CheckOutcome, AppError> {
    check::execute(&FileChainSource::new(path))
}
