pub mod chain;
pub mod error;
pub mod order;
pub mod stage_id;

pub use chain::{ChainConfig, ChainFormat};
pub use error::AppError;
pub use order::{
    ConstraintGraph, CycleFinder, DirectedGraph, OrderConstraint, OrderError, OrderResolver,
};
pub use stage_id::StageId;
