//! Chain source port definition.

use crate::domain::{AppError, ChainConfig};

/// Trait for loading a chain declaration.
pub trait ChainSource {
    /// Human-readable location of the declaration, for messages.
    fn describe(&self) -> String;

    /// Load and validate the declaration.
    fn load(&self) -> Result<ChainConfig, AppError>;
}
