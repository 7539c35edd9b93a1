//! Chain declaration files: the stages of a chain and their order constraints.

pub mod chain_config;

pub use chain_config::{ChainConfig, ChainFormat};
