pub mod chain_file;
pub mod memory_chain_source;

pub use chain_file::FileChainSource;
pub use memory_chain_source::MemoryChainSource;
