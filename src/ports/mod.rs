mod chain_source;
mod stage_registration;

pub use chain_source::ChainSource;
pub use stage_registration::StageRegistration;
