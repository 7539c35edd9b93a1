//! Resolve command: load a chain declaration and rank its stages.

use serde::Serialize;

use crate::domain::{AppError, OrderResolver, StageId};
use crate::ports::{ChainSource, StageRegistration};

/// A stage with its execution rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStage {
    pub rank: usize,
    pub stage: StageId,
}

impl StageRegistration for RankedStage {
    type Stage = StageId;

    fn stage(&self) -> &StageId {
        &self.stage
    }

    fn set_order(&mut self, order: usize) {
        self.rank = order;
    }
}

/// Stages of a chain in resolved order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    pub order: Vec<RankedStage>,
}

impl ResolveOutcome {
    /// Stage names in resolved order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.order.iter().map(|ranked| ranked.stage.as_str()).collect()
    }
}

/// Execute the resolve command.
///
/// Stages start ranked by declaration position, which stands when nothing constrains them.
pub fn execute<C: ChainSource>(source: &C) -> Result<ResolveOutcome, AppError> {
    let chain = source.load()?;

    let declared: Vec<RankedStage> = chain
        .stages
        .into_iter()
        .enumerate()
        .map(|(rank, stage)| RankedStage { rank, stage })
        .collect();

    let order = OrderResolver::apply(declared, &chain.constraints)?;
    Ok(ResolveOutcome { order })
}
