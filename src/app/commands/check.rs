//! Check command: validate that a chain declaration is satisfiable.

use crate::domain::{AppError, OrderResolver};
use crate::ports::ChainSource;

/// Summary of a satisfiable chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub source: String,
    pub stages: usize,
    pub constraints: usize,
}

/// Execute the check command.
pub fn execute<C: ChainSource>(source: &C) -> Result<CheckOutcome, AppError> {
    let chain = source.load()?;
    let stages = chain.stages.len();
    let constraints = chain.constraints.len();

    OrderResolver::resolve(chain.stages, &chain.constraints)?;

    Ok(CheckOutcome { source: source.describe(), stages, constraints })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryChainSource;
    use crate::domain::OrderError;

    #[test]
    fn satisfiable_chain_reports_counts() {
        let source = MemoryChainSource::yaml(
            "stages: [a, b, c]\norder:\n  - stage: a\n    depends_on: b\n  - last: c\n",
        );

        let outcome = execute(&source).unwrap();

        assert_eq!(outcome.stages, 3);
        assert_eq!(outcome.constraints, 2);
    }

    #[test]
    fn chain_without_constraints_is_satisfiable() {
        let outcome = execute(&MemoryChainSource::yaml("stages: [a]\n")).unwrap();
        assert_eq!(outcome.constraints, 0);
    }

    #[test]
    fn dependencies_without_last_stage_are_rejected() {
        let source =
            MemoryChainSource::yaml("stages: [a, b]\norder:\n  - stage: a\n    depends_on: b\n");

        let err = execute(&source).unwrap_err();

        assert!(matches!(
            err,
            AppError::Order(OrderError::AmbiguousTerminal { ref stages }) if stages.is_empty()
        ));
    }

    #[test]
    fn multiple_last_stages_are_rejected() {
        let source =
            MemoryChainSource::yaml("stages: [a, b]\norder:\n  - last: a\n  - last: b\n");

        let err = execute(&source).unwrap_err();

        assert_eq!(err.to_string(), "expected exactly one last stage, found 2: [a, b]");
    }
}
