//! Order constraint declarations.

/// A single ordering requirement between stages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderConstraint<S> {
    /// `stage` must occupy the final position.
    Last(S),
    /// `stage` must come strictly after `dependency`.
    DependsOn { stage: S, dependency: S },
}

impl<S> OrderConstraint<S> {
    /// Start a `DependsOn` declaration for `stage`.
    pub fn of(stage: S) -> DependsOnBuilder<S> {
        DependsOnBuilder { stage }
    }

    /// Declare `stage` as the last stage.
    pub fn last(stage: S) -> Self {
        OrderConstraint::Last(stage)
    }
}

/// Builder returned by [`OrderConstraint::of`].
#[derive(Debug, Clone)]
pub struct DependsOnBuilder<S> {
    stage: S,
}

impl<S> DependsOnBuilder<S> {
    /// The builder's stage will come after `dependency`.
    pub fn depends_on(self, dependency: S) -> OrderConstraint<S> {
        OrderConstraint::DependsOn { stage: self.stage, dependency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_depends_on() {
        let constraint = OrderConstraint::of("auth").depends_on("logging");
        assert_eq!(constraint, OrderConstraint::DependsOn { stage: "auth", dependency: "logging" });
    }

    #[test]
    fn last_pins_stage() {
        assert_eq!(OrderConstraint::last("dispatch"), OrderConstraint::Last("dispatch"));
    }
}
