//! Stage registration port definition.

/// An externally owned object that runs as one stage and accepts an execution rank.
pub trait StageRegistration {
    /// Identity used to match this registration against order constraints.
    type Stage;

    /// The stage this registration runs as.
    fn stage(&self) -> &Self::Stage;

    /// Record the zero-based execution rank assigned by resolution.
    fn set_order(&mut self, order: usize);
}
