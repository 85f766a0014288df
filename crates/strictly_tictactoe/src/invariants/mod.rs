//! Properties of a [`Game`](crate::Game) that every accepted move preserves.
//!
//! `Game::place` checks [`GameInvariants`] in debug builds.

mod alternating_turn;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A property checked against a state `S`.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Records a violation of the described property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as a group.
pub trait InvariantSet<S> {
    /// Checks every member, reporting each one that fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants of the move engine.
pub type GameInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
