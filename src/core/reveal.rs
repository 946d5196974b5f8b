//! core/reveal.rs
//! The card's one-way state machine: Waiting until the countdown ends
//! (or is skipped), then Revealed forever.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Waiting,
    Revealed,
}

impl Phase {
    /// Moves to `Revealed` and reports whether *this* call performed the
    /// transition. Completion side effects (music, confetti) must only run
    /// when this returns true, so they cannot fire twice.
    pub fn reveal(&mut self) -> bool {
        match self {
            Phase::Waiting => {
                *self = Phase::Revealed;
                true
            }
            Phase::Revealed => false,
        }
    }

    pub fn is_waiting(self) -> bool {
        matches!(self, Phase::Waiting)
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Phase::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_waiting() {
        assert!(Phase::default().is_waiting());
    }

    #[test]
    fn reveal_reports_the_transition_only_once() {
        let mut phase = Phase::default();
        assert!(phase.reveal());
        assert!(!phase.reveal());
        assert!(!phase.reveal());
    }

    #[test]
    fn revealed_is_terminal() {
        let mut phase = Phase::default();
        phase.reveal();
        phase.reveal();
        assert!(phase.is_revealed());
        assert!(!phase.is_waiting());
    }
}
