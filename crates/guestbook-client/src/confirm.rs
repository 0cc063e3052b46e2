//! Confirmation State
//!
//! Tracks the password modal: which entry and action it was opened for and
//! whether a verification request is outstanding.

use crate::models::Action;

/// One invocation of the password modal.
///
/// `serial` is unique per invocation, so reopening the modal for the same
/// entry and action still yields a distinct value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingAction {
    pub serial: u64,
    pub entry_id: u32,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Open(PendingAction),
    Verifying(PendingAction),
}

/// `Idle -> Open -> Verifying -> {Open | Idle}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmState {
    phase: Phase,
    next_serial: u64,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for `entry_id`, replacing whatever was pending
    pub fn open(&mut self, entry_id: u32, action: Action) -> PendingAction {
        self.next_serial += 1;
        let pending = PendingAction { serial: self.next_serial, entry_id, action };
        self.phase = Phase::Open(pending);
        pending
    }

    /// Move `Open` to `Verifying`. `None` when nothing is open or a request is
    /// already outstanding for this modal.
    pub fn begin_verify(&mut self) -> Option<PendingAction> {
        match self.phase {
            Phase::Open(pending) => {
                self.phase = Phase::Verifying(pending);
                Some(pending)
            }
            _ => None,
        }
    }

    /// Record the result of verifying `pending`. A result for a modal that has
    /// since been replaced or closed leaves the state alone.
    pub fn settle(&mut self, pending: PendingAction, granted: bool) {
        if self.phase != Phase::Verifying(pending) {
            return;
        }
        self.phase = if granted { Phase::Idle } else { Phase::Open(pending) };
    }

    pub fn close(&mut self) {
        self.phase = Phase::Idle;
    }

    /// The modal's target, whether idle-open or verifying
    pub fn pending(&self) -> Option<PendingAction> {
        match self.phase {
            Phase::Idle => None,
            Phase::Open(p) | Phase::Verifying(p) => Some(p),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self.phase, Phase::Verifying(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_verify_grant() {
        let mut state = ConfirmState::new();
        assert!(!state.is_open());

        let pending = state.open(4, Action::Delete);
        assert_eq!(state.pending(), Some(pending));

        assert_eq!(state.begin_verify(), Some(pending));
        assert!(state.is_verifying());

        state.settle(pending, true);
        assert!(!state.is_open());
    }

    #[test]
    fn test_denied_returns_to_open() {
        let mut state = ConfirmState::new();
        let pending = state.open(4, Action::Edit);
        state.begin_verify();
        state.settle(pending, false);

        assert!(state.is_open());
        assert!(!state.is_verifying());
        assert_eq!(state.begin_verify(), Some(pending));
    }

    #[test]
    fn test_double_verify_ignored() {
        let mut state = ConfirmState::new();
        state.open(1, Action::Delete);
        assert!(state.begin_verify().is_some());
        assert!(state.begin_verify().is_none());
    }

    #[test]
    fn test_reopen_overwrites_and_stale_result_ignored() {
        let mut state = ConfirmState::new();
        let first = state.open(1, Action::Delete);
        state.begin_verify();

        let second = state.open(2, Action::Edit);
        assert_ne!(first.serial, second.serial);

        state.settle(first, true);
        assert_eq!(state.pending(), Some(second));
        assert!(!state.is_verifying());
    }

    #[test]
    fn test_same_target_gets_fresh_serial() {
        let mut state = ConfirmState::new();
        let a = state.open(1, Action::Edit);
        let b = state.open(1, Action::Edit);
        assert_ne!(a, b);
    }

    #[test]
    fn test_begin_verify_when_idle() {
        let mut state = ConfirmState::new();
        assert!(state.begin_verify().is_none());
        state.open(1, Action::Edit);
        state.close();
        assert!(state.begin_verify().is_none());
    }
}
