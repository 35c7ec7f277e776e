//! # Submission lifecycle
//!
//! `Idle → Submitting → (Succeeded | Failed) → Idle`. The transitions are
//! guarded: [`SubmissionState::begin`] only leaves `Idle`, which is what
//! prevents a double-click on the submit button from issuing two delivery
//! calls, and the terminal states only follow `Submitting`. Both terminal
//! states return to `Idle` through [`SubmissionState::settle`]; whether the
//! form fields are cleared (success) or kept (failure) is the caller's job.

/// Where the contact form currently is in its submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    /// Ready for input. The initial state, re-entered after every attempt.
    #[default]
    Idle,
    /// A delivery call is in flight; the submit action is disabled.
    Submitting,
    /// The endpoint acknowledged the message.
    Succeeded,
    /// The attempt failed; carries the user-facing detail.
    Failed(String),
}

impl SubmissionState {
    /// Enter `Submitting` from `Idle`. Returns `false` and leaves the state
    /// untouched when a submission is already in flight or unsettled.
    pub fn begin(&mut self) -> bool {
        if *self == SubmissionState::Idle {
            *self = SubmissionState::Submitting;
            true
        } else {
            false
        }
    }

    /// Record a successful delivery. Only valid while `Submitting`.
    pub fn succeed(&mut self) {
        if *self == SubmissionState::Submitting {
            *self = SubmissionState::Succeeded;
        }
    }

    /// Record a failed delivery with its user-facing detail. Only valid
    /// while `Submitting`.
    pub fn fail(&mut self, detail: impl Into<String>) {
        if *self == SubmissionState::Submitting {
            *self = SubmissionState::Failed(detail.into());
        }
    }

    /// Return from a terminal state to `Idle`, ready for the next attempt.
    pub fn settle(&mut self) {
        if matches!(self, SubmissionState::Succeeded | SubmissionState::Failed(_)) {
            *self = SubmissionState::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmissionState::Submitting
    }

    /// The failure detail, when in the failed state.
    pub fn failure_detail(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_walk() {
        let mut state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);

        assert!(state.begin());
        assert!(state.is_submitting());

        state.succeed();
        assert_eq!(state, SubmissionState::Succeeded);

        state.settle();
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_failed_walk_keeps_detail_until_settled() {
        let mut state = SubmissionState::default();
        assert!(state.begin());

        state.fail("service unavailable");
        assert_eq!(state.failure_detail(), Some("service unavailable"));

        state.settle();
        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(state.failure_detail(), None);
    }

    #[test]
    fn test_begin_refused_while_submitting() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_begin_refused_until_settled() {
        let mut state = SubmissionState::default();
        state.begin();
        state.succeed();
        assert!(!state.begin());
        assert_eq!(state, SubmissionState::Succeeded);

        state.settle();
        assert!(state.begin());
    }

    #[test]
    fn test_terminal_transitions_require_submitting() {
        let mut state = SubmissionState::Idle;
        state.succeed();
        assert_eq!(state, SubmissionState::Idle);

        state.fail("ignored");
        assert_eq!(state, SubmissionState::Idle);

        let mut failed = SubmissionState::Failed("original".to_string());
        failed.succeed();
        assert_eq!(failed.failure_detail(), Some("original"));
    }

    #[test]
    fn test_settle_is_a_noop_outside_terminal_states() {
        let mut state = SubmissionState::Idle;
        state.settle();
        assert_eq!(state, SubmissionState::Idle);

        let mut submitting = SubmissionState::Submitting;
        submitting.settle();
        assert!(submitting.is_submitting());
    }
}
