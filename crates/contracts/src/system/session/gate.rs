use super::state::IgnoreReason;

/// A simulated operation that shows the loading overlay until it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    SymptomReport,
    CommunityHealthReport,
    LearningModule(String),
    DeployResponseTeam(u32),
}

impl PendingAction {
    /// Notification shown once the simulated delay has elapsed.
    pub fn completion_message(&self) -> String {
        match self {
            PendingAction::SymptomReport => "Symptom report submitted successfully!".to_string(),
            PendingAction::CommunityHealthReport => {
                "Community health report submitted!".to_string()
            }
            PendingAction::LearningModule(name) => format!("Starting {} learning module...", name),
            PendingAction::DeployResponseTeam(id) => {
                format!("Response team deployed for alert #{}", id)
            }
        }
    }
}

/// Allows one simulated action at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionGate {
    pending: Option<PendingAction>,
}

impl ActionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin(&mut self, action: PendingAction) -> Result<(), IgnoreReason> {
        if self.pending.is_some() {
            return Err(IgnoreReason::ActionPending);
        }
        self.pending = Some(action);
        Ok(())
    }

    /// Completes the pending action, if any, handing it back to the caller.
    pub fn finish(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reentrant_submit() {
        let mut gate = ActionGate::new();
        gate.begin(PendingAction::SymptomReport).unwrap();
        assert!(gate.begin(PendingAction::SymptomReport).is_err());
        assert!(gate.begin(PendingAction::CommunityHealthReport).is_err());

        assert_eq!(gate.finish(), Some(PendingAction::SymptomReport));
        assert!(!gate.is_pending());
        assert!(gate.begin(PendingAction::CommunityHealthReport).is_ok());
    }

    #[test]
    fn finish_without_pending_is_none() {
        let mut gate = ActionGate::new();
        assert_eq!(gate.finish(), None);
    }

    #[test]
    fn completion_messages() {
        assert_eq!(
            PendingAction::DeployResponseTeam(2).completion_message(),
            "Response team deployed for alert #2"
        );
        assert_eq!(
            PendingAction::LearningModule("Hand Hygiene".into()).completion_message(),
            "Starting Hand Hygiene learning module..."
        );
    }
}
