//! Onboarding wizard flow.
//!
//! Drives the pure wizard state machine and executes its completion side
//! effect through the session coordinator.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use lb_core::wizard::{WizardAction, WizardEvent, WizardState, WizardStateMachine};

use crate::usecases::session::SessionCoordinator;

/// Orchestrator that holds the wizard state for one onboarding run.
///
/// The draft lives inside the state and never outlives the flow; on
/// completion it is handed to the coordinator as an assembled record.
pub struct OnboardingFlow {
    state: Mutex<WizardState>,
    session: Arc<SessionCoordinator>,
}

impl OnboardingFlow {
    pub fn new(session: Arc<SessionCoordinator>) -> Self {
        Self {
            state: Mutex::new(WizardState::default()),
            session,
        }
    }

    pub async fn state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Feed one event through the machine and run any resulting actions.
    pub async fn dispatch(&self, event: WizardEvent) -> WizardState {
        let span = info_span!("usecase.onboarding_flow.dispatch", event = ?event);
        async {
            // Held across action execution to serialize dispatches.
            let mut state = self.state.lock().await;
            let from_page = state.page;
            let (next, actions) = WizardStateMachine::transition(state.clone(), event);
            if next.page != from_page {
                info!(from = ?from_page, to = ?next.page, "wizard page transition");
            }
            for action in actions {
                match action {
                    WizardAction::CompleteOnboarding { record } => {
                        debug!("wizard complete, handing record to the session");
                        self.session.onboard(record).await;
                    }
                }
            }
            *state = next.clone();
            next
        }
        .instrument(span)
        .await
    }
}
