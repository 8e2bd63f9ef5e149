//! Session coordinator.
//!
//! The root controller: owns the live session state, applies the reducer
//! on dispatch, and is the single place the fail-open storage policy is
//! exercised. Storage failures are logged and never block a transition.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, info_span, warn, Instrument};

use lb_core::ports::{NotifierPort, ProfileStorePort, SessionEventPort, StorageIoError};
use lb_core::profile::ProfileRecord;
use lb_core::session::{SessionEvent, SessionReducer, SessionState, StackSet};

use super::{CheckProfilePresence, LoadProfile, Logout, OnboardProfile, UpdateProfile};

pub struct SessionCoordinator {
    state: Mutex<SessionState>,

    // Capability use cases, injected
    check_presence: Arc<CheckProfilePresence>,
    onboard_profile: Arc<OnboardProfile>,
    update_profile: Arc<UpdateProfile>,
    logout_user: Arc<Logout>,
    load_profile: Arc<LoadProfile>,
    events: Arc<dyn SessionEventPort>,
}

impl SessionCoordinator {
    pub fn new(
        check_presence: Arc<CheckProfilePresence>,
        onboard_profile: Arc<OnboardProfile>,
        update_profile: Arc<UpdateProfile>,
        logout_user: Arc<Logout>,
        load_profile: Arc<LoadProfile>,
        events: Arc<dyn SessionEventPort>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            check_presence,
            onboard_profile,
            update_profile,
            logout_user,
            load_profile,
            events,
        }
    }

    /// Build the coordinator and its use cases straight from ports.
    pub fn from_ports(
        store: Arc<dyn ProfileStorePort>,
        notifier: Arc<dyn NotifierPort>,
        events: Arc<dyn SessionEventPort>,
    ) -> Self {
        Self::new(
            Arc::new(CheckProfilePresence::new(store.clone())),
            Arc::new(OnboardProfile::new(store.clone())),
            Arc::new(UpdateProfile::new(store.clone(), notifier)),
            Arc::new(Logout::new(store.clone())),
            Arc::new(LoadProfile::new(store)),
            events,
        )
    }

    /// Current state snapshot.
    pub async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    /// The screen stack the rendering collaborator should mount right now.
    pub async fn active_stack(&self) -> StackSet {
        StackSet::for_state(&self.state().await)
    }

    /// Startup store probe. Awaited before the first render decision so
    /// the wrong screen set is never flashed.
    ///
    /// A failed probe gates to onboarding: store errors never block
    /// startup.
    pub async fn bootstrap(&self) -> SessionState {
        let span = info_span!("usecase.session.bootstrap");
        async {
            let profile_present = match self.check_presence.execute().await {
                Ok(present) => present,
                Err(err) => {
                    warn!(error = %err, "startup profile probe failed, gating to onboarding");
                    false
                }
            };
            self.dispatch(SessionEvent::BootstrapCompleted { profile_present })
                .await
        }
        .instrument(span)
        .await
    }

    /// Persist the assembled record and open the authenticated stack.
    ///
    /// The gate flips whether or not the write landed; a failed write is
    /// logged and the user proceeds.
    pub async fn onboard(&self, record: ProfileRecord) -> SessionState {
        let span = info_span!("usecase.session.onboard");
        async {
            if let Err(err) = self.onboard_profile.execute(&record).await {
                warn!(error = %err, "profile write failed during onboarding, proceeding");
            }
            self.dispatch(SessionEvent::OnboardingCompleted).await
        }
        .instrument(span)
        .await
    }

    /// Overwrite the stored record. No state transition; the use case
    /// reports to the user on its own.
    pub async fn update(&self, record: ProfileRecord) {
        let span = info_span!("usecase.session.update");
        async {
            if let Err(err) = self.update_profile.execute(&record).await {
                warn!(error = %err, "profile update write failed");
            }
        }
        .instrument(span)
        .await
    }

    /// Clear the store and return to the onboarding stack.
    pub async fn logout(&self) -> SessionState {
        let span = info_span!("usecase.session.logout");
        async {
            if let Err(err) = self.logout_user.execute().await {
                warn!(error = %err, "store clear failed during logout, proceeding");
            }
            self.dispatch(SessionEvent::LoggedOut).await
        }
        .instrument(span)
        .await
    }

    /// Load the stored record for the profile screen.
    pub async fn profile(&self) -> Result<Option<ProfileRecord>, StorageIoError> {
        self.load_profile.execute().await
    }

    async fn dispatch(&self, event: SessionEvent) -> SessionState {
        // The state lock also serializes dispatches.
        let mut state = self.state.lock().await;
        let from = *state;
        let next = SessionReducer::transition(from, event.clone());
        info!(from = ?from, to = ?next, event = ?event, "session state transition");
        *state = next;
        drop(state);

        self.events.session_changed(next).await;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lb_core::profile::PROFILE_KEY;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    struct MockProfileStore {
        map: StdMutex<HashMap<String, String>>,
        fail: bool,
    }

    impl MockProfileStore {
        fn new() -> Self {
            Self {
                map: StdMutex::new(HashMap::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                map: StdMutex::new(HashMap::new()),
                fail: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl ProfileStorePort for MockProfileStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageIoError> {
            if self.fail {
                return Err(StorageIoError::Backend("store offline".into()));
            }
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageIoError> {
            if self.fail {
                return Err(StorageIoError::Backend("store offline".into()));
            }
            self.map
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<(), StorageIoError> {
            if self.fail {
                return Err(StorageIoError::Backend("store offline".into()));
            }
            self.map.lock().unwrap().clear();
            Ok(())
        }
    }

    struct NullNotifier;

    #[async_trait::async_trait]
    impl NotifierPort for NullNotifier {
        async fn alert(&self, _title: &str, _body: &str) {}
    }

    #[derive(Default)]
    struct RecordingEvents {
        states: StdMutex<Vec<SessionState>>,
    }

    #[async_trait::async_trait]
    impl SessionEventPort for RecordingEvents {
        async fn session_changed(&self, state: SessionState) {
            self.states.lock().unwrap().push(state);
        }
    }

    fn coordinator_with(store: Arc<MockProfileStore>) -> (SessionCoordinator, Arc<RecordingEvents>) {
        let events = Arc::new(RecordingEvents::default());
        let coordinator =
            SessionCoordinator::from_ports(store, Arc::new(NullNotifier), events.clone());
        (coordinator, events)
    }

    #[tokio::test]
    async fn bootstrap_with_fresh_store_gates_to_onboarding() {
        let (coordinator, _) = coordinator_with(Arc::new(MockProfileStore::new()));

        assert_eq!(coordinator.active_stack().await, StackSet::Splash);

        let state = coordinator.bootstrap().await;
        assert!(!state.is_loading);
        assert!(!state.is_onboarding_completed);
        assert_eq!(coordinator.active_stack().await, StackSet::Onboarding);
    }

    #[tokio::test]
    async fn bootstrap_with_populated_store_opens_the_gate() {
        let store = Arc::new(MockProfileStore::new());
        store.set(PROFILE_KEY, "{}").await.unwrap();
        let (coordinator, _) = coordinator_with(store);

        let state = coordinator.bootstrap().await;
        assert!(!state.is_loading);
        assert!(state.is_onboarding_completed);
        assert_eq!(coordinator.active_stack().await, StackSet::Main);
    }

    #[tokio::test]
    async fn bootstrap_with_failing_store_gates_to_onboarding() {
        let (coordinator, _) = coordinator_with(Arc::new(MockProfileStore::failing()));

        let state = coordinator.bootstrap().await;
        assert!(!state.is_loading);
        assert!(!state.is_onboarding_completed);
    }

    #[tokio::test]
    async fn onboard_persists_and_opens_the_gate() {
        let store = Arc::new(MockProfileStore::new());
        let (coordinator, events) = coordinator_with(store.clone());
        coordinator.bootstrap().await;

        let record = ProfileRecord::new("Ana", "Silva", "ana@example.com");
        let state = coordinator.onboard(record.clone()).await;

        assert!(state.is_onboarding_completed);
        let stored = store.get(PROFILE_KEY).await.unwrap().unwrap();
        let decoded: ProfileRecord = serde_json::from_str(&stored).unwrap();
        assert_eq!(decoded, record);

        let emitted = events.states.lock().unwrap();
        assert_eq!(emitted.last().copied(), Some(state));
    }

    // The fail-open policy at work: persistence failure does not block
    // the transition. Expected behavior, not a bug.
    #[tokio::test]
    async fn onboard_opens_the_gate_even_when_the_write_fails() {
        let (coordinator, _) = coordinator_with(Arc::new(MockProfileStore::failing()));
        coordinator.bootstrap().await;

        let record = ProfileRecord::new("Ana", "Silva", "ana@example.com");
        let state = coordinator.onboard(record).await;

        assert!(state.is_onboarding_completed);
        assert_eq!(coordinator.active_stack().await, StackSet::Main);
    }

    #[tokio::test]
    async fn logout_clears_the_store_and_closes_the_gate() {
        let store = Arc::new(MockProfileStore::new());
        let (coordinator, _) = coordinator_with(store.clone());
        coordinator.bootstrap().await;
        coordinator
            .onboard(ProfileRecord::new("Ana", "Silva", "ana@example.com"))
            .await;

        let state = coordinator.logout().await;

        assert!(!state.is_onboarding_completed);
        assert!(store.get(PROFILE_KEY).await.unwrap().is_none());
        assert_eq!(coordinator.active_stack().await, StackSet::Onboarding);
    }

    #[tokio::test]
    async fn profile_returns_the_stored_record() {
        let store = Arc::new(MockProfileStore::new());
        let (coordinator, _) = coordinator_with(store);
        coordinator.bootstrap().await;

        assert_eq!(coordinator.profile().await.unwrap(), None);

        let record = ProfileRecord::new("Ana", "Silva", "ana@example.com");
        coordinator.onboard(record.clone()).await;

        assert_eq!(coordinator.profile().await.unwrap(), Some(record));
    }
}
