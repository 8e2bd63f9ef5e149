//! Wizard state machine.
//!
//! Defines a pure state transition function for the onboarding wizard: a
//! three-page form where forward navigation is gated by the validation
//! predicate of the field being left, backward navigation is always
//! permitted, and submission assembles the profile record.

use serde::{Deserialize, Serialize};

use crate::profile::{is_valid_email, is_valid_name, ProfileRecord};

/// Number of wizard pages.
pub const PAGE_COUNT: usize = 3;

/// Wizard pages, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPage {
    FirstName,
    LastName,
    Email,
}

impl WizardPage {
    /// Zero-based position, used by the page indicator.
    pub fn index(&self) -> usize {
        match self {
            WizardPage::FirstName => 0,
            WizardPage::LastName => 1,
            WizardPage::Email => 2,
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, WizardPage::Email)
    }

    fn next(&self) -> Option<WizardPage> {
        match self {
            WizardPage::FirstName => Some(WizardPage::LastName),
            WizardPage::LastName => Some(WizardPage::Email),
            WizardPage::Email => None,
        }
    }

    fn previous(&self) -> Option<WizardPage> {
        match self {
            WizardPage::FirstName => None,
            WizardPage::LastName => Some(WizardPage::FirstName),
            WizardPage::Email => Some(WizardPage::LastName),
        }
    }
}

/// The incrementally edited form fields.
///
/// Owned by the wizard state and discarded once converted into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl WizardDraft {
    fn into_record(self) -> ProfileRecord {
        ProfileRecord::new(self.first_name, self.last_name, self.email)
    }
}

/// Wizard flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub page: WizardPage,
    pub draft: WizardDraft,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            page: WizardPage::FirstName,
            draft: WizardDraft::default(),
        }
    }
}

impl WizardState {
    /// Whether the field on the current page passes its predicate. Drives
    /// the enabled state of the Next control.
    pub fn can_advance(&self) -> bool {
        match self.page {
            WizardPage::FirstName => is_valid_name(&self.draft.first_name),
            WizardPage::LastName => is_valid_name(&self.draft.last_name),
            WizardPage::Email => is_valid_email(&self.draft.email),
        }
    }

    /// Whether the whole draft passes all three predicates.
    pub fn can_submit(&self) -> bool {
        is_valid_name(&self.draft.first_name)
            && is_valid_name(&self.draft.last_name)
            && is_valid_email(&self.draft.email)
    }

    /// One flag per page dot; the active page's dot is the `true` one.
    pub fn page_indicator(&self) -> [bool; PAGE_COUNT] {
        let mut dots = [false; PAGE_COUNT];
        dots[self.page.index()] = true;
        dots
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// First-name field edited.
    FirstNameChanged { value: String },
    /// Last-name field edited.
    LastNameChanged { value: String },
    /// Email field edited.
    EmailChanged { value: String },
    /// Advance to the next page.
    Next,
    /// Return to the previous page.
    Back,
    /// Complete onboarding from the final page.
    Submit,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Persist the assembled record and flip the session gate.
    CompleteOnboarding { record: ProfileRecord },
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        match event {
            WizardEvent::FirstNameChanged { value } => (
                WizardState {
                    draft: WizardDraft {
                        first_name: value,
                        ..state.draft
                    },
                    ..state
                },
                Vec::new(),
            ),
            WizardEvent::LastNameChanged { value } => (
                WizardState {
                    draft: WizardDraft {
                        last_name: value,
                        ..state.draft
                    },
                    ..state
                },
                Vec::new(),
            ),
            WizardEvent::EmailChanged { value } => (
                WizardState {
                    draft: WizardDraft {
                        email: value,
                        ..state.draft
                    },
                    ..state
                },
                Vec::new(),
            ),
            WizardEvent::Next => {
                if !state.can_advance() {
                    // Gated: the user stays put.
                    return (state, Vec::new());
                }
                match state.page.next() {
                    Some(page) => (WizardState { page, ..state }, Vec::new()),
                    None => (state, Vec::new()),
                }
            }
            WizardEvent::Back => match state.page.previous() {
                Some(page) => (WizardState { page, ..state }, Vec::new()),
                None => (state, Vec::new()),
            },
            WizardEvent::Submit => {
                if !state.page.is_last() || !state.can_submit() {
                    return (state, Vec::new());
                }
                let record = state.draft.clone().into_record();
                (state, vec![WizardAction::CompleteOnboarding { record }])
            }
        }
    }
}
