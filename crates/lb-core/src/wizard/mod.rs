//! Onboarding wizard domain module.
//!
//! Defines the paged data-collection state machine.

pub mod state_machine;

pub use state_machine::{
    WizardAction, WizardDraft, WizardEvent, WizardPage, WizardState, WizardStateMachine, PAGE_COUNT,
};
