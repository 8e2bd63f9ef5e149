//! Lobby application orchestration layer
//!
//! This crate contains business logic use cases and the coordinators that
//! drive the pure state machines in `lb-core`.

pub mod usecases;

pub use usecases::onboarding::OnboardingFlow;
pub use usecases::session::SessionCoordinator;
