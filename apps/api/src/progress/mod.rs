// Progress & Guidance Engine
// Implements: progress evaluation, next action, onboarding steps, route guidance, unlocks.
// The engine modules are pure: no I/O, no logging, no shared state.
// `handlers` is the axum layer over them.

pub mod evaluator;
pub mod guidance;
pub mod handlers;
pub mod models;
pub mod next_action;
pub mod onboarding;
pub mod snapshot;
pub mod unlocks;

// Re-export the public API consumed by handlers and callers.
pub use evaluator::evaluate;
pub use guidance::{guidance, GuidanceContext, GuidanceModel, RouteKey};
pub use models::{Gate, Phase, PhaseCheckResult, ProgressInputs, ProgressProfile, ProgressState};
pub use next_action::{resolve, NextAction, NextActionItem};
pub use onboarding::{clamp, clamp_step_id, required_step, resume_step, OnboardingStep};
pub use snapshot::{DocumentRef, ProgressSnapshot};
pub use unlocks::{unlocks, FeatureUnlocks};
