//! Onboarding Step Sequencer — first-run wizard steps derived from grounding.
//!
//! Progresses linearly: CvUpload → ExperienceReview → ProfileBasics → Complete.
//! A user may move back freely but never ahead of the required step.

use serde::{Deserialize, Serialize};

use crate::progress::models::{Gate, ProgressState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    CvUpload,
    ExperienceReview,
    ProfileBasics,
    Complete,
}

pub const ONBOARDING_STEPS: [OnboardingStep; 4] = [
    OnboardingStep::CvUpload,
    OnboardingStep::ExperienceReview,
    OnboardingStep::ProfileBasics,
    OnboardingStep::Complete,
];

impl OnboardingStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CvUpload => "cv-upload",
            Self::ExperienceReview => "experience-review",
            Self::ProfileBasics => "profile-basics",
            Self::Complete => "complete",
        }
    }

    /// Unrecognized ids yield `None`.
    pub fn parse(id: &str) -> Option<Self> {
        ONBOARDING_STEPS.into_iter().find(|step| step.as_str() == id)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::CvUpload => 0,
            Self::ExperienceReview => 1,
            Self::ProfileBasics => 2,
            Self::Complete => 3,
        }
    }

    /// Next step, staying on `Complete`.
    pub fn next(&self) -> Self {
        ONBOARDING_STEPS[(self.index() + 1).min(ONBOARDING_STEPS.len() - 1)]
    }

    /// Previous step, staying on `CvUpload`.
    pub fn previous(&self) -> Self {
        ONBOARDING_STEPS[self.index().saturating_sub(1)]
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The step the user must be on, read from the grounding gates only.
pub fn required_step(state: &ProgressState) -> OnboardingStep {
    let grounding = state.grounding();
    if grounding.is_missing(Gate::CvUploaded) {
        OnboardingStep::CvUpload
    } else if grounding.is_missing(Gate::ExperienceCount) {
        OnboardingStep::ExperienceReview
    } else if !grounding.is_complete() {
        OnboardingStep::ProfileBasics
    } else {
        OnboardingStep::Complete
    }
}

/// Keeps `desired` only when it sits strictly before `required`.
pub fn clamp(desired: OnboardingStep, required: OnboardingStep) -> OnboardingStep {
    if desired.index() >= required.index() {
        required
    } else {
        desired
    }
}

/// String form of [`clamp`] for ids coming from storage or the wire.
/// Falls back to `required` when either id is unrecognized.
pub fn clamp_step_id<'a>(desired: &'a str, required: &'a str) -> &'a str {
    match (OnboardingStep::parse(desired), OnboardingStep::parse(required)) {
        (Some(d), Some(r)) if d.index() < r.index() => desired,
        _ => required,
    }
}

/// Step to show when the wizard loads: the persisted step if it is still a
/// valid id, otherwise the required one, clamped either way.
pub fn resume_step(state: &ProgressState, persisted: Option<&str>) -> OnboardingStep {
    let required = required_step(state);
    let desired = persisted
        .and_then(OnboardingStep::parse)
        .unwrap_or(required);
    clamp(desired, required)
}
