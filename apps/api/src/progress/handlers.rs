//! Axum route handlers for the Progress API.
//!
//! Each handler is a thin JSON wrapper around one pure engine function.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::progress::evaluator::evaluate;
use crate::progress::guidance::{guidance, GuidanceContext, GuidanceModel};
use crate::progress::models::{ProgressInputs, ProgressState};
use crate::progress::next_action::{resolve, NextAction};
use crate::progress::onboarding::{required_step, resume_step, OnboardingStep};
use crate::progress::snapshot::ProgressSnapshot;
use crate::progress::unlocks::{unlocks, FeatureUnlocks};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub state: ProgressState,
    pub next_action: NextAction,
    pub unlocks: FeatureUnlocks,
    pub onboarding_step: OnboardingStep,
}

impl EvaluateResponse {
    fn from_inputs(inputs: &ProgressInputs) -> Self {
        let state = evaluate(inputs);
        Self {
            next_action: resolve(&state),
            unlocks: unlocks(&state),
            onboarding_step: required_step(&state),
            state,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStepRequest {
    pub state: ProgressState,
    #[serde(default)]
    pub desired_step: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStepResponse {
    pub required_step: OnboardingStep,
    pub current_step: OnboardingStep,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuidanceRequest {
    pub state: Option<ProgressState>,
    pub context: GuidanceContext,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/progress/evaluate
///
/// Evaluates raw inputs and returns the state with everything derived from it.
pub async fn handle_evaluate(Json(inputs): Json<ProgressInputs>) -> Json<EvaluateResponse> {
    let response = EvaluateResponse::from_inputs(&inputs);
    debug!(phase = %response.state.phase(), "progress evaluated");
    Json(response)
}

/// POST /api/v1/progress/snapshot
///
/// Same as evaluate, but counts raw record lists first.
pub async fn handle_evaluate_snapshot(
    Json(snapshot): Json<ProgressSnapshot>,
) -> Json<EvaluateResponse> {
    let response = EvaluateResponse::from_inputs(&snapshot.to_inputs());
    debug!(phase = %response.state.phase(), "progress evaluated from snapshot");
    Json(response)
}

/// POST /api/v1/progress/next-action
pub async fn handle_next_action(Json(state): Json<ProgressState>) -> Json<NextAction> {
    Json(resolve(&state))
}

/// POST /api/v1/progress/unlocks
pub async fn handle_unlocks(Json(state): Json<ProgressState>) -> Json<FeatureUnlocks> {
    Json(unlocks(&state))
}

/// POST /api/v1/onboarding/step
///
/// Returns the required step and the step to show, given the one the client
/// asked for. Unknown step ids fall back to the required step.
pub async fn handle_onboarding_step(
    Json(request): Json<OnboardingStepRequest>,
) -> Result<Json<OnboardingStepResponse>, AppError> {
    let required = required_step(&request.state);

    if request
        .desired_step
        .as_deref()
        .is_some_and(|id| id.trim().is_empty())
    {
        return Err(AppError::Validation(
            "desiredStep cannot be empty".to_string(),
        ));
    }

    let current = resume_step(&request.state, request.desired_step.as_deref());

    debug!(%required, %current, "onboarding step resolved");
    Ok(Json(OnboardingStepResponse {
        required_step: required,
        current_step: current,
    }))
}

/// POST /api/v1/guidance/:route_key
///
/// Unknown route keys answer with the empty model rather than an error.
pub async fn handle_guidance(
    Path(route_key): Path<String>,
    Json(request): Json<GuidanceRequest>,
) -> Json<GuidanceModel> {
    let model = guidance(&route_key, request.state.as_ref(), &request.context);
    debug!(route = %route_key, empty = model.is_empty(), "guidance computed");
    Json(model)
}
