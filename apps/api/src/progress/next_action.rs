//! Next-Action Resolver — picks the single highest-priority action for a state.
//!
//! Priority ladder mirrors phase resolution: grounding gates first, then the
//! job-matching group ahead of identity depth, then tailoring, then bonus.

use serde::{Deserialize, Serialize};

use crate::progress::models::{Gate, Phase, ProgressState};

/// One actionable item. Text is returned as localization keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextActionItem {
    pub id: String,
    pub label_key: String,
    pub rationale_key: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub phase: Phase,
    pub primary: NextActionItem,
    /// Remaining phase 2 actions after `primary`, same priority order.
    pub secondary: Vec<NextActionItem>,
    pub missing_prerequisites: Vec<Gate>,
}

pub fn resolve(state: &ProgressState) -> NextAction {
    if !state.grounding().is_complete() {
        let missing = state.grounding().missing().to_vec();
        let primary = missing
            .first()
            .map(|gate| gate_action(*gate))
            .unwrap_or_else(|| gate_action(Gate::ProfileBasics));
        return NextAction {
            phase: Phase::Phase1,
            primary,
            secondary: Vec::new(),
            missing_prerequisites: missing,
        };
    }

    if !state.materials_prerequisites_met() {
        let missing: Vec<Gate> = state
            .job_matching()
            .missing()
            .iter()
            .chain(state.identity_depth().missing())
            .copied()
            .collect();
        let mut actions = missing.iter().map(|gate| gate_action(*gate));
        let primary = actions
            .next()
            .unwrap_or_else(|| gate_action(Gate::JobUploaded));
        return NextAction {
            phase: Phase::Phase2,
            primary,
            secondary: actions.collect(),
            missing_prerequisites: missing,
        };
    }

    if !state.materials().is_complete() {
        return NextAction {
            phase: Phase::Phase3,
            primary: tailor_materials(),
            secondary: Vec::new(),
            missing_prerequisites: state.materials().missing().to_vec(),
        };
    }

    NextAction {
        phase: Phase::Bonus,
        primary: action(
            "optimize-materials",
            "optimizeMaterials",
            "bonus",
            "/applications/cv",
        ),
        secondary: Vec::new(),
        missing_prerequisites: Vec::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Gate → action table
// ────────────────────────────────────────────────────────────────────────────

fn gate_action(gate: Gate) -> NextActionItem {
    match gate {
        Gate::CvUploaded => action("upload-cv", "uploadCv", "cvUpload", "/profile/cv-upload"),
        Gate::ExperienceCount => action(
            "add-experiences",
            "addExperiences",
            "experiences",
            "/profile/experiences",
        ),
        Gate::ProfileBasics => action(
            "complete-profile",
            "completeProfile",
            "profileBasics",
            "/profile",
        ),
        Gate::ProfileDepth => action("profile-depth", "profileDepth", "profileDepth", "/profile"),
        Gate::Stories => action("add-stories", "addStories", "stories", "/profile/stories"),
        Gate::PersonalCanvas => action(
            "build-canvas",
            "buildCanvas",
            "personalCanvas",
            "/profile/canvas",
        ),
        Gate::JobUploaded => action("upload-job", "uploadJob", "jobUpload", "/jobs/new"),
        Gate::MatchingSummary => action(
            "generate-match",
            "generateMatch",
            "matchingSummary",
            "/jobs",
        ),
        Gate::TailoredCv | Gate::TailoredCoverLetter | Gate::TailoredSpeech => tailor_materials(),
    }
}

fn tailor_materials() -> NextActionItem {
    action(
        "tailor-materials",
        "tailorMaterials",
        "tailoredMaterials",
        "/jobs",
    )
}

fn action(id: &str, label: &str, rationale: &str, to: &str) -> NextActionItem {
    NextActionItem {
        id: id.to_string(),
        label_key: format!("progress.actions.{label}"),
        rationale_key: format!("progress.rationale.{rationale}"),
        to: to.to_string(),
    }
}
