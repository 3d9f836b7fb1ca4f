//! Shared data model for the progress engine: gates, phase check results,
//! raw inputs and the derived progress state.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Gates
// ────────────────────────────────────────────────────────────────────────────

/// A single completion criterion. Closed set; serialized in camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gate {
    CvUploaded,
    ExperienceCount,
    ProfileBasics,
    ProfileDepth,
    Stories,
    PersonalCanvas,
    JobUploaded,
    MatchingSummary,
    TailoredCv,
    TailoredCoverLetter,
    TailoredSpeech,
}

impl Gate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gate::CvUploaded => "cvUploaded",
            Gate::ExperienceCount => "experienceCount",
            Gate::ProfileBasics => "profileBasics",
            Gate::ProfileDepth => "profileDepth",
            Gate::Stories => "stories",
            Gate::PersonalCanvas => "personalCanvas",
            Gate::JobUploaded => "jobUploaded",
            Gate::MatchingSummary => "matchingSummary",
            Gate::TailoredCv => "tailoredCv",
            Gate::TailoredCoverLetter => "tailoredCoverLetter",
            Gate::TailoredSpeech => "tailoredSpeech",
        }
    }
}

/// Gates of each group, in the order they are reported and acted on.
pub const GROUNDING_GATES: [Gate; 3] =
    [Gate::CvUploaded, Gate::ExperienceCount, Gate::ProfileBasics];
pub const IDENTITY_DEPTH_GATES: [Gate; 3] =
    [Gate::ProfileDepth, Gate::Stories, Gate::PersonalCanvas];
pub const JOB_MATCHING_GATES: [Gate; 2] = [Gate::JobUploaded, Gate::MatchingSummary];
pub const MATERIALS_GATES: [Gate; 3] =
    [Gate::TailoredCv, Gate::TailoredCoverLetter, Gate::TailoredSpeech];

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Phase check results
// ────────────────────────────────────────────────────────────────────────────

/// Completion result for one phase group.
///
/// `is_complete` is always derived from `missing`; there is no way to build
/// (or deserialize) a result where the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PhaseCheckWire")]
pub struct PhaseCheckResult {
    is_complete: bool,
    missing: Vec<Gate>,
}

#[derive(Deserialize)]
struct PhaseCheckWire {
    #[serde(default)]
    missing: Vec<Gate>,
}

impl From<PhaseCheckWire> for PhaseCheckResult {
    fn from(wire: PhaseCheckWire) -> Self {
        Self::from_missing(wire.missing)
    }
}

impl PhaseCheckResult {
    pub fn from_missing(missing: Vec<Gate>) -> Self {
        Self {
            is_complete: missing.is_empty(),
            missing,
        }
    }

    /// Builds a result from `(gate, satisfied)` pairs, keeping the order given.
    pub fn from_checks<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = (Gate, bool)>,
    {
        let missing = checks
            .into_iter()
            .filter(|(_, satisfied)| !satisfied)
            .map(|(gate, _)| gate)
            .collect();
        Self::from_missing(missing)
    }

    pub fn complete() -> Self {
        Self::from_missing(Vec::new())
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn missing(&self) -> &[Gate] {
        &self.missing
    }

    pub fn is_missing(&self, gate: Gate) -> bool {
        self.missing.contains(&gate)
    }

    pub fn first_missing(&self) -> Option<Gate> {
        self.missing.first().copied()
    }

    /// Keeps only the missing gates listed in `gates`, once each, in that order.
    pub fn restricted_to(&self, gates: &[Gate]) -> Self {
        Self::from_checks(gates.iter().map(|gate| (*gate, !self.is_missing(*gate))))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Profile fields read by the evaluator. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressProfile {
    pub full_name: Option<String>,
    pub primary_email: Option<String>,
    pub primary_phone: Option<String>,
    pub work_permit: Option<String>,
    pub social_links: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
    pub aspirations: Option<Vec<String>>,
    pub personal_values: Option<Vec<String>>,
}

/// Raw signal snapshot assembled by the caller on every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressInputs {
    pub profile: Option<ProgressProfile>,
    pub experience_count: u32,
    pub story_count: u32,
    pub personal_canvas_count: u32,
    pub job_count: u32,
    pub matching_summary_count: u32,
    pub tailored_cv_count: u32,
    pub tailored_cover_letter_count: u32,
    pub tailored_speech_count: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Progress state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Phase1,
    Phase2,
    Phase3,
    Bonus,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Phase1 => "phase1",
            Phase::Phase2 => "phase2",
            Phase::Phase3 => "phase3",
            Phase::Bonus => "bonus",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluated progress. `phase` is a function of the four groups and is
/// recomputed whenever a state is built or deserialized. Each group's
/// `missing` list holds only its own gates, in their fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProgressStateWire")]
pub struct ProgressState {
    phase: Phase,
    grounding: PhaseCheckResult,
    identity_depth: PhaseCheckResult,
    job_matching: PhaseCheckResult,
    materials: PhaseCheckResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressStateWire {
    grounding: PhaseCheckResult,
    identity_depth: PhaseCheckResult,
    job_matching: PhaseCheckResult,
    materials: PhaseCheckResult,
}

impl From<ProgressStateWire> for ProgressState {
    fn from(wire: ProgressStateWire) -> Self {
        Self::from_groups(
            wire.grounding,
            wire.identity_depth,
            wire.job_matching,
            wire.materials,
        )
    }
}

impl ProgressState {
    pub fn from_groups(
        grounding: PhaseCheckResult,
        identity_depth: PhaseCheckResult,
        job_matching: PhaseCheckResult,
        materials: PhaseCheckResult,
    ) -> Self {
        // Callers may pass gates in any order, repeated, or in the wrong group.
        let grounding = grounding.restricted_to(&GROUNDING_GATES);
        let identity_depth = identity_depth.restricted_to(&IDENTITY_DEPTH_GATES);
        let job_matching = job_matching.restricted_to(&JOB_MATCHING_GATES);
        let materials = materials.restricted_to(&MATERIALS_GATES);

        let phase = if !grounding.is_complete() {
            Phase::Phase1
        } else if !identity_depth.is_complete() || !job_matching.is_complete() {
            Phase::Phase2
        } else if !materials.is_complete() {
            Phase::Phase3
        } else {
            Phase::Bonus
        };

        Self {
            phase,
            grounding,
            identity_depth,
            job_matching,
            materials,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phase 1: CV, experiences, profile basics.
    pub fn grounding(&self) -> &PhaseCheckResult {
        &self.grounding
    }

    /// Phase 2 sub-group: profile depth, stories, personal canvas.
    pub fn identity_depth(&self) -> &PhaseCheckResult {
        &self.identity_depth
    }

    /// Phase 2 sub-group: job uploaded, matching summary.
    pub fn job_matching(&self) -> &PhaseCheckResult {
        &self.job_matching
    }

    /// Phase 3: tailored CV, cover letter, speech.
    pub fn materials(&self) -> &PhaseCheckResult {
        &self.materials
    }

    /// Both phase 2 sub-groups are clear, so tailored materials may be produced.
    pub fn materials_prerequisites_met(&self) -> bool {
        self.identity_depth.is_complete() && self.job_matching.is_complete()
    }
}
