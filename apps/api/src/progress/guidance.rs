//! Guidance Catalog — route-scoped banners, empty states and locked features.
//!
//! Each route key maps to one pure handler through an exhaustive match on
//! [`RouteKey`]. Handlers return keys for the localization layer, never text.
//! Routes other than `jobs` and `job-match` return the empty model when no
//! progress state is available.

use serde::{Deserialize, Serialize};

use crate::progress::models::{Gate, ProgressState};

// ────────────────────────────────────────────────────────────────────────────
// Guidance model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceCta {
    pub label_key: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceBanner {
    pub title_key: String,
    pub description_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<GuidanceCta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceEmptyState {
    pub title_key: String,
    pub description_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub cta: GuidanceCta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedFeature {
    pub id: String,
    pub title_key: String,
    pub description_key: String,
    pub cta: GuidanceCta,
}

/// Serializes as `{}` when nothing applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<GuidanceBanner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<GuidanceEmptyState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_features: Option<Vec<LockedFeature>>,
}

impl GuidanceModel {
    pub fn is_empty(&self) -> bool {
        self.banner.is_none() && self.empty_state.is_none() && self.locked_features.is_none()
    }

    fn with_banner(banner: Option<GuidanceBanner>) -> Self {
        Self {
            banner,
            ..Default::default()
        }
    }

    fn with_locked(feature: LockedFeature) -> Self {
        Self {
            locked_features: Some(vec![feature]),
            ..Default::default()
        }
    }
}

/// Route-specific values supplied by the page. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuidanceContext {
    pub experiences_count: Option<u32>,
    pub stories_count: Option<u32>,
    pub canvas_count: Option<u32>,
    pub jobs_count: Option<u32>,
    pub has_matching_summary: Option<bool>,
    pub cv_count: Option<u32>,
    pub cover_letter_count: Option<u32>,
    pub speech_count: Option<u32>,
    pub job_id: Option<String>,
    pub is_generating: Option<bool>,
}

// ────────────────────────────────────────────────────────────────────────────
// Route keys
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKey {
    Profile,
    ProfileExperiences,
    ProfileStories,
    ProfileCanvas,
    Jobs,
    JobMatch,
    ApplicationsCv,
    ApplicationsCoverLetters,
    ApplicationsSpeech,
}

pub const ROUTE_KEYS: [RouteKey; 9] = [
    RouteKey::Profile,
    RouteKey::ProfileExperiences,
    RouteKey::ProfileStories,
    RouteKey::ProfileCanvas,
    RouteKey::Jobs,
    RouteKey::JobMatch,
    RouteKey::ApplicationsCv,
    RouteKey::ApplicationsCoverLetters,
    RouteKey::ApplicationsSpeech,
];

impl RouteKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKey::Profile => "profile",
            RouteKey::ProfileExperiences => "profile-experiences",
            RouteKey::ProfileStories => "profile-stories",
            RouteKey::ProfileCanvas => "profile-canvas",
            RouteKey::Jobs => "jobs",
            RouteKey::JobMatch => "job-match",
            RouteKey::ApplicationsCv => "applications-cv",
            RouteKey::ApplicationsCoverLetters => "applications-cover-letters",
            RouteKey::ApplicationsSpeech => "applications-speech",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        ROUTE_KEYS.into_iter().find(|route| route.as_str() == key)
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Guidance for a raw route key. Unknown keys produce the empty model.
pub fn guidance(
    route_key: &str,
    state: Option<&ProgressState>,
    context: &GuidanceContext,
) -> GuidanceModel {
    match RouteKey::parse(route_key) {
        Some(route) => guidance_for(route, state, context),
        None => GuidanceModel::default(),
    }
}

pub fn guidance_for(
    route: RouteKey,
    state: Option<&ProgressState>,
    context: &GuidanceContext,
) -> GuidanceModel {
    match route {
        // Count-driven routes do not need a progress state.
        RouteKey::Jobs => jobs_guidance(context),
        RouteKey::JobMatch => job_match_guidance(context),
        RouteKey::Profile => state.map(profile_guidance).unwrap_or_default(),
        RouteKey::ProfileExperiences => state
            .map(|s| profile_experiences_guidance(s, context))
            .unwrap_or_default(),
        RouteKey::ProfileStories => state
            .map(|s| profile_stories_guidance(s, context))
            .unwrap_or_default(),
        RouteKey::ProfileCanvas => state.map(profile_canvas_guidance).unwrap_or_default(),
        RouteKey::ApplicationsCv => state
            .map(|s| {
                applications_guidance(
                    s,
                    "cv-locked",
                    context.cv_count,
                    Some((
                        "guidance.applications.cv.empty",
                        "i-heroicons-document-text",
                        "/applications/cv/new",
                    )),
                )
            })
            .unwrap_or_default(),
        RouteKey::ApplicationsCoverLetters => state
            .map(|s| {
                applications_guidance(
                    s,
                    "cover-letters-locked",
                    context.cover_letter_count,
                    Some((
                        "guidance.applications.coverLetters.empty",
                        "i-heroicons-envelope",
                        "/applications/cover-letters/new",
                    )),
                )
            })
            .unwrap_or_default(),
        // Speech has no create-new page of its own, hence no empty state.
        RouteKey::ApplicationsSpeech => state
            .map(|s| applications_guidance(s, "speech-locked", context.speech_count, None))
            .unwrap_or_default(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profile family
// ────────────────────────────────────────────────────────────────────────────

const EDIT_PROFILE: &str = "/profile/full?mode=edit";

fn profile_guidance(state: &ProgressState) -> GuidanceModel {
    let gate = match state.grounding().first_missing() {
        Some(gate) => Some(gate),
        None => state.identity_depth().first_missing(),
    };

    let selected = gate.and_then(|gate| {
        let (slug, to) = match gate {
            Gate::CvUploaded => ("cv", "/profile/cv-upload"),
            Gate::ExperienceCount => ("experiences", "/profile/experiences/new"),
            Gate::ProfileBasics => ("basics", EDIT_PROFILE),
            Gate::ProfileDepth => ("profileDepth", EDIT_PROFILE),
            Gate::Stories => ("stories", "/profile/stories/new"),
            Gate::PersonalCanvas => ("personalCanvas", "/profile/canvas"),
            _ => return None,
        };
        Some(banner(&format!("guidance.profile.banner.{slug}"), to))
    });

    GuidanceModel::with_banner(selected)
}

fn profile_experiences_guidance(
    state: &ProgressState,
    context: &GuidanceContext,
) -> GuidanceModel {
    let grounding = state.grounding();
    let banner = if grounding.is_missing(Gate::CvUploaded) {
        Some(banner("guidance.profileExperiences.banner.cv", "/profile/cv-upload"))
    } else if grounding.is_missing(Gate::ExperienceCount) {
        Some(banner(
            "guidance.profileExperiences.banner.experience",
            "/profile/experiences/new",
        ))
    } else {
        None
    };

    let empty_state = (context.experiences_count == Some(0)).then(|| {
        empty_state(
            "guidance.profileExperiences.empty",
            "i-heroicons-briefcase",
            "/profile/experiences/new",
        )
    });

    GuidanceModel {
        banner,
        empty_state,
        locked_features: None,
    }
}

fn profile_stories_guidance(state: &ProgressState, context: &GuidanceContext) -> GuidanceModel {
    // Stories are written against experiences, so they stay locked until
    // enough experiences exist.
    let grounding = state.grounding();
    if grounding.is_missing(Gate::CvUploaded) {
        return GuidanceModel::with_locked(locked(
            "stories-locked",
            "guidance.profileStories.locked.title",
            "guidance.profileStories.locked.descriptionCv",
            "guidance.profileStories.locked.ctaCv",
            "/profile/cv-upload",
        ));
    }
    if grounding.is_missing(Gate::ExperienceCount) {
        return GuidanceModel::with_locked(locked(
            "stories-locked",
            "guidance.profileStories.locked.title",
            "guidance.profileStories.locked.description",
            "guidance.profileStories.locked.cta",
            "/profile/experiences",
        ));
    }

    GuidanceModel {
        empty_state: (context.stories_count == Some(0)).then(|| {
            empty_state(
                "guidance.profileStories.empty",
                "i-heroicons-star",
                "/profile/stories/new",
            )
        }),
        ..Default::default()
    }
}

fn profile_canvas_guidance(state: &ProgressState) -> GuidanceModel {
    let identity = state.identity_depth();
    if !identity.is_missing(Gate::ProfileDepth) && !identity.is_missing(Gate::Stories) {
        return GuidanceModel::default();
    }

    GuidanceModel::with_locked(canvas_unlock(state))
}

/// Canvas lock remedy: finish profile depth first, then write a story.
fn canvas_unlock(state: &ProgressState) -> LockedFeature {
    let prefix = "guidance.profileCanvas.locked";
    let (suffix, to) = if state.identity_depth().is_missing(Gate::ProfileDepth) {
        ("ProfileDepth", EDIT_PROFILE)
    } else {
        ("Stories", "/profile/stories/new")
    };
    locked(
        "canvas",
        &format!("{prefix}.title"),
        &format!("{prefix}.description{suffix}"),
        &format!("{prefix}.cta{suffix}"),
        to,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

fn jobs_guidance(context: &GuidanceContext) -> GuidanceModel {
    GuidanceModel {
        empty_state: (context.jobs_count == Some(0))
            .then(|| empty_state("guidance.jobs.empty", "i-heroicons-briefcase", "/jobs/new")),
        ..Default::default()
    }
}

fn job_match_guidance(context: &GuidanceContext) -> GuidanceModel {
    let job_id = context
        .job_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    match job_id {
        Some(id)
            if context.has_matching_summary == Some(false)
                && context.is_generating != Some(true) =>
        {
            GuidanceModel::with_banner(Some(banner(
                "guidance.jobMatch.banner",
                &format!("/jobs/{id}/match"),
            )))
        }
        _ => GuidanceModel::default(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Applications
// ────────────────────────────────────────────────────────────────────────────

/// `(key prefix, icon, target)` for an empty state.
type EmptyStateSpec = (&'static str, &'static str, &'static str);

fn applications_guidance(
    state: &ProgressState,
    locked_id: &str,
    count: Option<u32>,
    empty: Option<EmptyStateSpec>,
) -> GuidanceModel {
    let empty_state = match empty {
        Some((prefix, icon, to)) if count == Some(0) => Some(empty_state(prefix, icon, to)),
        _ => None,
    };

    GuidanceModel {
        banner: None,
        empty_state,
        locked_features: applications_lock(state, locked_id).map(|feature| vec![feature]),
    }
}

/// Shared lock for the tailoring pages. Unlocked once both phase 2 groups
/// are complete; otherwise the reason is the first unmet gate across
/// grounding, identity depth, then job matching.
fn applications_lock(state: &ProgressState, id: &str) -> Option<LockedFeature> {
    if state.materials_prerequisites_met() {
        return None;
    }

    let (slug, to) = if !state.grounding().is_complete() {
        ("lockedPhase1", "/profile/experiences")
    } else if let Some(gate) = state.identity_depth().first_missing() {
        match gate {
            Gate::ProfileDepth => ("lockedProfileDepth", EDIT_PROFILE),
            Gate::Stories => ("lockedStories", "/profile/stories"),
            _ => ("lockedCanvas", "/profile/canvas"),
        }
    } else if let Some(gate) = state.job_matching().first_missing() {
        match gate {
            Gate::JobUploaded => ("lockedJob", "/jobs/new"),
            _ => ("lockedMatchingSummary", "/jobs"),
        }
    } else {
        ("locked", "/jobs")
    };

    let prefix = format!("guidance.applications.{slug}");
    Some(locked(
        id,
        &format!("{prefix}.title"),
        &format!("{prefix}.description"),
        &format!("{prefix}.cta"),
        to,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

fn cta(label_key: &str, to: &str) -> GuidanceCta {
    GuidanceCta {
        label_key: label_key.to_string(),
        to: to.to_string(),
    }
}

fn banner(prefix: &str, to: &str) -> GuidanceBanner {
    GuidanceBanner {
        title_key: format!("{prefix}.title"),
        description_key: format!("{prefix}.description"),
        cta: Some(cta(&format!("{prefix}.cta"), to)),
    }
}

fn empty_state(prefix: &str, icon: &str, to: &str) -> GuidanceEmptyState {
    GuidanceEmptyState {
        title_key: format!("{prefix}.title"),
        description_key: format!("{prefix}.description"),
        icon: Some(icon.to_string()),
        cta: cta(&format!("{prefix}.cta"), to),
    }
}

fn locked(
    id: &str,
    title_key: &str,
    description_key: &str,
    label_key: &str,
    to: &str,
) -> LockedFeature {
    LockedFeature {
        id: id.to_string(),
        title_key: title_key.to_string(),
        description_key: description_key.to_string(),
        cta: cta(label_key, to),
    }
}
