//! Progress Evaluator — turns raw completion signals into a `ProgressState`.
//!
//! Total over its input: absent or blank fields count as "not satisfied",
//! never as errors. Each group function is named after what it checks.

use crate::progress::models::{
    Gate, PhaseCheckResult, ProgressInputs, ProgressProfile, ProgressState,
};

/// Experiences required before grounding is complete.
pub const MIN_EXPERIENCE_COUNT: u32 = 3;

pub fn evaluate(inputs: &ProgressInputs) -> ProgressState {
    ProgressState::from_groups(
        evaluate_grounding(inputs),
        evaluate_identity_depth(inputs),
        evaluate_job_matching(inputs),
        evaluate_materials(inputs),
    )
}

/// Phase 1. Missing order: `cvUploaded`, `experienceCount`, `profileBasics`.
pub fn evaluate_grounding(inputs: &ProgressInputs) -> PhaseCheckResult {
    // Any imported experience means a CV went through the parser.
    let cv_uploaded = inputs.experience_count > 0;
    let enough_experiences = inputs.experience_count >= MIN_EXPERIENCE_COUNT;

    PhaseCheckResult::from_checks([
        (Gate::CvUploaded, cv_uploaded),
        (Gate::ExperienceCount, enough_experiences),
        (Gate::ProfileBasics, has_profile_basics(inputs.profile.as_ref())),
    ])
}

/// Missing order: `profileDepth`, `stories`, `personalCanvas`.
pub fn evaluate_identity_depth(inputs: &ProgressInputs) -> PhaseCheckResult {
    PhaseCheckResult::from_checks([
        (Gate::ProfileDepth, has_profile_depth(inputs.profile.as_ref())),
        (Gate::Stories, inputs.story_count > 0),
        (Gate::PersonalCanvas, inputs.personal_canvas_count > 0),
    ])
}

/// Missing order: `jobUploaded`, `matchingSummary`.
pub fn evaluate_job_matching(inputs: &ProgressInputs) -> PhaseCheckResult {
    PhaseCheckResult::from_checks([
        (Gate::JobUploaded, inputs.job_count > 0),
        (Gate::MatchingSummary, inputs.matching_summary_count > 0),
    ])
}

/// Missing order: `tailoredCv`, `tailoredCoverLetter`, `tailoredSpeech`.
pub fn evaluate_materials(inputs: &ProgressInputs) -> PhaseCheckResult {
    PhaseCheckResult::from_checks([
        (Gate::TailoredCv, inputs.tailored_cv_count > 0),
        (Gate::TailoredCoverLetter, inputs.tailored_cover_letter_count > 0),
        (Gate::TailoredSpeech, inputs.tailored_speech_count > 0),
    ])
}

// ────────────────────────────────────────────────────────────────────────────
// Profile predicates
// ────────────────────────────────────────────────────────────────────────────

fn has_profile_basics(profile: Option<&ProgressProfile>) -> bool {
    let Some(p) = profile else {
        return false;
    };

    let has_contact =
        is_filled(p.primary_email.as_deref()) || is_filled(p.primary_phone.as_deref());

    is_filled(p.full_name.as_deref())
        && has_contact
        && is_filled(p.work_permit.as_deref())
        && has_entries(p.social_links.as_deref())
        && has_entries(p.skills.as_deref())
        && has_entries(p.languages.as_deref())
}

fn has_profile_depth(profile: Option<&ProgressProfile>) -> bool {
    profile.is_some_and(|p| {
        has_entries(p.goals.as_deref())
            && has_entries(p.aspirations.as_deref())
            && has_entries(p.personal_values.as_deref())
    })
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Blank rows left behind by an edit form do not count.
fn has_entries(values: Option<&[String]>) -> bool {
    values.is_some_and(|v| v.iter().any(|s| !s.trim().is_empty()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::progress::models::Phase;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    pub(crate) fn basics_profile() -> ProgressProfile {
        ProgressProfile {
            full_name: Some("Ada Lovelace".to_string()),
            primary_email: Some("ada@example.com".to_string()),
            primary_phone: None,
            work_permit: Some("EU citizen".to_string()),
            social_links: strings(&["https://linkedin.com/in/ada"]),
            skills: strings(&["Rust"]),
            languages: strings(&["English"]),
            goals: None,
            aspirations: None,
            personal_values: None,
        }
    }

    pub(crate) fn full_profile() -> ProgressProfile {
        ProgressProfile {
            goals: strings(&["Lead a platform team"]),
            aspirations: strings(&["Mentor engineers"]),
            personal_values: strings(&["Craft"]),
            ..basics_profile()
        }
    }

    /// Every phase 1 and phase 2 gate satisfied, no tailored materials.
    pub(crate) fn phase3_inputs() -> ProgressInputs {
        ProgressInputs {
            profile: Some(full_profile()),
            experience_count: 3,
            story_count: 2,
            personal_canvas_count: 1,
            job_count: 1,
            matching_summary_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_experiences_is_phase1_with_all_grounding_gates() {
        let state = evaluate(&ProgressInputs::default());
        assert_eq!(state.phase(), Phase::Phase1);
        assert_eq!(
            state.grounding().missing(),
            &[Gate::CvUploaded, Gate::ExperienceCount, Gate::ProfileBasics]
        );
    }

    #[test]
    fn test_one_experience_clears_cv_gate_only() {
        let inputs = ProgressInputs {
            experience_count: 1,
            profile: Some(basics_profile()),
            ..Default::default()
        };
        let state = evaluate(&inputs);
        assert_eq!(state.grounding().missing(), &[Gate::ExperienceCount]);
    }

    #[test]
    fn test_each_basics_field_is_required() {
        let variants: Vec<ProgressProfile> = vec![
            ProgressProfile { full_name: Some("   ".to_string()), ..basics_profile() },
            ProgressProfile { primary_email: None, primary_phone: None, ..basics_profile() },
            ProgressProfile { work_permit: None, ..basics_profile() },
            ProgressProfile { social_links: Some(vec![]), ..basics_profile() },
            ProgressProfile { skills: None, ..basics_profile() },
            ProgressProfile { languages: strings(&[" "]), ..basics_profile() },
        ];
        for profile in variants {
            let inputs = ProgressInputs {
                experience_count: 3,
                profile: Some(profile.clone()),
                ..Default::default()
            };
            let state = evaluate(&inputs);
            assert_eq!(
                state.grounding().missing(),
                &[Gate::ProfileBasics],
                "profile {profile:?} should miss basics"
            );
        }
    }

    #[test]
    fn test_phone_alone_satisfies_contact() {
        let inputs = ProgressInputs {
            experience_count: 3,
            profile: Some(ProgressProfile {
                primary_email: None,
                primary_phone: Some("+33 1 23 45 67 89".to_string()),
                ..basics_profile()
            }),
            ..Default::default()
        };
        assert!(evaluate(&inputs).grounding().is_complete());
    }

    #[test]
    fn test_missing_profile_fails_basics_and_depth() {
        let inputs = ProgressInputs {
            experience_count: 5,
            story_count: 1,
            personal_canvas_count: 1,
            ..Default::default()
        };
        let state = evaluate(&inputs);
        assert_eq!(state.grounding().missing(), &[Gate::ProfileBasics]);
        assert_eq!(state.identity_depth().missing(), &[Gate::ProfileDepth]);
    }

    #[test]
    fn test_scenario_depth_missing_but_jobs_matched() {
        let inputs = ProgressInputs {
            profile: Some(ProgressProfile {
                goals: Some(vec![]),
                aspirations: Some(vec![]),
                personal_values: Some(vec![]),
                ..basics_profile()
            }),
            experience_count: 3,
            job_count: 1,
            matching_summary_count: 1,
            ..Default::default()
        };
        let state = evaluate(&inputs);
        assert!(state.grounding().is_complete());
        assert!(state.job_matching().is_complete());
        assert_eq!(
            state.identity_depth().missing(),
            &[Gate::ProfileDepth, Gate::Stories, Gate::PersonalCanvas]
        );
        assert_eq!(state.phase(), Phase::Phase2);
    }

    #[test]
    fn test_depth_needs_all_three_lists() {
        let inputs = ProgressInputs {
            profile: Some(ProgressProfile {
                personal_values: None,
                ..full_profile()
            }),
            ..phase3_inputs()
        };
        let state = evaluate(&inputs);
        assert_eq!(state.identity_depth().missing(), &[Gate::ProfileDepth]);
    }

    #[test]
    fn test_job_matching_incomplete_alone_is_phase2() {
        let inputs = ProgressInputs {
            matching_summary_count: 0,
            ..phase3_inputs()
        };
        let state = evaluate(&inputs);
        assert!(state.identity_depth().is_complete());
        assert_eq!(state.job_matching().missing(), &[Gate::MatchingSummary]);
        assert_eq!(state.phase(), Phase::Phase2);
    }

    #[test]
    fn test_phase3_then_bonus() {
        let state = evaluate(&phase3_inputs());
        assert_eq!(state.phase(), Phase::Phase3);
        assert_eq!(
            state.materials().missing(),
            &[Gate::TailoredCv, Gate::TailoredCoverLetter, Gate::TailoredSpeech]
        );

        let inputs = ProgressInputs {
            tailored_cv_count: 1,
            tailored_cover_letter_count: 2,
            tailored_speech_count: 1,
            ..phase3_inputs()
        };
        assert_eq!(evaluate(&inputs).phase(), Phase::Bonus);
    }

    #[test]
    fn test_groups_report_independently_of_phase() {
        // Grounding incomplete does not hide the state of later groups.
        let inputs = ProgressInputs {
            experience_count: 0,
            tailored_speech_count: 1,
            ..phase3_inputs()
        };
        let state = evaluate(&inputs);
        assert_eq!(state.phase(), Phase::Phase1);
        assert!(state.identity_depth().is_complete());
        assert!(state.job_matching().is_complete());
        assert_eq!(
            state.materials().missing(),
            &[Gate::TailoredCv, Gate::TailoredCoverLetter]
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let inputs = phase3_inputs();
        assert_eq!(evaluate(&inputs), evaluate(&inputs));
    }

    #[test]
    fn test_improving_one_signal_never_reintroduces_other_gates() {
        let base = ProgressInputs {
            profile: Some(basics_profile()),
            experience_count: 2,
            story_count: 1,
            job_count: 1,
            ..Default::default()
        };
        let before = evaluate(&base);
        let improvements = [
            ProgressInputs { experience_count: 3, ..base.clone() },
            ProgressInputs { personal_canvas_count: 1, ..base.clone() },
            ProgressInputs { matching_summary_count: 1, ..base.clone() },
            ProgressInputs { tailored_cv_count: 1, ..base.clone() },
        ];
        for improved in improvements {
            let after = evaluate(&improved);
            let pairs = [
                (before.grounding(), after.grounding()),
                (before.identity_depth(), after.identity_depth()),
                (before.job_matching(), after.job_matching()),
                (before.materials(), after.materials()),
            ];
            for (old, new) in pairs {
                for gate in new.missing() {
                    assert!(old.is_missing(*gate), "{gate} reappeared after {improved:?}");
                }
            }
        }
    }
}
