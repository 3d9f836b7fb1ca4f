//! Snapshot Builder — counts raw record lists into `ProgressInputs`.
//!
//! The caller fetches records however it likes and hands over the lists;
//! only generated documents tied to a job count as tailored material.

use serde::{Deserialize, Serialize};

use crate::progress::models::{ProgressInputs, ProgressProfile};

/// Reference to a generated document (CV, cover letter, speech block).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub id: String,
    #[serde(default)]
    pub job_id: Option<String>,
}

impl DocumentRef {
    pub fn is_tailored(&self) -> bool {
        self.job_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }
}

/// Record ids as fetched for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressSnapshot {
    pub profile: Option<ProgressProfile>,
    pub experiences: Vec<String>,
    pub stories: Vec<String>,
    pub personal_canvas: bool,
    pub jobs: Vec<String>,
    pub matching_summaries: Vec<String>,
    pub cvs: Vec<DocumentRef>,
    pub cover_letters: Vec<DocumentRef>,
    pub speech_blocks: Vec<DocumentRef>,
}

impl ProgressSnapshot {
    pub fn to_inputs(&self) -> ProgressInputs {
        ProgressInputs {
            profile: self.profile.clone(),
            experience_count: count(self.experiences.len()),
            story_count: count(self.stories.len()),
            // A user owns at most one personal canvas.
            personal_canvas_count: u32::from(self.personal_canvas),
            job_count: count(self.jobs.len()),
            matching_summary_count: count(self.matching_summaries.len()),
            tailored_cv_count: tailored(&self.cvs),
            tailored_cover_letter_count: tailored(&self.cover_letters),
            tailored_speech_count: tailored(&self.speech_blocks),
        }
    }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn tailored(documents: &[DocumentRef]) -> u32 {
    count(documents.iter().filter(|doc| doc.is_tailored()).count())
}
