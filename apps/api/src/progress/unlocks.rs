use serde::{Deserialize, Serialize};

use crate::progress::models::ProgressState;

/// Feature tiers gated by progress. Each tier also requires the one below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureUnlocks {
    /// Grounding complete.
    pub phase2_enabled: bool,
    /// Phase 2 enabled, identity depth and job matching both complete.
    pub phase3_enabled: bool,
    /// Phase 3 enabled, tailored materials complete.
    pub bonus_enabled: bool,
}

pub fn unlocks(state: &ProgressState) -> FeatureUnlocks {
    let phase2_enabled = state.grounding().is_complete();
    let phase3_enabled = phase2_enabled && state.materials_prerequisites_met();
    FeatureUnlocks {
        phase2_enabled,
        phase3_enabled,
        bonus_enabled: phase3_enabled && state.materials().is_complete(),
    }
}
