//! Walk difficulty grades (for example "Easy", "Medium", "Hard").

use super::ids::WalkDifficultyId;

/// Write payload for a walk difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficultyDraft {
    pub code: String,
}

/// Persisted walk difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficulty {
    pub id: WalkDifficultyId,
    pub code: String,
}

impl WalkDifficulty {
    /// Combine an identifier with the fields of a draft.
    pub fn from_draft(id: WalkDifficultyId, draft: WalkDifficultyDraft) -> Self {
        Self {
            id,
            code: draft.code,
        }
    }

    /// Overwrite every mutable field, keeping the identifier.
    pub fn apply(&mut self, draft: WalkDifficultyDraft) {
        self.code = draft.code;
    }
}
