//! Walk aggregate: a named trail inside one region with one difficulty grade.

use super::ids::{RegionId, WalkDifficultyId, WalkId};
use super::region::Region;
use super::walk_difficulty::WalkDifficulty;

/// Write payload for a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkDraft {
    pub name: String,
    /// Length in kilometres; validated as strictly positive.
    pub length: f64,
    pub region_id: RegionId,
    pub walk_difficulty_id: WalkDifficultyId,
}

/// Persisted walk.
///
/// `region` and `walk_difficulty` are only populated by reads that join the
/// related rows (`list` and `find_by_id`). Writes return the bare row.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: WalkId,
    pub name: String,
    pub length: f64,
    pub region_id: RegionId,
    pub walk_difficulty_id: WalkDifficultyId,
    pub region: Option<Region>,
    pub walk_difficulty: Option<WalkDifficulty>,
}

impl Walk {
    /// Combine an identifier with the fields of a draft.
    pub fn from_draft(id: WalkId, draft: WalkDraft) -> Self {
        let WalkDraft {
            name,
            length,
            region_id,
            walk_difficulty_id,
        } = draft;
        Self {
            id,
            name,
            length,
            region_id,
            walk_difficulty_id,
            region: None,
            walk_difficulty: None,
        }
    }

    /// Attach the joined region and difficulty rows.
    pub fn with_relations(mut self, region: Region, walk_difficulty: WalkDifficulty) -> Self {
        self.region = Some(region);
        self.walk_difficulty = Some(walk_difficulty);
        self
    }

    /// Overwrite every mutable field, keeping the identifier.
    ///
    /// Joined relations are dropped because they may no longer match the
    /// new foreign keys.
    pub fn apply(&mut self, draft: WalkDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}
