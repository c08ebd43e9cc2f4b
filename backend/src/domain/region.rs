//! Region aggregate: the geographic area a walk belongs to.

use super::ids::RegionId;

/// Write payload for a region: every mutable field, no identifier.
///
/// Add and Update both take a full draft; updates replace every field.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    /// Area in square kilometres; validated as strictly positive.
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    /// Head count; validated as non-negative.
    pub population: i64,
}

/// Persisted region.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl Region {
    /// Combine an identifier with the fields of a draft.
    ///
    /// # Examples
    /// ```
    /// use nzwalks_backend::domain::{Region, RegionDraft, RegionId};
    ///
    /// let draft = RegionDraft {
    ///     code: "WGN".to_owned(),
    ///     name: "Wellington".to_owned(),
    ///     area: 100.0,
    ///     lat: -41.3,
    ///     long: 174.8,
    ///     population: 200_000,
    /// };
    /// let id = RegionId::random();
    /// let region = Region::from_draft(id, draft);
    /// assert_eq!(region.id, id);
    /// assert_eq!(region.code, "WGN");
    /// ```
    pub fn from_draft(id: RegionId, draft: RegionDraft) -> Self {
        let RegionDraft {
            code,
            name,
            area,
            lat,
            long,
            population,
        } = draft;
        Self {
            id,
            code,
            name,
            area,
            lat,
            long,
            population,
        }
    }

    /// Overwrite every mutable field, keeping the identifier.
    pub fn apply(&mut self, draft: RegionDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}
