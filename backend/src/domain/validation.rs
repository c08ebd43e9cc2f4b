//! Write-payload validators.
//!
//! Validators accumulate every failing field instead of stopping at the
//! first one. An empty list means the draft may be persisted.

use serde::Serialize;

use super::ports::{RegionRepository, RepositoryError, WalkDifficultyRepository};
use super::{RegionDraft, WalkDifficultyDraft, WalkDraft};

/// One rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Build a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn require_text(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(
            field,
            format!("{field} cannot be null, empty or whitespace"),
        ));
    }
}

fn require_positive(errors: &mut Vec<FieldError>, field: &str, value: f64) {
    if value.is_nan() || value <= 0.0 {
        errors.push(FieldError::new(
            field,
            format!("{field} has to be greater than 0"),
        ));
    }
}

/// Check a region draft for add or update.
///
/// # Examples
/// ```
/// use nzwalks_backend::domain::{RegionDraft, validate_region};
///
/// let draft = RegionDraft {
///     code: " ".to_owned(),
///     name: "Wellington".to_owned(),
///     area: 0.0,
///     lat: -41.3,
///     long: 174.8,
///     population: 200_000,
/// };
/// let fields: Vec<_> = validate_region(&draft).into_iter().map(|e| e.field).collect();
/// assert_eq!(fields, ["Code", "Area"]);
/// ```
pub fn validate_region(draft: &RegionDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_text(&mut errors, "Code", &draft.code);
    require_text(&mut errors, "Name", &draft.name);
    require_positive(&mut errors, "Area", draft.area);
    if draft.population < 0 {
        errors.push(FieldError::new(
            "Population",
            "Population has to be greater than or equal to 0",
        ));
    }
    errors
}

/// Check a walk difficulty draft for add or update.
pub fn validate_walk_difficulty(draft: &WalkDifficultyDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_text(&mut errors, "Code", &draft.code);
    errors
}

/// Check a walk draft for add or update.
///
/// Both references are resolved through their repositories. A failing
/// lookup is returned as `Err` so a store outage is not reported as an
/// invalid reference.
pub async fn validate_walk(
    draft: &WalkDraft,
    regions: &dyn RegionRepository,
    walk_difficulties: &dyn WalkDifficultyRepository,
) -> Result<Vec<FieldError>, RepositoryError> {
    let mut errors = Vec::new();
    require_text(&mut errors, "Name", &draft.name);
    require_positive(&mut errors, "Length", draft.length);

    if regions.find_by_id(&draft.region_id).await?.is_none() {
        errors.push(FieldError::new("RegionId", "RegionId is invalid"));
    }
    if walk_difficulties
        .find_by_id(&draft.walk_difficulty_id)
        .await?
        .is_none()
    {
        errors.push(FieldError::new(
            "WalkDifficultyId",
            "WalkDifficultyId is invalid",
        ));
    }
    Ok(errors)
}
