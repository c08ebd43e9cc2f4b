//! Domain primitives and aggregates.
//!
//! Purpose: define the catalogue entities (regions, walk difficulties and
//! walks), their write drafts, identifiers and validators, independent of
//! HTTP and persistence concerns.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - FieldError: one rejected field from a validator.
//! - Region, WalkDifficulty, Walk and their drafts.
//! - TraceId: request correlation identifier held in task-local storage.

pub mod error;
pub mod ids;
pub mod ports;
pub mod region;
pub mod trace_id;
pub mod validation;
pub mod walk;
pub mod walk_difficulty;

pub use self::error::{Error, ErrorCode};
pub use self::ids::{RegionId, WalkDifficultyId, WalkId};
pub use self::region::{Region, RegionDraft};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldError, validate_region, validate_walk, validate_walk_difficulty};
pub use self::walk::{Walk, WalkDraft};
pub use self::walk_difficulty::{WalkDifficulty, WalkDifficultyDraft};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use nzwalks_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
