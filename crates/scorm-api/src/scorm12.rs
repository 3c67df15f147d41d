//! SCORM 1.2 host contract.

use crate::{ApiValue, ErrorCode};

/// Well-known window property under which a SCORM 1.2 LMS publishes its
/// API object.
pub const API_PROPERTY: &str = "API";

/// The runtime API object a SCORM 1.2 LMS exposes to content.
///
/// Method names mirror the 1.2 runtime standard. Calls are synchronous
/// and single-call-at-a-time: the state behind [`lms_get_last_error`]
/// reflects only the most recent data-model call, so callers must read
/// it immediately after the call it belongs to.
///
/// [`lms_get_last_error`]: Scorm12Host::lms_get_last_error
pub trait Scorm12Host {
    /// Open the communication session. `arg` is always `""` per the
    /// standard.
    fn lms_initialize(&self, arg: &str) -> ApiValue;

    /// Close the communication session. `arg` is always `""`.
    fn lms_finish(&self, arg: &str) -> ApiValue;

    /// Read a data-model element. The result is meaningful only when the
    /// subsequent last-error query reports `"0"`.
    fn lms_get_value(&self, element: &str) -> String;

    /// Write a data-model element.
    fn lms_set_value(&self, element: &str, value: &str) -> ApiValue;

    /// Ask the LMS to persist everything written so far. `arg` is always
    /// `""`.
    fn lms_commit(&self, arg: &str) -> ApiValue;

    /// Error code for the most recent call.
    fn lms_get_last_error(&self) -> ErrorCode;
}

/// Data-model element names from the 1.2 standard used by this
/// workspace. Elements are opaque keys to the adapter; these constants
/// only spare callers the string literals.
pub mod elements {
    /// Learner completion status for the activity.
    pub const LESSON_STATUS: &str = "cmi.core.lesson_status";
    /// Raw score for the attempt.
    pub const SCORE_RAW: &str = "cmi.core.score.raw";
    /// Lower bound of the score range.
    pub const SCORE_MIN: &str = "cmi.core.score.min";
    /// Upper bound of the score range.
    pub const SCORE_MAX: &str = "cmi.core.score.max";
}
