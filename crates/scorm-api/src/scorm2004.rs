//! SCORM 2004 host contract.

use crate::{ApiValue, ErrorCode};

/// Well-known window property under which a SCORM 2004 LMS publishes its
/// API object.
pub const API_PROPERTY: &str = "API_1484_11";

/// The runtime API object a SCORM 2004 LMS exposes to content.
///
/// Same shape as [`Scorm12Host`](crate::Scorm12Host) with the 2004
/// method names and data model. The last-error state reflects only the
/// most recent call.
pub trait Scorm2004Host {
    /// Open the communication session. `arg` is always `""` per the
    /// standard.
    fn initialize(&self, arg: &str) -> ApiValue;

    /// Close the communication session. `arg` is always `""`.
    fn terminate(&self, arg: &str) -> ApiValue;

    /// Read a data-model element. The result is meaningful only when the
    /// subsequent last-error query reports `"0"`.
    fn get_value(&self, element: &str) -> String;

    /// Write a data-model element.
    fn set_value(&self, element: &str, value: &str) -> ApiValue;

    /// Ask the LMS to persist everything written so far. `arg` is always
    /// `""`.
    fn commit(&self, arg: &str) -> ApiValue;

    /// Error code for the most recent call.
    fn get_last_error(&self) -> ErrorCode;
}

/// Data-model element names from the 2004 standard used by this
/// workspace.
pub mod elements {
    /// Whether the learner finished the activity.
    pub const COMPLETION_STATUS: &str = "cmi.completion_status";
    /// Whether the learner mastered the activity.
    pub const SUCCESS_STATUS: &str = "cmi.success_status";
    /// Raw score for the attempt.
    pub const SCORE_RAW: &str = "cmi.score.raw";
    /// Lower bound of the score range.
    pub const SCORE_MIN: &str = "cmi.score.min";
    /// Upper bound of the score range.
    pub const SCORE_MAX: &str = "cmi.score.max";
}
