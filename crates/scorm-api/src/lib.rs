//! # scorm-api
//!
//! Contract types for the SCORM runtime API object an LMS exposes to
//! content.
//!
//! This crate provides:
//! - Host API traits for both wire dialects (SCORM 1.2 and SCORM 2004)
//! - `ApiValue`, the raw result of a host call, with success-sentinel
//!   normalization
//! - `ErrorCode`, the host's last-error convention (`"0"` means no error)
//! - Well-known property names and data-model element constants
//!
//! Nothing here talks to an LMS; the traits describe what the host must
//! expose, and the `scorm-runtime` crate drives them.
//!
//! ## Example
//!
//! ```ignore
//! use scorm_api::{ApiValue, ErrorCode, Scorm12Host};
//!
//! fn check(host: &dyn Scorm12Host) -> bool {
//!     let result = host.lms_commit("");
//!     result.is_success() && host.lms_get_last_error().is_clear()
//! }
//! ```

mod error;
mod value;

pub mod scorm12;
pub mod scorm2004;

pub use error::{ErrorCode, NO_ERROR};
pub use scorm12::Scorm12Host;
pub use scorm2004::Scorm2004Host;
pub use value::ApiValue;
