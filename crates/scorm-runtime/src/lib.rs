//! # scorm-runtime
//!
//! Runtime communication adapter between content running inside a
//! learning module and the hosting LMS.
//!
//! This crate provides:
//! - API discovery: a bounded walk up the enclosing window/frame chain
//!   looking for the host's well-known API property
//! - Session lifecycle management (`initialize` → data access →
//!   `terminate`) behind one uniform contract
//! - Two dialect adapters, SCORM 1.2 and SCORM 2004, issuing the
//!   dialect's own calls underneath
//! - Last-error checking after every data-model operation, degraded
//!   into boolean/empty-string results plus log diagnostics
//!
//! Which dialect adapter to construct is a deployment decision; nothing
//! here sniffs the environment.
//!
//! ## Example
//!
//! ```ignore
//! use scorm_runtime::{RuntimeSession, Scorm12Session};
//!
//! let mut session = Scorm12Session::discover(window_context);
//! if session.initialize() {
//!     session.set_value("cmi.core.lesson_status", "completed");
//!     session.commit();
//! }
//! session.terminate();
//! ```

mod context;
mod locator;
mod scorm12;
mod scorm2004;
mod session;

pub use context::ApiContext;
pub use locator::{locate, DiscoveryError, MAX_HOPS};
pub use scorm12::Scorm12Session;
pub use scorm2004::Scorm2004Session;
pub use session::{RuntimeSession, SessionState};

// Re-export the contract crate for consumers implementing a context.
pub use scorm_api;
