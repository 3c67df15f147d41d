use std::rc::Rc;

use log::debug;
use thiserror::Error;

use crate::context::ApiContext;

/// Maximum number of parent hops the locator takes before giving up.
/// Content nested deeper than this from the host frame is unsupported.
pub const MAX_HOPS: u32 = 7;

/// Why API discovery failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The hop bound was hit before the chain topped out.
    #[error("no {0} object found: frame nesting exceeds the hop limit")]
    TooDeeplyNested(String),

    /// The chain topped out without the property ever being present.
    #[error("no {0} object found in the window chain")]
    NotFound(String),
}

/// Walk the ancestor chain from `start` looking for `property`.
///
/// The current context is checked first; the walk moves to the parent
/// only while a parent exists and is a distinct context. At most
/// [`MAX_HOPS`] hops are taken. This runs exactly once per session —
/// no retries, no caching.
pub fn locate<H: ?Sized>(
    start: Rc<dyn ApiContext<H>>,
    property: &str,
) -> Result<Rc<H>, DiscoveryError> {
    let mut context = start;
    let mut hops = 0u32;

    loop {
        if let Some(api) = context.api_object(property) {
            debug!("found {} object after {} hops", property, hops);
            return Ok(api);
        }

        let parent = match context.parent() {
            Some(parent) if !Rc::ptr_eq(&context, &parent) => parent,
            _ => return Err(DiscoveryError::NotFound(property.to_string())),
        };

        hops += 1;
        if hops > MAX_HOPS {
            return Err(DiscoveryError::TooDeeplyNested(property.to_string()));
        }
        context = parent;
    }
}
