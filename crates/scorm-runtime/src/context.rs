use std::rc::Rc;

/// A window-like context that may expose the host API object.
///
/// `H` is the dialect's host API trait object. Implementations model
/// the enclosing frame hierarchy as a named global property plus a
/// parent link; the locator walks this abstraction and never touches a
/// concrete environment. `Rc` rather than `Arc`: the whole runtime
/// contract is single-threaded and single-call-at-a-time.
pub trait ApiContext<H: ?Sized> {
    /// Look up a named global property that may hold the API object.
    fn api_object(&self, property: &str) -> Option<Rc<H>>;

    /// The enclosing context. `None` at the top level; returning the
    /// receiving context itself also marks the top.
    fn parent(&self) -> Option<Rc<dyn ApiContext<H>>>;
}
