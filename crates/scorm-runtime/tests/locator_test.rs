use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scorm_runtime::{locate, ApiContext, DiscoveryError};

/// Stand-in for the host API object; the locator only moves handles.
#[derive(Debug)]
struct Marker;

/// A window-like frame: optional API property, parent link, and a
/// lookup counter for traversal assertions.
struct Frame {
    api: Option<Rc<Marker>>,
    parent: RefCell<Option<Rc<Frame>>>,
    lookups: Cell<u32>,
}

impl Frame {
    fn new(api: Option<Rc<Marker>>) -> Rc<Frame> {
        Rc::new(Frame {
            api,
            parent: RefCell::new(None),
            lookups: Cell::new(0),
        })
    }
}

impl ApiContext<Marker> for Frame {
    fn api_object(&self, property: &str) -> Option<Rc<Marker>> {
        assert_eq!(property, "API");
        self.lookups.set(self.lookups.get() + 1);
        self.api.clone()
    }

    fn parent(&self) -> Option<Rc<dyn ApiContext<Marker>>> {
        self.parent
            .borrow()
            .clone()
            .map(|frame| frame as Rc<dyn ApiContext<Marker>>)
    }
}

/// Build a chain with the API object on the topmost frame and `depth`
/// frames below it. Returns the innermost frame plus every frame from
/// the top down.
fn chain(depth: usize) -> (Rc<Frame>, Vec<Rc<Frame>>) {
    let top = Frame::new(Some(Rc::new(Marker)));
    let mut frames = vec![top.clone()];
    let mut current = top;
    for _ in 0..depth {
        let child = Frame::new(None);
        *child.parent.borrow_mut() = Some(current.clone());
        frames.push(child.clone());
        current = child;
    }
    (current, frames)
}

#[test]
fn finds_api_at_every_supported_depth() {
    for depth in 0..=7 {
        let (innermost, _frames) = chain(depth);
        let found = locate(innermost as Rc<dyn ApiContext<Marker>>, "API");
        assert!(found.is_ok(), "depth {} should be reachable", depth);
    }
}

#[test]
fn depth_eight_fails_without_reaching_the_top() {
    let (innermost, frames) = chain(8);
    let result = locate(innermost as Rc<dyn ApiContext<Marker>>, "API");

    assert_eq!(
        result.unwrap_err(),
        DiscoveryError::TooDeeplyNested("API".to_string())
    );

    // Seven hops from the innermost frame: eight frames consulted, the
    // top (holding the API) never reached.
    let total: u32 = frames.iter().map(|frame| frame.lookups.get()).sum();
    assert_eq!(total, 8);
    assert_eq!(frames[0].lookups.get(), 0);
}

#[test]
fn top_level_frame_without_api_fails_immediately() {
    let lone = Frame::new(None);
    let result = locate(lone.clone() as Rc<dyn ApiContext<Marker>>, "API");

    assert_eq!(
        result.unwrap_err(),
        DiscoveryError::NotFound("API".to_string())
    );
    assert_eq!(lone.lookups.get(), 1);
}

#[test]
fn self_parent_top_frame_terminates_the_walk() {
    // Browsers model the top window as its own parent.
    let top = Frame::new(None);
    *top.parent.borrow_mut() = Some(top.clone());
    let child = Frame::new(None);
    *child.parent.borrow_mut() = Some(top.clone());

    let result = locate(child as Rc<dyn ApiContext<Marker>>, "API");

    assert_eq!(
        result.unwrap_err(),
        DiscoveryError::NotFound("API".to_string())
    );
    assert_eq!(top.lookups.get(), 1);
}
