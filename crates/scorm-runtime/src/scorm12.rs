use std::rc::Rc;

use log::{debug, error};
use scorm_api::scorm12::{elements, API_PROPERTY};
use scorm_api::Scorm12Host;

use crate::context::ApiContext;
use crate::locator::locate;
use crate::session::{RuntimeSession, SessionState};

/// Elements seeded right after a successful initialize.
const BASELINE: [(&str, &str); 3] = [
    (elements::LESSON_STATUS, "incomplete"),
    (elements::SCORE_MIN, "0"),
    (elements::SCORE_MAX, "100"),
];

/// Session adapter for a SCORM 1.2 host.
///
/// Discovery runs exactly once, at construction; the handle is never
/// replaced afterwards. A session built without a reachable host still
/// answers every operation, with its failure value.
pub struct Scorm12Session {
    api: Option<Rc<dyn Scorm12Host>>,
    state: SessionState,
}

impl Scorm12Session {
    /// Locate the host API object starting from `context` and wrap it.
    pub fn discover(context: Rc<dyn ApiContext<dyn Scorm12Host>>) -> Self {
        let api = match locate(context, API_PROPERTY) {
            Ok(api) => Some(api),
            Err(err) => {
                error!("{}", err);
                None
            }
        };
        Self {
            api,
            state: SessionState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Seed the data model after a successful initialize. Outcomes are
    /// intentionally discarded; these writes never gate the initialize
    /// result.
    fn write_baseline(&self) {
        for (element, value) in BASELINE {
            let _ = self.set_value(element, value);
        }
    }
}

impl RuntimeSession for Scorm12Session {
    fn initialize(&mut self) -> bool {
        let Some(api) = &self.api else {
            error!("LMSInitialize skipped: SCORM 1.2 API not found");
            return false;
        };

        let result = api.lms_initialize("");
        debug!("LMSInitialize returned {}", result);
        if !result.is_success() {
            return false;
        }

        self.state = SessionState::Active;
        self.write_baseline();
        true
    }

    fn terminate(&mut self) -> bool {
        let Some(api) = &self.api else {
            return false;
        };

        let result = api.lms_finish("");
        debug!("LMSFinish returned {}", result);
        if !result.is_success() {
            return false;
        }

        self.state = SessionState::Terminated;
        true
    }

    fn get_value(&self, element: &str) -> String {
        let Some(api) = &self.api else {
            return String::new();
        };

        let value = api.lms_get_value(element);
        // Last-error reflects only the most recent call; read it before
        // anything else touches the host.
        let code = api.lms_get_last_error();
        if !code.is_clear() {
            error!("LMSGetValue('{}') failed: error {}", element, code);
            return String::new();
        }

        value
    }

    fn set_value(&self, element: &str, value: &str) -> bool {
        let Some(api) = &self.api else {
            return false;
        };

        let result = api.lms_set_value(element, value);
        let code = api.lms_get_last_error();
        if !code.is_clear() {
            error!(
                "LMSSetValue('{}', '{}') failed: error {}",
                element, value, code
            );
            return false;
        }

        result.is_success()
    }

    fn commit(&self) -> bool {
        let Some(api) = &self.api else {
            return false;
        };

        let result = api.lms_commit("");
        let code = api.lms_get_last_error();
        if !code.is_clear() {
            error!("LMSCommit failed: error {}", code);
            return false;
        }

        result.is_success()
    }
}
